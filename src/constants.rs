//! Constants for export page dimensions, grid and capacity values

/// A4 short edge in points
pub const A4_WIDTH: f32 = 595.0;

/// A4 long edge in points
pub const A4_HEIGHT: f32 = 842.0;

/// A3 short edge in points
pub const A3_WIDTH: f32 = 842.0;

/// A3 long edge in points
pub const A3_HEIGHT: f32 = 1191.0;

/// Row capacity of an A4 portrait page
pub const A4_PORTRAIT_MAX_ROWS: u32 = 20;

/// Row capacity of an A4 landscape page
pub const A4_LANDSCAPE_MAX_ROWS: u32 = 13;

/// Row capacity of an A3 portrait page
pub const A3_PORTRAIT_MAX_ROWS: u32 = 30;

/// Row capacity of an A3 landscape page
pub const A3_LANDSCAPE_MAX_ROWS: u32 = 14;

/// Number of columns in the dashboard grid
pub const GRID_COLUMNS: u32 = 24;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 24.0;

/// Default height of the title header band in points
pub const DEFAULT_HEADER_HEIGHT: f32 = 36.0;

/// Default gap between neighbouring cards in points
pub const DEFAULT_CARD_GAP: f32 = 6.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default title font size in points
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 16.0;

/// Default card label font size in points
pub const DEFAULT_CARD_FONT_SIZE: f32 = 9.0;

/// Default border width in points
pub const DEFAULT_BORDER_WIDTH: f32 = 0.75;

/// Inner padding between a card frame and its label
pub const CARD_LABEL_PADDING: f32 = 4.0;
