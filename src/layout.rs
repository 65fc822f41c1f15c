//! Mapping dashboard grid coordinates onto an export page

use crate::Result;
use crate::constants::GRID_COLUMNS;
use crate::error::ExportError;
use crate::style::ExportStyle;
use tracing::trace;

/// Axis-aligned rectangle in PDF user space (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Y coordinate of the upper edge
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.top() <= self.top() + EPSILON
    }
}

/// Calculated geometry of one export page
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Band at the top of the page holding the title
    pub header: Rect,
    /// Area the card grid is laid out in
    pub content: Rect,
    pub column_width: f32,
    pub row_height: f32,
    pub card_gap: f32,
}

impl PageGeometry {
    /// Calculate the grid geometry for a page holding `page_max_rows` rows
    pub fn new(
        page_size: (f32, f32),
        page_max_rows: u32,
        style: &ExportStyle,
    ) -> Result<Self> {
        let (page_width, page_height) = page_size;
        if page_max_rows == 0 {
            return Err(ExportError::InvalidCapacity(page_max_rows));
        }

        let content_width = page_width - style.margin * 2.0;
        let content_height = page_height - style.margin * 2.0 - style.header_height;
        if content_width <= 0.0 || content_height <= 0.0 {
            return Err(ExportError::LayoutError(format!(
                "margins leave no room on a {page_width}x{page_height} page"
            )));
        }

        let header = Rect {
            x: style.margin,
            y: page_height - style.margin - style.header_height,
            width: content_width,
            height: style.header_height,
        };
        let content = Rect {
            x: style.margin,
            y: style.margin,
            width: content_width,
            height: content_height,
        };

        let geometry = Self {
            page_width,
            page_height,
            header,
            content,
            column_width: content_width / GRID_COLUMNS as f32,
            row_height: content_height / page_max_rows as f32,
            card_gap: style.card_gap,
        };
        trace!("Page geometry: {:?}", geometry);
        Ok(geometry)
    }

    /// Rectangle of a card slot, inset by half the gap on every side.
    ///
    /// Columns past the right edge of the grid are clipped.
    pub fn card_rect(&self, col: u32, row: u32, size_x: u32, size_y: u32) -> Rect {
        let col = col.min(GRID_COLUMNS);
        let size_x = size_x.min(GRID_COLUMNS - col);
        let inset = self.card_gap / 2.0;

        let width = (size_x as f32 * self.column_width - self.card_gap).max(0.0);
        let height = (size_y as f32 * self.row_height - self.card_gap).max(0.0);
        let x = self.content.x + col as f32 * self.column_width + inset;
        let top = self.content.top() - row as f32 * self.row_height - inset;

        Rect {
            x,
            y: top - height,
            width,
            height,
        }
    }
}
