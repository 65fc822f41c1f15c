//! Styling for export page containers

use crate::constants::*;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Look of the page container drawn around each card group
#[derive(Debug, Clone)]
pub struct ExportStyle {
    /// Blank border around the page content
    pub margin: f32,
    /// Height of the band holding the dashboard title
    pub header_height: f32,
    /// Space left between neighbouring cards
    pub card_gap: f32,
    pub title_font_size: f32,
    pub card_font_size: f32,
    pub text_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    /// Fill behind each card slot (None leaves the slot transparent)
    pub card_background: Option<Color>,
    /// Rule drawn under the header (None for no rule)
    pub divider_color: Option<Color>,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            header_height: DEFAULT_HEADER_HEIGHT,
            card_gap: DEFAULT_CARD_GAP,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            card_font_size: DEFAULT_CARD_FONT_SIZE,
            text_color: Color::black(),
            border_color: Color::gray(0.8),
            border_width: DEFAULT_BORDER_WIDTH,
            card_background: Some(Color::white()),
            divider_color: Some(Color::gray(0.9)),
        }
    }
}

impl ExportStyle {
    /// Plain style without fills or divider, for printing
    pub fn outline() -> Self {
        Self {
            card_background: None,
            divider_color: None,
            border_color: Color::black(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_clamped() {
        let c = Color::rgb(1.5, -0.2, 0.4);
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.4));
        assert_eq!(Color::gray(2.0), Color::white());
    }

    #[test]
    fn test_outline_style() {
        let style = ExportStyle::outline();
        assert!(style.card_background.is_none());
        assert!(style.divider_color.is_none());
        assert_eq!(style.margin, DEFAULT_MARGIN);
    }
}
