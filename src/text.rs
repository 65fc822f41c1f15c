//! Text fitting for page headers and card labels

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;
use tracing::trace;

const ELLIPSIS: &str = "...";

/// Estimate text width based on character count and font size
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * DEFAULT_CHAR_WIDTH_RATIO
}

/// Replace characters the standard Type1 fonts cannot show
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch,
            '\n' | '\t' => ' ',
            _ => '?',
        })
        .collect()
}

/// Clip `text` so it fits within `max_width`, ending in an ellipsis when cut.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_text(text: &str, max_width: f32, font_size: f32) -> String {
    let text = pdf_safe(text.trim());
    if estimate_text_width(&text, font_size) <= max_width {
        return text;
    }

    let char_width = font_size * DEFAULT_CHAR_WIDTH_RATIO;
    if char_width <= 0.0 {
        return String::new();
    }
    let max_chars = (max_width / char_width) as usize;
    if max_chars < ELLIPSIS.len() {
        return String::new();
    }

    let kept: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    let fitted = format!("{}{}", kept.trim_end(), ELLIPSIS);
    trace!("Clipped {:?} to {:?}", text, fitted);
    fitted
}
