//! Shared drawing primitives for export page content

use crate::style::Color;
use lopdf::{Object, content::Operation};

/// Regular font resource name
pub const FONT_REGULAR: &str = "F1";

/// Bold font resource name
pub const FONT_BOLD: &str = "F1-Bold";

/// Set the fill color
pub fn set_fill_color(color: Color) -> Operation {
    Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()])
}

/// Set stroke color and width for drawing operations
pub fn set_stroke_style(color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
    ]
}

/// Draw a filled rectangle
pub fn draw_rectangle_fill(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
) -> Vec<Operation> {
    vec![
        set_fill_color(color),
        Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]),
        Operation::new("f", vec![]),
    ]
}

/// Draw a stroked rectangle (outline only)
pub fn draw_rectangle_stroke(x: f32, y: f32, width: f32, height: f32) -> Vec<Operation> {
    vec![
        Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Draw a horizontal line
pub fn draw_horizontal_line(start_x: f32, end_x: f32, y: f32) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![start_x.into(), y.into()]),
        Operation::new("l", vec![end_x.into(), y.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Show a single line of text with its baseline starting at (x, y)
pub fn draw_text_line(
    text: &str,
    x: f32,
    y: f32,
    font_name: &str,
    font_size: f32,
    color: Color,
) -> Vec<Operation> {
    if text.is_empty() {
        return Vec::new();
    }

    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
        ),
        set_fill_color(color),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(ops: &[Operation]) -> Vec<&str> {
        ops.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn test_rectangle_fill_sequence() {
        let ops = draw_rectangle_fill(1.0, 2.0, 3.0, 4.0, Color::white());
        assert_eq!(operators(&ops), vec!["rg", "re", "f"]);
        assert_eq!(ops[1].operands.len(), 4);
    }

    #[test]
    fn test_text_line_sequence() {
        let ops = draw_text_line("Title", 10.0, 20.0, FONT_BOLD, 12.0, Color::black());
        assert_eq!(operators(&ops), vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
        assert!(matches!(&ops[1].operands[0], Object::Name(name) if name == b"F1-Bold"));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        assert!(draw_text_line("", 0.0, 0.0, FONT_REGULAR, 10.0, Color::black()).is_empty());
    }
}
