//! PDF drawing operations for export page containers

use crate::Result;
use crate::card::{DashCard, GridCard};
use crate::constants::CARD_LABEL_PADDING;
use crate::drawing_utils::*;
use crate::error::ExportError;
use crate::layout::PageGeometry;
use crate::paging::CardGroup;
use crate::style::ExportStyle;
use crate::text::{estimate_text_width, fit_text};
use lopdf::{
    Document, Object, ObjectId,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, trace};

/// Generate the operations for one page: title header, then one frame per card
pub fn generate_page_operations(
    title: &str,
    group: &CardGroup<DashCard>,
    page_count: usize,
    geometry: &PageGeometry,
    style: &ExportStyle,
) -> Vec<Operation> {
    let mut operations = Vec::new();

    operations.extend(draw_header(title, group.page_index, page_count, geometry, style));

    for card in &group.cards {
        operations.extend(draw_card_frame(card, geometry, style));
    }

    trace!(
        "Generated {} operations for page {}",
        operations.len(),
        group.page_index
    );
    operations
}

/// Draw the dashboard title and page counter in the header band
fn draw_header(
    title: &str,
    page_index: usize,
    page_count: usize,
    geometry: &PageGeometry,
    style: &ExportStyle,
) -> Vec<Operation> {
    let mut operations = Vec::new();
    let header = geometry.header;

    let counter = format!("{} / {}", page_index + 1, page_count);
    let counter_width = estimate_text_width(&counter, style.card_font_size);
    let title_room = header.width - counter_width - CARD_LABEL_PADDING * 2.0;

    let baseline = header.y + (header.height - style.title_font_size) / 2.0;
    let title = fit_text(title, title_room, style.title_font_size);
    operations.extend(draw_text_line(
        &title,
        header.x,
        baseline,
        FONT_BOLD,
        style.title_font_size,
        style.text_color,
    ));
    operations.extend(draw_text_line(
        &counter,
        header.right() - counter_width,
        baseline,
        FONT_REGULAR,
        style.card_font_size,
        style.text_color,
    ));

    if let Some(color) = style.divider_color {
        operations.extend(set_stroke_style(color, style.border_width));
        operations.extend(draw_horizontal_line(header.x, header.right(), header.y));
    }

    operations
}

/// Draw the slot a card's visualization is rendered into
fn draw_card_frame(
    card: &DashCard,
    geometry: &PageGeometry,
    style: &ExportStyle,
) -> Vec<Operation> {
    let mut operations = Vec::new();
    let rect = geometry.card_rect(card.col, card.row(), card.size_x, card.size_y());
    if rect.width <= 0.0 || rect.height <= 0.0 {
        trace!("Card {} has no drawable area", card.id);
        return operations;
    }

    if let Some(bg_color) = style.card_background {
        operations.extend(draw_rectangle_fill(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            bg_color,
        ));
    }

    operations.extend(set_stroke_style(style.border_color, style.border_width));
    operations.extend(draw_rectangle_stroke(rect.x, rect.y, rect.width, rect.height));

    let label = if card.title.is_empty() {
        card.id.to_string()
    } else {
        card.title.clone()
    };
    let label_room = rect.width - CARD_LABEL_PADDING * 2.0;
    let label_baseline = rect.top() - CARD_LABEL_PADDING - style.card_font_size;
    if label_baseline >= rect.y {
        operations.extend(draw_text_line(
            &fit_text(&label, label_room, style.card_font_size),
            rect.x + CARD_LABEL_PADDING,
            label_baseline,
            FONT_REGULAR,
            style.card_font_size,
            style.text_color,
        ));
    }

    operations
}

/// Add operations to a page in the document
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    if doc.get_object(page_id).is_err() {
        return Err(ExportError::PageNotFound(page_id));
    }

    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}

/// Register the Helvetica fonts used by page containers
pub fn add_font_resources(doc: &mut Document) -> ObjectId {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });

    doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_id,
            FONT_BOLD => font_bold_id,
        },
    })
}

/// Append an empty page of the given size to a Pages node
pub fn create_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page_size: (f32, f32),
    resources_id: ObjectId,
) -> Result<ObjectId> {
    let (width, height) = page_size;

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        "Resources" => resources_id,
    });

    let Ok(Object::Dictionary(pages_dict)) = doc.get_object_mut(pages_id) else {
        return Err(ExportError::PageNotFound(pages_id));
    };
    if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
        kids.push(page_id.into());
    } else {
        pages_dict.set("Kids", vec![Object::from(page_id)]);
    }
    let count = match pages_dict.get(b"Count") {
        Ok(Object::Integer(count)) => *count,
        _ => 0,
    };
    pages_dict.set("Count", Object::Integer(count + 1));

    trace!("Created page {:?} ({}x{})", page_id, width, height);
    Ok(page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn geometry() -> PageGeometry {
        PageGeometry::new((A4_WIDTH, A4_HEIGHT), 20, &ExportStyle::default()).unwrap()
    }

    #[test]
    fn test_page_operations_include_cards() {
        let group = CardGroup {
            page_index: 0,
            cards: vec![
                DashCard::new(1, 0, 4).with_width(12).with_title("Orders"),
                DashCard::new(2, 0, 4).at_col(12).with_width(12),
            ],
        };
        let ops = generate_page_operations(
            "Sales",
            &group,
            2,
            &geometry(),
            &ExportStyle::default(),
        );

        let shown: Vec<String> = ops
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match &op.operands[0] {
                Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec!["Sales", "1 / 2", "Orders", "#2"]);

        let strokes = ops.iter().filter(|op| op.operator == "re").count();
        // background + outline per card
        assert_eq!(strokes, 4);
    }

    #[test]
    fn test_outline_style_has_no_fills() {
        let group = CardGroup {
            page_index: 1,
            cards: vec![DashCard::new(1, 0, 4)],
        };
        let ops = generate_page_operations(
            "Sales",
            &group,
            2,
            &geometry(),
            &ExportStyle::outline(),
        );

        assert!(ops.iter().all(|op| op.operator != "f"));
        assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 1);
    }

    #[test]
    fn test_create_page_updates_tree() {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        });
        let resources_id = add_font_resources(&mut doc);

        let size = (A4_WIDTH, A4_HEIGHT);
        let first = create_page(&mut doc, pages_id, size, resources_id).unwrap();
        let second = create_page(&mut doc, pages_id, size, resources_id).unwrap();
        assert_ne!(first, second);

        let pages = doc.get_dictionary(pages_id).unwrap();
        assert_eq!(pages.get(b"Count").unwrap().as_i64().unwrap(), 2);
        assert_eq!(pages.get(b"Kids").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_add_operations_to_missing_page() {
        let mut doc = Document::with_version("1.5");
        let result = add_operations_to_page(&mut doc, (99, 0), Vec::new());
        assert!(matches!(result, Err(ExportError::PageNotFound((99, 0)))));
    }
}
