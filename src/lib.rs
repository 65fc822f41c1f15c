//! Paginates positioned dashboard cards across fixed-size PDF export pages
//!
//! Cards are grouped by vertical position so that every page holds a
//! non-overlapping slice of the dashboard grid, optionally stretching the
//! lowest row of each page to the page bottom. The resulting groups can be
//! consumed directly or laid out as page containers in a `lopdf` document.

use lopdf::{Document, ObjectId, dictionary};
use tracing::{debug, instrument};

pub mod card;
mod constants;
mod drawing;
mod drawing_utils;
pub mod error;
pub mod export;
pub mod format;
pub mod layout;
pub mod paging;
pub mod style;
mod text;

pub use card::{CardId, DashCard, GridCard, TabId, cards_for_tab};
pub use error::{ExportError, Result};
pub use export::{ExportPlan, ExportSettings};
pub use format::{
    Orientation, PageFormat, capacity_for, lookup_page_max_rows, page_max_rows, page_size,
};
pub use paging::{CardGroup, partition};
pub use style::{Color, ExportStyle};

/// Extension trait for lopdf::Document to add dashboard export pages
pub trait DashboardExport {
    /// Draw one planned page onto an existing page object
    ///
    /// # Arguments
    /// * `page_id` - The object ID of the page to draw on
    /// * `plan` - The export plan the page belongs to
    /// * `page_index` - Which of the plan's pages to draw
    fn draw_export_page(
        &mut self,
        page_id: ObjectId,
        plan: &ExportPlan,
        page_index: usize,
    ) -> Result<()>;

    /// Append one page per planned card group under a Pages node
    ///
    /// Returns the IDs of the new pages in page order.
    fn append_export_pages(&mut self, pages_id: ObjectId, plan: &ExportPlan)
    -> Result<Vec<ObjectId>>;
}

impl DashboardExport for Document {
    #[instrument(skip(self, plan))]
    fn draw_export_page(
        &mut self,
        page_id: ObjectId,
        plan: &ExportPlan,
        page_index: usize,
    ) -> Result<()> {
        let group = plan.pages().get(page_index).ok_or_else(|| {
            ExportError::LayoutError(format!(
                "page {} requested but the plan has {} pages",
                page_index,
                plan.page_count()
            ))
        })?;

        let settings = plan.settings();
        let geometry =
            layout::PageGeometry::new(plan.page_size(), plan.page_max_rows(), &settings.style)?;
        let operations = drawing::generate_page_operations(
            &settings.title,
            group,
            plan.page_count(),
            &geometry,
            &settings.style,
        );

        drawing::add_operations_to_page(self, page_id, operations)
    }

    #[instrument(skip(self, plan), fields(pages = plan.page_count()))]
    fn append_export_pages(
        &mut self,
        pages_id: ObjectId,
        plan: &ExportPlan,
    ) -> Result<Vec<ObjectId>> {
        let resources_id = drawing::add_font_resources(self);

        let mut page_ids = Vec::with_capacity(plan.page_count());
        for page_index in 0..plan.page_count() {
            let page_id = drawing::create_page(self, pages_id, plan.page_size(), resources_id)?;
            self.draw_export_page(page_id, plan, page_index)?;
            page_ids.push(page_id);
        }

        debug!("Appended {} export pages", page_ids.len());
        Ok(page_ids)
    }
}

/// Build a standalone PDF document with one page per planned card group
pub fn export_document(plan: &ExportPlan) -> Result<Document> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![],
        "Count" => 0,
    });
    doc.append_export_pages(pages_id, plan)?;

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}
