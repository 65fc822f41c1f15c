//! Export settings and the per-page plan built from them

use crate::Result;
use crate::card::{DashCard, TabId, cards_for_tab};
use crate::format::{Orientation, PageFormat, page_max_rows, page_size};
use crate::paging::{CardGroup, partition};
use crate::style::ExportStyle;
use tracing::{debug, instrument};

/// User-facing choices for a dashboard export
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Extend the lowest row of cards on each page down to the page bottom
    pub stretch_last_row: bool,
    /// Dashboard name, shown in the page header and used for the file name
    pub title: String,
    /// Tab to export; None for dashboards without tabs
    pub selected_tab: Option<TabId>,
    pub style: ExportStyle,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            stretch_last_row: true,
            title: String::new(),
            selected_tab: None,
            style: ExportStyle::default(),
        }
    }
}

impl ExportSettings {
    /// Create settings for a dashboard with the default page setup
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the paper format
    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the page orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Toggle stretching of the last row on each page
    pub fn with_stretch_last_row(mut self, stretch: bool) -> Self {
        self.stretch_last_row = stretch;
        self
    }

    /// Export only the cards on this tab
    pub fn with_tab(mut self, tab: TabId) -> Self {
        self.selected_tab = Some(tab);
        self
    }

    /// Set the page container style
    pub fn with_style(mut self, style: ExportStyle) -> Self {
        self.style = style;
        self
    }
}

/// Cards of one dashboard tab split into export pages
#[derive(Debug, Clone)]
pub struct ExportPlan {
    settings: ExportSettings,
    page_max_rows: u32,
    pages: Vec<CardGroup<DashCard>>,
}

impl ExportPlan {
    /// Filter `cards` to the selected tab and split them into pages
    #[instrument(skip_all, fields(format = %settings.format, orientation = %settings.orientation))]
    pub fn build(cards: &[DashCard], settings: ExportSettings) -> Result<Self> {
        let page_max_rows = page_max_rows(settings.format, settings.orientation);
        let visible = cards_for_tab(cards, settings.selected_tab);
        let pages = partition(&visible, page_max_rows, settings.stretch_last_row)?;

        debug!(
            "Planned {} pages of {} rows for {} cards",
            pages.len(),
            page_max_rows,
            visible.len()
        );

        Ok(Self {
            settings,
            page_max_rows,
            pages,
        })
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn pages(&self) -> &[CardGroup<DashCard>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Row capacity every page was split with
    pub fn page_max_rows(&self) -> u32 {
        self.page_max_rows
    }

    /// Page size in points as `(width, height)`
    pub fn page_size(&self) -> (f32, f32) {
        page_size(self.settings.format, self.settings.orientation)
    }

    /// True when the selected tab has no cards at all
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(CardGroup::is_empty)
    }

    /// File name for the exported document, derived from the dashboard title
    pub fn file_name(&self) -> String {
        let stem: String = self
            .settings
            .title
            .trim()
            .chars()
            .map(|ch| match ch {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();

        if stem.is_empty() {
            "dashboard.pdf".to_string()
        } else {
            format!("{stem}.pdf")
        }
    }
}
