//! Positioned dashboard cards

use std::fmt;
use tracing::trace;

/// Identifier of a dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

/// A rectangle on the vertical dashboard grid.
///
/// Paging only reads and adjusts the vertical geometry; everything else on the
/// implementing type is carried through untouched.
pub trait GridCard: Clone {
    /// Top offset in grid rows
    fn row(&self) -> u32;

    /// Height in grid rows
    fn size_y(&self) -> u32;

    /// Copy of this card moved to another row
    fn with_row(&self, row: u32) -> Self;

    /// Copy of this card with another height
    fn with_size_y(&self, size_y: u32) -> Self;

    /// Human-readable name used in error messages
    fn label(&self) -> String {
        format!("at row {}", self.row())
    }

    /// Bottom edge in grid rows
    fn bottom(&self) -> u32 {
        self.row().saturating_add(self.size_y())
    }
}

/// A card placed on a dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashCard {
    pub id: CardId,
    pub tab_id: Option<TabId>,
    pub col: u32,
    pub row: u32,
    pub size_x: u32,
    pub size_y: u32,
    pub title: String,
}

impl DashCard {
    /// Create a card in the first column at `row`, spanning `size_y` rows
    pub fn new(id: u64, row: u32, size_y: u32) -> Self {
        Self {
            id: CardId(id),
            tab_id: None,
            col: 0,
            row,
            size_x: 4,
            size_y,
            title: String::new(),
        }
    }

    /// Set the left column
    pub fn at_col(mut self, col: u32) -> Self {
        self.col = col;
        self
    }

    /// Set the width in grid columns
    pub fn with_width(mut self, size_x: u32) -> Self {
        self.size_x = size_x.max(1);
        self
    }

    /// Set the card title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Place the card on a dashboard tab
    pub fn on_tab(mut self, tab: u64) -> Self {
        self.tab_id = Some(TabId(tab));
        self
    }
}

impl GridCard for DashCard {
    fn row(&self) -> u32 {
        self.row
    }

    fn size_y(&self) -> u32 {
        self.size_y
    }

    fn with_row(&self, row: u32) -> Self {
        Self {
            row,
            ..self.clone()
        }
    }

    fn with_size_y(&self, size_y: u32) -> Self {
        Self {
            size_y,
            ..self.clone()
        }
    }

    fn label(&self) -> String {
        if self.title.is_empty() {
            self.id.to_string()
        } else {
            format!("{} ({:?})", self.id, self.title)
        }
    }
}

/// Cards visible on the selected tab, in dashboard order.
///
/// With no tab selected the dashboard has no tabs and every card is exported.
pub fn cards_for_tab(cards: &[DashCard], selected_tab: Option<TabId>) -> Vec<DashCard> {
    let visible: Vec<DashCard> = match selected_tab {
        None => cards.to_vec(),
        Some(tab) => cards
            .iter()
            .filter(|card| card.tab_id == Some(tab))
            .cloned()
            .collect(),
    };
    trace!(
        "{} of {} cards visible on tab {:?}",
        visible.len(),
        cards.len(),
        selected_tab
    );
    visible
}
