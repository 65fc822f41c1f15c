//! Splitting positioned cards into export pages
//!
//! Cards are assigned to pages by their bottom edge: everything that ends within
//! the page's row capacity stays on the page, the rest is shifted up so the
//! topmost remaining card starts at row 0 and is paged again.

use crate::Result;
use crate::card::GridCard;
use crate::error::ExportError;
use tracing::{debug, instrument, trace};

/// Cards laid out on one export page
#[derive(Debug, Clone, PartialEq)]
pub struct CardGroup<C> {
    /// Zero-based position of the page in the export
    pub page_index: usize,
    /// Cards in input order, with rows relative to the page top
    pub cards: Vec<C>,
}

impl<C: GridCard> CardGroup<C> {
    /// Lowest bottom edge of any card on the page, 0 if the page is empty
    pub fn bottom_row(&self) -> u32 {
        self.cards.iter().map(|card| card.bottom()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// One pass of the splitter over the cards still waiting for a page
struct PageSplit<C> {
    current: Vec<C>,
    overflow: Vec<C>,
    max_current_bottom: u32,
    min_overflow_top: Option<u32>,
}

fn split_page<C: GridCard>(cards: Vec<C>, page_max_rows: u32) -> PageSplit<C> {
    let mut split = PageSplit {
        current: Vec::with_capacity(cards.len()),
        overflow: Vec::new(),
        max_current_bottom: 0,
        min_overflow_top: None,
    };

    for card in cards {
        let bottom = card.bottom();
        if bottom > page_max_rows {
            let top = card.row();
            split.min_overflow_top =
                Some(split.min_overflow_top.map_or(top, |min| min.min(top)));
            split.overflow.push(card);
        } else {
            split.max_current_bottom = split.max_current_bottom.max(bottom);
            split.current.push(card);
        }
    }

    split
}

/// Extend every card ending on the page's lowest edge down to the page bottom
fn stretch_last_row<C: GridCard>(
    cards: Vec<C>,
    max_bottom: u32,
    page_max_rows: u32,
) -> Vec<C> {
    cards
        .into_iter()
        .map(|card| {
            if card.bottom() == max_bottom {
                card.with_size_y(page_max_rows - card.row())
            } else {
                card
            }
        })
        .collect()
}

/// Reject cards that could never be placed on a page
pub fn validate_cards<C: GridCard>(cards: &[C], page_max_rows: u32) -> Result<()> {
    if page_max_rows == 0 {
        return Err(ExportError::InvalidCapacity(page_max_rows));
    }

    for card in cards {
        if card.size_y() == 0 {
            return Err(ExportError::InvalidCard {
                card: card.label(),
                reason: "height must be at least one row".to_string(),
            });
        }
        if card.size_y() > page_max_rows {
            return Err(ExportError::CardTooTall {
                card: card.label(),
                size_y: card.size_y(),
                page_max_rows,
            });
        }
    }

    Ok(())
}

/// Split `cards` into consecutive pages of at most `page_max_rows` rows.
///
/// Always yields at least one group; an empty input gives a single empty page.
/// With `stretch` set, the cards forming the lowest row of each page are
/// extended to the page bottom.
#[instrument(skip(cards), fields(card_count = cards.len()))]
pub fn partition<C: GridCard>(
    cards: &[C],
    page_max_rows: u32,
    stretch: bool,
) -> Result<Vec<CardGroup<C>>> {
    validate_cards(cards, page_max_rows)?;

    let mut groups = Vec::new();
    let mut remaining = cards.to_vec();

    loop {
        let page_index = groups.len();
        let PageSplit {
            current,
            overflow,
            max_current_bottom,
            min_overflow_top,
        } = split_page(std::mem::take(&mut remaining), page_max_rows);

        trace!(
            "Page {}: {} cards placed, {} deferred",
            page_index,
            current.len(),
            overflow.len()
        );

        // Every card fits a page on its own, so a pass that places nothing
        // while cards remain would never finish.
        if current.is_empty() && !overflow.is_empty() {
            return Err(ExportError::LayoutError(format!(
                "no card fits on page {page_index} with {page_max_rows} rows"
            )));
        }

        let current = if stretch {
            stretch_last_row(current, max_current_bottom, page_max_rows)
        } else {
            current
        };
        groups.push(CardGroup {
            page_index,
            cards: current,
        });

        let Some(shift) = min_overflow_top else {
            break;
        };
        remaining = overflow
            .into_iter()
            .map(|card| card.with_row(card.row() - shift))
            .collect();
    }

    debug!("Split {} cards into {} pages", cards.len(), groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DashCard;

    fn rows(group: &CardGroup<DashCard>) -> Vec<(u64, u32, u32)> {
        group
            .cards
            .iter()
            .map(|c| (c.id.0, c.row, c.size_y))
            .collect()
    }

    #[test]
    fn test_single_card_fits() {
        let cards = vec![DashCard::new(1, 0, 5)];
        let groups = partition(&cards, 20, false).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].cards, cards);
    }

    #[test]
    fn test_card_taller_than_page_is_rejected() {
        let cards = vec![DashCard::new(9, 0, 25).with_title("Tall")];
        match partition(&cards, 20, false) {
            Err(ExportError::CardTooTall {
                card,
                size_y,
                page_max_rows,
            }) => {
                assert!(card.contains("#9"));
                assert_eq!(size_y, 25);
                assert_eq!(page_max_rows, 20);
            }
            other => panic!("expected CardTooTall, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow_is_renormalized() {
        let cards = vec![DashCard::new(1, 0, 10), DashCard::new(2, 15, 10)];
        let groups = partition(&cards, 20, false).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(rows(&groups[0]), vec![(1, 0, 10)]);
        assert_eq!(rows(&groups[1]), vec![(2, 0, 10)]);
        assert_eq!(groups[1].page_index, 1);
    }

    #[test]
    fn test_stretch_fills_page() {
        let cards = vec![DashCard::new(1, 0, 10), DashCard::new(2, 15, 10)];
        let groups = partition(&cards, 20, true).unwrap();

        assert_eq!(rows(&groups[0]), vec![(1, 0, 20)]);
        assert_eq!(rows(&groups[1]), vec![(2, 0, 20)]);
    }

    #[test]
    fn test_empty_input_gives_one_empty_page() {
        let cards: Vec<DashCard> = Vec::new();
        let groups = partition(&cards, 20, true).unwrap();

        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
        assert_eq!(groups[0].bottom_row(), 0);
    }

    #[test]
    fn test_stretch_ties_use_own_row() {
        // Both end on row 8 but start at different rows.
        let cards = vec![
            DashCard::new(1, 0, 8),
            DashCard::new(2, 4, 4),
            DashCard::new(3, 0, 3),
        ];
        let groups = partition(&cards, 13, true).unwrap();

        assert_eq!(rows(&groups[0]), vec![(1, 0, 13), (2, 4, 9), (3, 0, 3)]);
    }

    #[test]
    fn test_order_within_page_follows_input() {
        let cards = vec![
            DashCard::new(1, 6, 4).at_col(12),
            DashCard::new(2, 0, 6),
            DashCard::new(3, 0, 6).at_col(12),
        ];
        let groups = partition(&cards, 20, false).unwrap();

        let ids: Vec<u64> = groups[0].cards.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_height_card_is_rejected() {
        let cards = vec![DashCard::new(4, 0, 0)];
        assert!(matches!(
            partition(&cards, 20, false),
            Err(ExportError::InvalidCard { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let cards = vec![DashCard::new(1, 0, 1)];
        assert!(matches!(
            partition(&cards, 0, false),
            Err(ExportError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_input_is_not_modified() {
        let cards = vec![DashCard::new(1, 0, 4), DashCard::new(2, 30, 4)];
        let before = cards.clone();
        partition(&cards, 13, true).unwrap();
        assert_eq!(cards, before);
    }

    #[test]
    fn test_tall_dashboard_invariants() {
        // Two columns of cards with staggered heights, 60 rows tall in total.
        let mut cards = Vec::new();
        let mut id = 0;
        for (col, heights) in [(0, [4, 7, 3, 6, 5]), (12, [6, 2, 8, 4, 5])] {
            let mut row = 0;
            for _ in 0..3 {
                for height in heights {
                    id += 1;
                    cards.push(DashCard::new(id, row, height).at_col(col));
                    row += height;
                }
            }
        }
        let page_max_rows = 13;

        for stretch in [false, true] {
            let groups = partition(&cards, page_max_rows, stretch).unwrap();

            let mut seen: Vec<u64> = groups
                .iter()
                .flat_map(|g| g.cards.iter().map(|c| c.id.0))
                .collect();
            seen.sort_unstable();
            let expected: Vec<u64> = (1..=id).collect();
            assert_eq!(seen, expected);

            for (index, group) in groups.iter().enumerate() {
                assert_eq!(group.page_index, index);
                for card in &group.cards {
                    assert!(card.row + card.size_y <= page_max_rows);
                }
                if index > 0 {
                    let min_row = group.cards.iter().map(|c| c.row).min().unwrap();
                    assert_eq!(min_row, 0);
                }
                if stretch {
                    assert_eq!(group.bottom_row(), page_max_rows);
                }
            }
        }
    }

    #[test]
    fn test_works_with_custom_card_type() {
        #[derive(Debug, Clone, PartialEq)]
        struct Slot {
            top: u32,
            height: u32,
            name: &'static str,
        }

        impl GridCard for Slot {
            fn row(&self) -> u32 {
                self.top
            }
            fn size_y(&self) -> u32 {
                self.height
            }
            fn with_row(&self, row: u32) -> Self {
                Self {
                    top: row,
                    ..self.clone()
                }
            }
            fn with_size_y(&self, size_y: u32) -> Self {
                Self {
                    height: size_y,
                    ..self.clone()
                }
            }
        }

        let slots = vec![
            Slot {
                top: 2,
                height: 3,
                name: "a",
            },
            Slot {
                top: 18,
                height: 4,
                name: "b",
            },
        ];
        let groups = partition(&slots, 14, false).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].cards[0].top, 0);
        assert_eq!(groups[1].cards[0].name, "b");
    }
}
