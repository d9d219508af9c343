use crate::deck::Deck;

use super::Transform;

/// Sorts by suit, then rank, using the natural [`Card`](crate::Card) order.
///
/// The sort is stable, so repeated cards keep their relative positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultSort;

impl Transform for DefaultSort {
    fn apply(&self, deck: Deck) -> Deck {
        default_sort(deck)
    }

    fn name(&self) -> &'static str {
        "default_sort"
    }
}

/// Sorts a deck by suit, then rank.
#[must_use]
pub fn default_sort(mut deck: Deck) -> Deck {
    deck.as_mut_slice().sort();
    deck
}
