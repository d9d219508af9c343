use alloc::vec::Vec;

use crate::deck::Deck;

use super::Transform;

/// Repeats the deck `n` times back to back.
///
/// Each copy keeps the input order. Zero copies yields an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MultipleDeck(pub usize);

impl Transform for MultipleDeck {
    fn apply(&self, deck: Deck) -> Deck {
        let mut cards = Vec::with_capacity(deck.len().saturating_mul(self.0));
        for _ in 0..self.0 {
            cards.extend_from_slice(&deck);
        }
        Deck::from(cards)
    }

    fn name(&self) -> &'static str {
        "multiple_deck"
    }
}

/// Returns a transformation stacking `count` copies of the deck.
#[must_use]
pub const fn multiple_deck(count: usize) -> MultipleDeck {
    MultipleDeck(count)
}
