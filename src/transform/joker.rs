use crate::card::Card;
use crate::deck::Deck;

use super::Transform;

/// Appends jokers to the bottom of the deck.
///
/// The `n` appended jokers carry discriminators `0..n` in order. Zero adds
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddJoker(pub u8);

impl Transform for AddJoker {
    fn apply(&self, mut deck: Deck) -> Deck {
        deck.extend((0..self.0).map(Card::joker));
        deck
    }

    fn name(&self) -> &'static str {
        "add_joker"
    }
}

/// Returns a transformation appending `count` jokers.
#[must_use]
pub const fn add_joker(count: u8) -> AddJoker {
    AddJoker(count)
}
