//! Deck transformations.
//!
//! Every transformation is a total function from one [`Deck`] to the next.
//! Built-in steps are plain types implementing [`Transform`]; any
//! `Fn(Deck) -> Deck` closure is a transformation too.

use crate::deck::Deck;

mod filtering;
mod joker;
mod multiple;
mod shuffling;
mod sort;

pub use filtering::{Filter, filter};
pub use joker::{AddJoker, add_joker};
pub use multiple::{MultipleDeck, multiple_deck};
#[cfg(feature = "std")]
pub use shuffling::shuffle;
pub use shuffling::Shuffle;
pub use sort::{DefaultSort, default_sort};

/// A step in the deck build pipeline.
pub trait Transform {
    /// Consumes a deck and returns the transformed deck.
    fn apply(&self, deck: Deck) -> Deck;

    /// Returns a name for diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<F> Transform for F
where
    F: Fn(Deck) -> Deck,
{
    fn apply(&self, deck: Deck) -> Deck {
        self(deck)
    }
}
