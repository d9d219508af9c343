//! Composable playing-card deck construction with optional `no_std` support.
//!
//! A [`Deck`] starts as the canonical 52-card pack (spades, diamonds, clubs,
//! hearts; ace through king) and is then threaded through an ordered list of
//! [`Transform`]s: sorting, shuffling, adding jokers, filtering ranks, and
//! stacking multiple packs.
//!
//! # Example
//!
//! ```
//! use deckrs::{AddJoker, DeckBuilder, Filter, MultipleDeck, Rank, Shuffle};
//!
//! let deck = DeckBuilder::new()
//!     .with(Filter::new([Rank::Two, Rank::Three]))
//!     .with(AddJoker(2))
//!     .with(MultipleDeck(2))
//!     .with(Shuffle::new(42))
//!     .build();
//!
//! assert_eq!(deck.len(), (52 - 8 + 2) * 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
mod sync;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckBuilder, new_deck};
pub use error::{ParseCardError, RankError};
pub use options::DeckOptions;
#[cfg(feature = "std")]
pub use transform::shuffle;
pub use transform::{
    AddJoker, DefaultSort, Filter, MultipleDeck, Shuffle, Transform, add_joker, default_sort,
    filter, multiple_deck,
};
