//! Error types for card conversions and parsing.
//!
//! Deck transformations never fail; these errors only come from turning raw
//! numbers or text into cards.

use thiserror::Error;

/// Errors that can occur when converting a raw value into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank value {0} is outside 1..=13")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a card, rank, or suit from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Suit name is not recognized.
    #[error("unknown suit")]
    UnknownSuit,
    /// Rank name is not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// Text is not of the form `<Rank> of <Suit>s` or `Joker`.
    #[error("expected `<rank> of <suit>s` or `Joker`")]
    Malformed,
}
