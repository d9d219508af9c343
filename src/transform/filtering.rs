#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::deck::Deck;

use super::Transform;

/// Removes every card whose rank value is in a set, regardless of suit.
///
/// Matching is on the raw rank value, so a joker whose discriminator equals a
/// filtered value is removed as well.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, Filter, Rank, Transform};
///
/// let deck = Filter::new([Rank::Two, Rank::Three]).apply(Deck::standard());
/// assert_eq!(deck.len(), 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    ranks: HashSet<u8>,
}

impl Filter {
    /// Creates a filter from rank values or [`Rank`](crate::Rank)s.
    #[must_use]
    pub fn new<I>(ranks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<u8>,
    {
        Self {
            ranks: ranks.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether cards with this rank value are removed.
    #[must_use]
    pub fn contains(&self, rank: u8) -> bool {
        self.ranks.contains(&rank)
    }
}

impl Transform for Filter {
    fn apply(&self, mut deck: Deck) -> Deck {
        if !self.ranks.is_empty() {
            deck.retain(|card| !self.contains(card.rank_value()));
        }
        deck
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}

/// Returns a transformation removing the given ranks.
#[must_use]
pub fn filter<I>(ranks: I) -> Filter
where
    I: IntoIterator,
    I::Item: Into<u8>,
{
    Filter::new(ranks)
}
