//! Declarative deck configuration.

use alloc::vec::Vec;

use crate::deck::{Deck, DeckBuilder};
use crate::transform::{AddJoker, DefaultSort, Filter, MultipleDeck, Shuffle};

/// Configuration for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, Rank};
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(2)
///     .with_excluded_ranks([Rank::Two])
///     .with_shuffle_seed(42);
///
/// assert_eq!(options.build().len(), (52 - 4 + 2) * 2);
/// ```
///
/// Options are applied in a fixed order: excluded ranks are filtered first,
/// then jokers are added, then the pack is repeated, sorted, and finally
/// shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of packs stacked together.
    pub decks: usize,
    /// Number of jokers added to each pack.
    pub jokers: u8,
    /// Rank values removed from each pack.
    pub excluded_ranks: Vec<u8>,
    /// Whether the result is put in suit-then-rank order.
    pub sorted: bool,
    /// Seed for the final shuffle. `None` leaves the deck unshuffled.
    pub shuffle_seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            excluded_ranks: Vec::new(),
            sorted: false,
            shuffle_seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers per pack.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the ranks removed from each pack.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().with_excluded_ranks([Rank::Ace, Rank::King]);
    /// assert_eq!(options.excluded_ranks, vec![1, 13]);
    /// ```
    #[must_use]
    pub fn with_excluded_ranks<I>(mut self, ranks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<u8>,
    {
        self.excluded_ranks = ranks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the deck is sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_sorted(true);
    /// assert!(options.sorted);
    /// ```
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_seed(7);
    /// assert_eq!(options.shuffle_seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Turns the options into a transformation pipeline.
    ///
    /// Steps that would not change the deck are left out.
    #[must_use]
    pub fn builder(&self) -> DeckBuilder {
        let mut builder = DeckBuilder::new();

        if !self.excluded_ranks.is_empty() {
            builder.push(Filter::new(self.excluded_ranks.iter().copied()));
        }
        if self.jokers > 0 {
            builder.push(AddJoker(self.jokers));
        }
        if self.decks != 1 {
            builder.push(MultipleDeck(self.decks));
        }
        if self.sorted {
            builder.push(DefaultSort);
        }
        if let Some(seed) = self.shuffle_seed {
            builder.push(Shuffle::new(seed));
        }

        builder
    }

    /// Builds a deck from these options.
    #[must_use]
    pub fn build(&self) -> Deck {
        self.builder().build()
    }
}
