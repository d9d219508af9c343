//! Deck type and the build pipeline.

use core::fmt;
use core::ops::Deref;

use alloc::boxed::Box;
use alloc::vec::{self, Vec};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::Transform;

/// An ordered sequence of cards.
///
/// A deck has no uniqueness invariant: filters, jokers, and stacked packs can
/// all produce repeated cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck.
    ///
    /// Cards are laid out suit-major (spades, diamonds, clubs, hearts) and
    /// rank-minor (ace through king).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::STANDARD {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Keeps only the cards matching the predicate, preserving order.
    pub fn retain(&mut self, f: impl FnMut(&Card) -> bool) {
        self.cards.retain(f);
    }

    /// Consumes the deck, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Builds a deck from the standard 52 cards and the given transformations.
///
/// Transformations run left to right, each receiving the previous result.
///
/// # Example
///
/// ```
/// use deckrs::{AddJoker, DefaultSort, Suit, new_deck};
///
/// let deck = new_deck(&[&AddJoker(2), &DefaultSort]);
/// assert_eq!(deck.len(), 54);
/// assert_eq!(deck[53].suit(), Suit::Joker);
/// ```
#[must_use]
pub fn new_deck(transforms: &[&dyn Transform]) -> Deck {
    log::debug!("building deck with {} transformations", transforms.len());
    transforms
        .iter()
        .fold(Deck::standard(), |deck, transform| run_step(*transform, deck))
}

fn run_step(transform: &dyn Transform, deck: Deck) -> Deck {
    let before = deck.len();
    let deck = transform.apply(deck);
    log::trace!("{}: {} -> {} cards", transform.name(), before, deck.len());
    deck
}

/// An owned, ordered pipeline of transformations.
///
/// Use the builder pattern to assemble a deck:
///
/// ```
/// use deckrs::{DeckBuilder, DefaultSort, MultipleDeck, Shuffle};
///
/// let deck = DeckBuilder::new()
///     .with(MultipleDeck(2))
///     .with(Shuffle::new(7))
///     .with(DefaultSort)
///     .build();
///
/// assert_eq!(deck.len(), 104);
/// assert!(deck.is_sorted());
/// ```
#[derive(Default)]
pub struct DeckBuilder {
    transforms: Vec<Box<dyn Transform>>,
}

impl DeckBuilder {
    /// Creates a builder with no transformations.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends a transformation to the pipeline.
    #[must_use]
    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Appends a transformation in place.
    pub fn push(&mut self, transform: impl Transform + 'static) {
        self.transforms.push(Box::new(transform));
    }

    /// Returns the number of transformations in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds a fresh deck by running every transformation in order.
    ///
    /// The builder is not consumed; building twice runs the pipeline twice,
    /// so stateful steps such as [`Shuffle`](crate::Shuffle) produce a new
    /// permutation each time.
    #[must_use]
    pub fn build(&self) -> Deck {
        log::debug!("building deck with {} transformations", self.transforms.len());
        self.transforms
            .iter()
            .fold(Deck::standard(), |deck, transform| {
                run_step(transform.as_ref(), deck)
            })
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|t| t.name()))
            .finish()
    }
}
