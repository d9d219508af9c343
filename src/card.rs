//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError};

/// Card suit.
///
/// Suits order by declaration: spades sort first and jokers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker pseudo-suit.
    Joker,
}

impl Suit {
    /// The four regular suits in the order a fresh deck is built.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Every suit, jokers included.
    pub const ALL: [Self; 5] = [
        Self::Spade,
        Self::Diamond,
        Self::Club,
        Self::Heart,
        Self::Joker,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Accepts the singular or plural name, e.g. `Heart` or `Hearts`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix('s').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == name)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(RankError::OutOfRange(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Cards compare by suit first, then by rank value. A joker stores an
/// instance discriminator in place of a rank; it has no rank meaning but does
/// take part in ordering and equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a regular card.
    ///
    /// Passing [`Suit::Joker`] yields a joker whose discriminator is the rank
    /// value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: rank as u8,
        }
    }

    /// Creates a joker with the given instance discriminator.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: index,
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank, or `None` for jokers.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            return None;
        }
        Rank::try_from(self.rank).ok()
    }

    /// Returns the raw rank value, which for jokers is the instance discriminator.
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    /// Formats as `<Rank> of <Suit>s`, or just `Joker`.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    /// assert_eq!(Card::joker(3).to_string(), "Joker");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => f.write_str(Suit::Joker.name()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form. `Joker` yields joker 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let suit: Suit = suit.trim().parse()?;
        if suit == Suit::Joker {
            return Err(ParseCardError::Malformed);
        }
        let rank: Rank = rank.trim().parse()?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
