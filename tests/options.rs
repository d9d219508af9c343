//! Configuration and parsing integration tests.

use deckrs::{Card, DECK_SIZE, Deck, DeckOptions, ParseCardError, Rank, RankError, Suit};

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_decks(4)
        .with_jokers(2)
        .with_excluded_ranks([2u8, 3])
        .with_sorted(true)
        .with_shuffle_seed(9);

    assert_eq!(options.decks, 4);
    assert_eq!(options.jokers, 2);
    assert_eq!(options.excluded_ranks, vec![2, 3]);
    assert!(options.sorted);
    assert_eq!(options.shuffle_seed, Some(9));
}

#[test]
fn default_options_build_standard_deck() {
    let options = DeckOptions::default();
    assert!(options.builder().is_empty());
    assert_eq!(options.build(), Deck::standard());
}

#[test]
fn options_apply_in_fixed_order() {
    let options = DeckOptions::default()
        .with_decks(2)
        .with_jokers(3)
        .with_excluded_ranks([Rank::Ace])
        .with_sorted(true);
    let deck = options.build();

    // Aces are filtered before jokers are added, so every joker is kept.
    assert_eq!(deck.len(), (DECK_SIZE - 4 + 3) * 2);
    assert!(deck.is_sorted());
    assert_eq!(deck[0], Card::new(Suit::Spade, Rank::Two));
    assert_eq!(deck[1], Card::new(Suit::Spade, Rank::Two));
    assert!(deck[deck.len() - 6..].iter().all(Card::is_joker));
}

#[test]
fn seeded_options_are_reproducible() {
    let options = DeckOptions::default().with_jokers(1).with_shuffle_seed(1234);

    let a = options.build();
    let b = options.clone().build();

    assert_eq!(a, b);
    assert_ne!(a, DeckOptions::default().with_jokers(1).build());
}

#[test]
fn zero_decks_builds_empty_deck() {
    assert!(DeckOptions::default().with_decks(0).build().is_empty());
}

#[test]
fn rank_conversions() {
    assert_eq!(Rank::try_from(1u8), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13u8), Ok(Rank::King));
    assert_eq!(Rank::try_from(0u8), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14u8), Err(RankError::OutOfRange(14)));
    assert_eq!(u8::from(Rank::Queen), 12);
}

#[test]
fn parse_cards() {
    assert_eq!("Ace of Hearts".parse::<Card>(), Ok(Card::new(Suit::Heart, Rank::Ace)));
    assert_eq!(
        " Ten of Clubs ".parse::<Card>(),
        Ok(Card::new(Suit::Club, Rank::Ten))
    );
    assert_eq!("Joker".parse::<Card>(), Ok(Card::joker(0)));

    let card = Card::new(Suit::Diamond, Rank::Jack);
    assert_eq!(card.to_string().parse::<Card>(), Ok(card));
}

#[test]
fn parse_errors() {
    assert_eq!(
        "Ace of Stars".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!(
        "One of Hearts".parse::<Card>(),
        Err(ParseCardError::UnknownRank)
    );
    assert_eq!("Ace Hearts".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("Ace of Jokers".parse::<Card>(), Err(ParseCardError::Malformed));
}

#[test]
fn parse_suits_singular_and_plural() {
    assert_eq!("Spade".parse::<Suit>(), Ok(Suit::Spade));
    assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spade));
    assert_eq!("Joker".parse::<Suit>(), Ok(Suit::Joker));
    assert_eq!("spades".parse::<Suit>(), Err(ParseCardError::UnknownSuit));
}

#[test]
fn every_suit_parses_from_its_name() {
    for suit in Suit::ALL {
        assert_eq!(suit.to_string().parse::<Suit>(), Ok(suit));
    }
    assert_eq!(&Suit::ALL[..4], &Suit::STANDARD);
}
