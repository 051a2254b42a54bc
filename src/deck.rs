//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered deck, drawn from the back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates the 52 standard cards, ordered by rank then suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in 1..=13 {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a standard deck in uniformly random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit order. The last card is drawn first.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` is exactly the 52 standard cards, each
    /// appearing once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            if !card.is_valid() {
                return Err(DeckError::InvalidCard(*card));
            }
            let slot = &mut seen[index_of(*card)];
            if *slot {
                return Err(DeckError::Duplicate(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

const fn index_of(card: Card) -> usize {
    let suit = match card.suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    };
    (card.rank as usize - 1) * 4 + suit
}
