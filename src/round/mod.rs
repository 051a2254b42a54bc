//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::event::Notification;
use crate::hand::Participant;
use crate::options::RoundOptions;
use crate::result::RoundOutcome;
use crate::seat::{Seat, SeatMap};

mod actions;
pub mod state;

pub use state::RoundState;

/// A single round at the four-seat table.
///
/// The round owns the deck, every participant's hand and the turn pointer.
/// Commands take `&mut self` and return the notifications they produced, in
/// order; a rejected command leaves the round untouched.
#[derive(Debug, Clone)]
pub struct Round {
    /// Round options.
    options: RoundOptions,
    /// Cards left to draw.
    deck: Deck,
    /// Participants in table order.
    participants: [Participant; Seat::COUNT],
    /// Current round state.
    state: RoundState,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a round with the given seed. No cards are dealt until
    /// [`Round::start`].
    ///
    /// # Example
    ///
    /// ```
    /// use spacedeck::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::empty(),
            participants: Seat::ALL.map(Participant::new),
            state: RoundState::NotStarted,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Every hand is emptied and the first seat gets the turn, whatever state
    /// the previous round was in.
    pub fn start(&mut self) -> Vec<Notification> {
        let deck = Deck::shuffled(&mut self.rng);
        self.reset(deck)
    }

    /// Starts a new round drawing from `cards`, last card first.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is not exactly the 52 standard cards. The
    /// current round is left untouched in that case.
    pub fn start_with_deck(&mut self, cards: Vec<Card>) -> Result<Vec<Notification>, DeckError> {
        let deck = Deck::from_cards(cards)?;
        Ok(self.reset(deck))
    }

    fn reset(&mut self, deck: Deck) -> Vec<Notification> {
        self.deck = deck;
        for participant in &mut self.participants {
            participant.hand_mut().clear();
        }

        let first = Seat::ALL[0];
        self.state = RoundState::InProgress { current: first };
        info!(first = %first, cards = self.deck.len(), "round started");

        alloc::vec![Notification::RoundStarted { first }]
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` before the first start and after the round has ended.
    #[must_use]
    pub const fn current(&self) -> Option<Seat> {
        self.state.current()
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the outcome once the round has ended.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the participant in `seat`.
    #[must_use]
    pub const fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat.index()]
    }

    /// Returns every participant in table order.
    #[must_use]
    pub const fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns every participant's running total.
    #[must_use]
    pub fn totals(&self) -> SeatMap<u16> {
        SeatMap::from_fn(|seat| self.participant(seat).total())
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
