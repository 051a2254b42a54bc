//! Error types for round operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when issuing a command.
///
/// A rejected command never changes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round has been started yet.
    #[error("no round has been started")]
    NotStarted,
    /// The round has ended; start a new one.
    #[error("the round is over")]
    RoundOver,
    /// Not this participant's turn.
    #[error("not this participant's turn")]
    NotYourTurn,
    /// The participant is standing and draws no more this round.
    #[error("participant is standing")]
    ParticipantStanding,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// Table commands are only accepted on the game screen.
    #[error("not on the game screen")]
    NotOnGameScreen,
}

/// Errors that can occur when building a deck from a given card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 52 cards.
    #[error("expected 52 cards, got {0}")]
    WrongSize(usize),
    /// A card has a rank outside 1..=13.
    #[error("invalid card {0:?}")]
    InvalidCard(Card),
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}
