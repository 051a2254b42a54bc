//! Notifications emitted by round commands.

use core::fmt;

use crate::card::Card;
use crate::seat::Seat;

/// Something that happened at the table, in the order it happened.
///
/// `Display` renders the status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A new round started.
    RoundStarted {
        /// Seat that acts first.
        first: Seat,
    },
    /// A card was drawn without busting.
    CardDrawn {
        /// Drawing seat.
        participant: Seat,
        /// The card drawn.
        card: Card,
        /// Total after the draw.
        total: u16,
    },
    /// A draw pushed the participant over the bust limit.
    ParticipantBusted {
        /// Busted seat.
        participant: Seat,
        /// The card that caused the bust.
        card: Card,
        /// Total after the draw.
        total: u16,
    },
    /// The participant passed the turn without standing.
    ParticipantPassed {
        /// Passing seat.
        participant: Seat,
    },
    /// The participant stood.
    ParticipantStood {
        /// Standing seat.
        participant: Seat,
    },
    /// The turn moved to another participant.
    TurnChanged {
        /// Seat whose turn it is now.
        participant: Seat,
    },
    /// Every participant is standing and the round is over.
    RoundEnded {
        /// The winner, or `None` if every participant busted.
        winner: Option<Seat>,
        /// The winning total.
        total: Option<u16>,
    },
}

impl Notification {
    /// Seat the notification is about, if any.
    #[must_use]
    pub const fn seat(&self) -> Option<Seat> {
        match *self {
            Self::RoundStarted { first } => Some(first),
            Self::CardDrawn { participant, .. }
            | Self::ParticipantBusted { participant, .. }
            | Self::ParticipantPassed { participant }
            | Self::ParticipantStood { participant }
            | Self::TurnChanged { participant } => Some(participant),
            Self::RoundEnded { winner, .. } => winner,
        }
    }

    /// Short machine-readable name of the notification kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RoundStarted { .. } => "RoundStarted",
            Self::CardDrawn { .. } => "CardDrawn",
            Self::ParticipantBusted { .. } => "ParticipantBusted",
            Self::ParticipantPassed { .. } => "ParticipantPassed",
            Self::ParticipantStood { .. } => "ParticipantStood",
            Self::TurnChanged { .. } => "TurnChanged",
            Self::RoundEnded { .. } => "RoundEnded",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { first } => {
                write!(f, "\u{1f3ae} Game started! {first}'s turn first.")
            }
            Self::CardDrawn { participant, .. } => {
                write!(f, "\u{1f0cf} {participant} drew a card!")
            }
            Self::ParticipantBusted { participant, .. } => {
                write!(f, "\u{1f4a5} {participant} Loses!")
            }
            Self::ParticipantPassed { participant } => {
                write!(f, "\u{23ed} {participant} passes.")
            }
            Self::ParticipantStood { participant } => {
                write!(f, "\u{1f6d1} {participant} stands.")
            }
            Self::TurnChanged { participant } => {
                write!(f, "\u{1f3af} {participant}'s turn!")
            }
            Self::RoundEnded {
                winner: Some(winner),
                total,
            } => write!(f, "\u{1f3c6} {winner} wins with {}!", total.unwrap_or(0)),
            Self::RoundEnded { winner: None, .. } => {
                write!(f, "\u{1f4a5} All players lose!")
            }
        }
    }
}
