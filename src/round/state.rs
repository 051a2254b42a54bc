//! Round state types.

use crate::result::RoundOutcome;
use crate::seat::Seat;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been started yet.
    NotStarted,
    /// Participants are taking turns.
    InProgress {
        /// Seat whose turn it is.
        current: Seat,
    },
    /// Every participant is standing; the outcome is final until the next start.
    Terminal(RoundOutcome),
}

impl RoundState {
    /// Returns the current seat while the round is in progress.
    #[must_use]
    pub const fn current(&self) -> Option<Seat> {
        match self {
            Self::InProgress { current } => Some(*current),
            _ => None,
        }
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}
