//! Round outcome types.

use crate::hand::Participant;
use crate::seat::Seat;

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The highest total at or under the bust limit wins.
    Winner {
        /// Winning seat.
        seat: Seat,
        /// Winning total.
        total: u16,
    },
    /// Every participant busted.
    AllLose,
}

impl RoundOutcome {
    /// Picks the winner among `participants`, given in table order.
    ///
    /// Busted hands are ignored. A later participant only replaces the best
    /// so far with a strictly higher total, so ties go to the earlier seat.
    #[must_use]
    pub fn decide(participants: &[Participant], bust_limit: u16) -> Self {
        participants
            .iter()
            .filter(|p| p.total() <= bust_limit)
            .fold(None::<&Participant>, |best, p| match best {
                Some(b) if b.total() >= p.total() => Some(b),
                _ => Some(p),
            })
            .map_or(Self::AllLose, |p| Self::Winner {
                seat: p.seat(),
                total: p.total(),
            })
    }

    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match self {
            Self::Winner { seat, .. } => Some(*seat),
            Self::AllLose => None,
        }
    }

    /// Returns the winning total, if any.
    #[must_use]
    pub const fn total(&self) -> Option<u16> {
        match self {
            Self::Winner { total, .. } => Some(*total),
            Self::AllLose => None,
        }
    }
}
