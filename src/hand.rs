//! Participant hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::seat::Seat;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and may draw.
    Active,
    /// Participant has stood.
    Stood,
    /// Hand has gone over the bust limit.
    Busted,
}

/// The cards a participant has received this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order received.
    cards: Vec<Card>,
    /// Sum of card values.
    total: u16,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty, active hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand and returns the new total.
    ///
    /// The hand busts once the total exceeds `bust_limit`.
    pub fn add_card(&mut self, card: Card, bust_limit: u16) -> u16 {
        self.cards.push(card);
        self.total += card.value();

        if self.total > bust_limit {
            self.status = HandStatus::Busted;
        }

        self.total
    }

    /// Marks the hand as stood. A busted hand stays busted.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stood;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.total
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand draws no more this round.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        !matches!(self.status, HandStatus::Active)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        matches!(self.status, HandStatus::Busted)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// A seat and the hand played from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    seat: Seat,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub const fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the running total of the hand.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.hand.total()
    }

    /// Returns whether the participant draws no more this round.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.hand.is_standing()
    }
}
