use alloc::vec::Vec;
use tracing::{debug, info, warn};

use crate::error::ActionError;
use crate::event::Notification;
use crate::result::RoundOutcome;
use crate::seat::Seat;

use super::{Round, RoundState};

impl Round {
    fn ensure_in_progress(&self) -> Result<Seat, ActionError> {
        match self.state {
            RoundState::NotStarted => Err(ActionError::NotStarted),
            RoundState::Terminal(_) => Err(ActionError::RoundOver),
            RoundState::InProgress { current } => Ok(current),
        }
    }

    /// Draws a card for the participant whose turn it is.
    ///
    /// The turn stays with the participant unless the draw busts them.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the deck is empty (see
    /// [`crate::RoundOptions::stand_on_empty_deck`]).
    pub fn draw(&mut self) -> Result<Vec<Notification>, ActionError> {
        let current = self.ensure_in_progress()?;
        self.draw_for(current)
    }

    /// Draws a card for `seat`, which must hold the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the participant is
    /// standing, it is not their turn, or the deck is empty.
    pub fn draw_for(&mut self, seat: Seat) -> Result<Vec<Notification>, ActionError> {
        let current = self.ensure_in_progress()?;

        if self.participant(seat).is_standing() {
            return Err(ActionError::ParticipantStanding);
        }

        if seat != current {
            return Err(ActionError::NotYourTurn);
        }

        let Some(card) = self.deck.draw() else {
            if self.options.stand_on_empty_deck {
                warn!(seat = %seat, "deck exhausted, standing participant");
                return Ok(self.stand_seat(seat));
            }
            warn!(seat = %seat, "deck exhausted");
            return Err(ActionError::DeckExhausted);
        };

        let bust_limit = self.options.bust_limit;
        let hand = self.participants[seat.index()].hand_mut();
        let total = hand.add_card(card, bust_limit);

        if hand.is_busted() {
            info!(seat = %seat, card = %card, total, "participant busted");
            let mut events = alloc::vec![Notification::ParticipantBusted {
                participant: seat,
                card,
                total,
            }];
            self.advance_turn(seat, &mut events);
            return Ok(events);
        }

        debug!(seat = %seat, card = %card, total, "card drawn");
        Ok(alloc::vec![Notification::CardDrawn {
            participant: seat,
            card,
            total,
        }])
    }

    /// Passes the turn without standing.
    ///
    /// The participant keeps their hand and will get the turn again once the
    /// table comes back round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn pass(&mut self) -> Result<Vec<Notification>, ActionError> {
        let current = self.ensure_in_progress()?;

        debug!(seat = %current, "participant passed");
        let mut events = alloc::vec![Notification::ParticipantPassed {
            participant: current,
        }];
        self.advance_turn(current, &mut events);
        Ok(events)
    }

    /// Stands the participant whose turn it is and moves the turn on.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn stand(&mut self) -> Result<Vec<Notification>, ActionError> {
        let current = self.ensure_in_progress()?;
        Ok(self.stand_seat(current))
    }

    fn stand_seat(&mut self, seat: Seat) -> Vec<Notification> {
        self.participants[seat.index()].hand_mut().stand();

        debug!(seat = %seat, "participant stood");
        let mut events = alloc::vec![Notification::ParticipantStood { participant: seat }];
        self.advance_turn(seat, &mut events);
        events
    }

    /// Hands the turn to the next participant still drawing, scanning in
    /// table order from the seat after `from`. Ends the round if everyone is
    /// standing.
    fn advance_turn(&mut self, from: Seat, events: &mut Vec<Notification>) {
        let mut seat = from;
        let next = (0..Seat::COUNT).find_map(|_| {
            seat = seat.next();
            (!self.participant(seat).is_standing()).then_some(seat)
        });

        match next {
            Some(seat) => {
                self.state = RoundState::InProgress { current: seat };
                debug!(seat = %seat, "turn changed");
                events.push(Notification::TurnChanged { participant: seat });
            }
            None => self.end_round(events),
        }
    }

    fn end_round(&mut self, events: &mut Vec<Notification>) {
        let outcome = RoundOutcome::decide(&self.participants, self.options.bust_limit);
        self.state = RoundState::Terminal(outcome);

        match outcome {
            RoundOutcome::Winner { seat, total } => {
                info!(winner = %seat, total, "round ended");
            }
            RoundOutcome::AllLose => info!("round ended, all participants lose"),
        }

        events.push(Notification::RoundEnded {
            winner: outcome.winner(),
            total: outcome.total(),
        });
    }
}
