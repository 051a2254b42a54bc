//! Screen switching and button dispatch around a single round.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use tracing::debug;

use crate::error::ActionError;
use crate::event::Notification;
use crate::options::RoundOptions;
use crate::round::Round;

/// Which screen the player is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title screen with the play button.
    #[default]
    Home,
    /// The card table.
    Game,
}

/// A button on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw a card for the current participant.
    Deal,
    /// Pass the turn.
    Pass,
    /// Stand and pass the turn.
    Stand,
    /// Throw away the round and start another.
    Restart,
}

/// The controller a front end talks to.
///
/// Owns the round and the current screen, and keeps the status line in step
/// with the last notification.
#[derive(Debug, Clone)]
pub struct Session {
    round: Round,
    screen: Screen,
    status: String,
}

impl Session {
    /// Creates a session on the home screen.
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            round: Round::new(options, seed),
            screen: Screen::Home,
            status: String::new(),
        }
    }

    /// Moves to the game screen and starts a new round.
    pub fn play(&mut self) -> Vec<Notification> {
        self.screen = Screen::Game;
        debug!("switched to game screen");
        let events = self.round.start();
        self.record(&events);
        events
    }

    /// Moves back to the home screen. The round is kept as it is.
    pub fn return_home(&mut self) {
        self.screen = Screen::Home;
        debug!("switched to home screen");
    }

    /// Runs a game screen button.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotOnGameScreen`] from the home screen, or
    /// whatever the round rejects the command with.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Notification>, ActionError> {
        if self.screen != Screen::Game {
            return Err(ActionError::NotOnGameScreen);
        }

        let events = match command {
            Command::Deal => self.round.draw()?,
            Command::Pass => self.round.pass()?,
            Command::Stand => self.round.stand()?,
            Command::Restart => self.round.start(),
        };
        self.record(&events);
        Ok(events)
    }

    fn record(&mut self, events: &[Notification]) {
        if let Some(last) = events.last() {
            self.status = last.to_string();
        }
    }

    /// Returns the round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the status line for the last accepted command.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}
