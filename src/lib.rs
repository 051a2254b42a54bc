//! Round engine for a four-seat, ace-low blackjack table with optional
//! `no_std` support.
//!
//! Mario, Luigi, Yoshi and the Dealer take turns drawing from a single
//! 52-card deck. Aces always count 1 and face cards 10; a hand over 21 busts.
//! When everyone is standing, the highest total at or under 21 wins, ties
//! going to the earlier seat.
//!
//! [`Round`] holds the game rules. [`Session`] wraps it with the home/game
//! screen switch and the status line a front end shows.
//!
//! # Example
//!
//! ```
//! use spacedeck::{Notification, Round, RoundOptions, Seat};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! round.start();
//!
//! let events = round.stand().unwrap();
//! assert_eq!(events[1], Notification::TurnChanged { participant: Seat::Luigi });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod seat;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError};
pub use event::Notification;
pub use hand::{Hand, HandStatus, Participant};
pub use options::RoundOptions;
pub use result::RoundOutcome;
pub use round::{Round, RoundState};
pub use seat::{Seat, SeatMap};
pub use session::{Command, Screen, Session};
