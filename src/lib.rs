//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns the deck and both hands,
//! drives the user hit/stick flow and the automated dealer policy, and
//! notifies observers after every state change so a presentation layer can
//! re-render.
//!
//! Two house rules differ from casino blackjack and are kept on purpose:
//! court cards score J = 11, Q = 12, K = 13 rather than 10, and aces are
//! valued greedily one at a time (see [`hand::score_hand`]).
//!
//! # Example
//!
//! ```no_run
//! use bluejack::{Round, RoundState, Turn};
//!
//! let round = Round::new(42);
//!
//! if round.state() == RoundState::Playing {
//!     round.stick().unwrap();
//!     while round.state() == RoundState::Playing && round.turn() == Turn::Dealer {
//!         round.advance_dealer().unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod round;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, shuffled_deck};
pub use error::{ActionError, EmptyDeckError, StepError};
pub use hand::{Hand, score_hand};
pub use round::{Round, RoundState, Turn};
pub use snapshot::{Observer, Snapshot};
