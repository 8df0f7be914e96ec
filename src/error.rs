//! Error types for round operations.

use thiserror::Error;

/// A draw was requested against an empty deck.
///
/// This is fatal to the current round: a single 52-card deck cannot run out
/// in correct play, so exhaustion means a dealing invariant was violated.
/// Callers must surface it and require a reset rather than swallow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during user actions (hit, stick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round has already reached a terminal state.
    #[error("round is not in progress")]
    RoundOver,
    /// It is not the user's turn.
    #[error("not the user's turn")]
    NotYourTurn,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur while advancing the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The round has already reached a terminal state.
    #[error("round is not in progress")]
    RoundOver,
    /// It is not the dealer's turn.
    #[error("not the dealer's turn")]
    NotDealerTurn,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}
