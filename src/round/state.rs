//! Round state types.

/// The externally observable state of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The round is in progress.
    Playing,
    /// The user won (dealer busted or user finished higher).
    UserWon,
    /// The dealer won (user busted or dealer finished higher).
    DealerWon,
    /// Both participants finished on the same total.
    Tie,
}

impl RoundState {
    /// Returns whether the round has ended.
    ///
    /// A round leaves [`RoundState::Playing`] at most once and never
    /// re-enters it without an explicit reset.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Whose action is currently permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The user may hit or stick.
    User,
    /// The dealer policy is drawing; user actions are rejected.
    Dealer,
}
