//! Observable round state for the presentation layer.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::round::{RoundState, Turn};

/// An owned copy of everything the presentation layer may observe.
///
/// A snapshot is taken after every mutation and handed to subscribed
/// observers; it can also be requested on demand via
/// [`Round::snapshot`](crate::Round::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The user's cards, in deal order.
    pub user_cards: Vec<Card>,
    /// The dealer's cards, in deal order.
    pub dealer_cards: Vec<Card>,
    /// The user's current total.
    pub user_total: u8,
    /// The dealer's current total.
    pub dealer_total: u8,
    /// The current round state.
    pub state: RoundState,
    /// Whose action is currently permitted.
    pub turn: Turn,
    /// Number of cards remaining in the deck.
    pub cards_remaining: usize,
}

/// A state-change callback registered with [`Round::subscribe`](crate::Round::subscribe).
///
/// Observers are invoked synchronously after each observable mutation. They
/// must not call back into the round: the machine is not reentrant.
pub type Observer = Box<dyn Fn(&Snapshot) + Send>;
