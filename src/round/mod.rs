//! Round engine and state management.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, shuffled_deck};
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::snapshot::{Observer, Snapshot};
use crate::sync::Mutex;

mod actions;
mod dealer;
pub mod state;

pub use state::{RoundState, Turn};

/// A single-player blackjack round engine.
///
/// The round owns the deck and both hands for its lifetime. It starts fully
/// dealt: two cards to the user, one to the dealer, user to act. All methods
/// take `&self`; interior state lives behind mutexes so a presentation layer
/// can hold the round in shared ownership.
///
/// # Example
///
/// ```no_run
/// use bluejack::{Round, RoundState};
///
/// let round = Round::new(42);
/// assert_eq!(round.user_hand().len(), 2);
/// let _ = round.state();
/// ```
pub struct Round {
    /// Remaining face-down cards. The end of the vector is the top of the
    /// deck. Public for debug exposure and deck rigging in tests.
    pub deck: Mutex<Vec<Card>>,
    /// The user's hand.
    user_hand: Mutex<Hand>,
    /// The dealer's hand.
    dealer_hand: Mutex<Hand>,
    /// Current round state.
    state: Mutex<RoundState>,
    /// Whose action is currently permitted.
    turn: Mutex<Turn>,
    /// Random number generator, reused across resets.
    rng: Mutex<ChaCha8Rng>,
    /// State-change observers.
    observers: Mutex<Vec<Observer>>,
}

// Manual impl: the observer list holds boxed closures, which aren't `Debug`.
impl core::fmt::Debug for Round {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Round")
            .field("deck", &*self.deck.lock())
            .field("user_hand", &*self.user_hand.lock())
            .field("dealer_hand", &*self.dealer_hand.lock())
            .field("state", &*self.state.lock())
            .field("turn", &*self.turn.lock())
            .finish_non_exhaustive()
    }
}

impl Round {
    /// Creates a new round from the given seed and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bluejack::Round;
    ///
    /// let round = Round::new(42);
    /// let _ = round;
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh 52-card deck cannot run out on the opening deal"
    )]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = shuffled_deck(&mut rng);
        Self::start(deck, rng).expect("a fresh 52-card deck holds the opening deal")
    }

    /// Creates a round that deals from a prepared deck instead of shuffling.
    ///
    /// The end of `deck` is the top: the user receives the last two cards,
    /// the dealer the third from the end. Useful for test harnesses and
    /// replays; a later [`reset`](Self::reset) shuffles a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if `deck` holds fewer than the three cards
    /// the opening deal needs.
    pub fn from_deck(deck: Vec<Card>) -> Result<Self, EmptyDeckError> {
        Self::start(deck, ChaCha8Rng::seed_from_u64(0))
    }

    fn start(mut deck: Vec<Card>, rng: ChaCha8Rng) -> Result<Self, EmptyDeckError> {
        let (user_hand, dealer_hand) = Self::opening_hands(&mut deck)?;

        let round = Self {
            deck: Mutex::new(deck),
            user_hand: Mutex::new(user_hand),
            dealer_hand: Mutex::new(dealer_hand),
            state: Mutex::new(RoundState::Playing),
            turn: Mutex::new(Turn::User),
            rng: Mutex::new(rng),
            observers: Mutex::new(Vec::new()),
        };

        // Two court cards already exceed 21 under the house scoring table,
        // so the opening deal itself can end the round.
        round.check_user_bust();
        Ok(round)
    }

    /// Deals two cards to the user and one to the dealer, in that order.
    fn opening_hands(deck: &mut Vec<Card>) -> Result<(Hand, Hand), EmptyDeckError> {
        let mut user_hand = Hand::new();
        let mut dealer_hand = Hand::new();

        for _ in 0..2 {
            user_hand.add_card(deck.pop().ok_or(EmptyDeckError)?);
        }
        dealer_hand.add_card(deck.pop().ok_or(EmptyDeckError)?);

        Ok((user_hand, dealer_hand))
    }

    /// Discards the deck and both hands, then reinitializes the round.
    ///
    /// Permitted in any state. A fresh 52-card deck is shuffled from the
    /// round's generator, the opening hands are dealt, and state returns to
    /// [`RoundState::Playing`] with the user to act.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh 52-card deck cannot run out on the opening deal"
    )]
    pub fn reset(&self) {
        let mut deck = shuffled_deck(&mut *self.rng.lock());
        let (user_hand, dealer_hand) = Self::opening_hands(&mut deck)
            .expect("a fresh 52-card deck holds the opening deal");

        *self.deck.lock() = deck;
        *self.user_hand.lock() = user_hand;
        *self.dealer_hand.lock() = dealer_hand;
        *self.state.lock() = RoundState::Playing;
        *self.turn.lock() = Turn::User;

        self.check_user_bust();
        self.notify();
    }

    /// Removes and returns the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is exhausted. This is
    /// unreachable in correct single-round play and fatal when it happens.
    pub(crate) fn draw(&self) -> Result<Card, EmptyDeckError> {
        self.deck.lock().pop().ok_or(EmptyDeckError)
    }

    /// Marks the round lost for the user if their hand is bust.
    ///
    /// Bust transitions take priority over every comparison rule and are
    /// re-evaluated after each hand mutation.
    pub(crate) fn check_user_bust(&self) {
        if self.user_hand.lock().is_bust() {
            *self.state.lock() = RoundState::DealerWon;
        }
    }

    /// Registers an observer invoked after every observable mutation.
    ///
    /// Observers run synchronously on the mutating call and must not call
    /// back into the round.
    pub fn subscribe(&self, observer: impl Fn(&Snapshot) + Send + 'static) {
        self.observers.lock().push(Box::new(observer));
    }

    /// Takes a snapshot and hands it to every observer.
    pub(crate) fn notify(&self) {
        let snapshot = self.snapshot();
        for observer in self.observers.lock().iter() {
            observer(&snapshot);
        }
    }

    /// Returns an owned copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        // Hoisted so each hand guard drops at its semicolon; keeping them as
        // struct-literal temporaries would hold the locks across the
        // `user_total`/`dealer_total` calls below and self-deadlock.
        let user_cards = self.user_hand.lock().cards().to_vec();
        let dealer_cards = self.dealer_hand.lock().cards().to_vec();
        Snapshot {
            user_cards,
            dealer_cards,
            user_total: self.user_total(),
            dealer_total: self.dealer_total(),
            state: self.state(),
            turn: self.turn(),
            cards_remaining: self.cards_remaining(),
        }
    }

    /// Returns a clone of the user's hand.
    #[must_use]
    pub fn user_hand(&self) -> Hand {
        self.user_hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> Hand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the user's current total, recomputed from the hand.
    #[must_use]
    pub fn user_total(&self) -> u8 {
        self.user_hand.lock().total()
    }

    /// Returns the dealer's current total, recomputed from the hand.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer_hand.lock().total()
    }

    /// Returns the current round state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns whose action is currently permitted.
    #[must_use]
    pub fn turn(&self) -> Turn {
        *self.turn.lock()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }
}
