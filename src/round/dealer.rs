use alloc::vec::Vec;

use crate::card::Card;
use crate::error::StepError;

use super::{Round, RoundState, Turn};

/// Dealer stands at or above this total.
const DEALER_STAND: u8 = 17;

impl Round {
    /// Advances the dealer's hand by one policy step.
    ///
    /// If the dealer's total is below 17, one card is drawn and the hand
    /// re-scored; the moment the total reaches 17 or more the outcome is
    /// resolved. Returns the card drawn by this step, or `None` if the
    /// dealer already stood (a defensive branch: a freshly passed turn
    /// always leaves the dealer below 17).
    ///
    /// Pacing between steps is the caller's concern. Call this on a timer
    /// for animated play, or in a tight loop (see
    /// [`run_dealer`](Self::run_dealer)) when no pacing is wanted.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the dealer's turn,
    /// or the deck is empty while the dealer must draw.
    pub fn advance_dealer(&self) -> Result<Option<Card>, StepError> {
        if *self.state.lock() != RoundState::Playing {
            return Err(StepError::RoundOver);
        }

        if *self.turn.lock() != Turn::Dealer {
            return Err(StepError::NotDealerTurn);
        }

        if self.dealer_total() >= DEALER_STAND {
            self.resolve();
            self.notify();
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer_hand.lock().add_card(card);

        if self.dealer_total() >= DEALER_STAND {
            self.resolve();
        }
        self.notify();

        Ok(Some(card))
    }

    /// Runs dealer steps until the round resolves.
    ///
    /// Convenience wrapper over [`advance_dealer`](Self::advance_dealer) for
    /// tests and embeddings that do not animate individual draws. Returns
    /// the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the dealer's turn,
    /// or the deck is empty while the dealer must draw.
    pub fn run_dealer(&self) -> Result<Vec<Card>, StepError> {
        let mut drawn = Vec::new();

        while self.state() == RoundState::Playing && self.turn() == Turn::Dealer {
            match self.advance_dealer()? {
                Some(card) => drawn.push(card),
                None => break,
            }
        }

        Ok(drawn)
    }

    /// Compares totals once the dealer has stood and records the outcome.
    ///
    /// The four branches are mutually exclusive and exhaustive for any pair
    /// of totals with the dealer at 17 or more: dealer bust, user higher,
    /// dealer higher, equal. The turn is handed back to the user; terminal
    /// states mask it, so this only matters on the unreachable path where no
    /// branch fired.
    fn resolve(&self) {
        let user_total = self.user_total();
        let dealer_total = self.dealer_total();

        let outcome = if dealer_total > 21 || user_total > dealer_total {
            RoundState::UserWon
        } else if dealer_total > user_total {
            RoundState::DealerWon
        } else {
            RoundState::Tie
        };

        *self.state.lock() = outcome;
        *self.turn.lock() = Turn::User;
    }
}
