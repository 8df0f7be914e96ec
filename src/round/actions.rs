use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState, Turn};

impl Round {
    fn ensure_user_turn(&self) -> Result<(), ActionError> {
        if *self.state.lock() != RoundState::Playing {
            return Err(ActionError::RoundOver);
        }

        if *self.turn.lock() != Turn::User {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// User action: Hit (draw one card into the user's hand).
    ///
    /// The hand is re-scored after the draw; going over 21 ends the round
    /// with [`RoundState::DealerWon`] before any other rule is considered.
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the user's turn, or
    /// the deck is empty.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.ensure_user_turn()?;

        let card = self.draw()?;
        self.user_hand.lock().add_card(card);

        self.check_user_bust();
        self.notify();

        Ok(card)
    }

    /// User action: Stick (end the user's turn without drawing).
    ///
    /// Hands control to the dealer policy: user actions are rejected until
    /// the dealer's hand resolves. Drive the dealer with
    /// [`advance_dealer`](Self::advance_dealer) or
    /// [`run_dealer`](Self::run_dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over or it is not the user's turn.
    pub fn stick(&self) -> Result<(), ActionError> {
        self.ensure_user_turn()?;

        *self.turn.lock() = Turn::Dealer;
        self.notify();

        Ok(())
    }
}
