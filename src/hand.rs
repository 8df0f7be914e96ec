//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Computes the best total of a hand under the house scoring rules.
///
/// Non-ace cards score their rank value: 2-10 count face value, and the
/// court cards count J = 11, Q = 12, K = 13. This table deviates from the
/// traditional blackjack "all court cards are 10" rule on purpose; it is the
/// house convention of this game and changing it would alter every observed
/// total.
///
/// Aces are resolved one at a time, in encounter order, against the running
/// total: an ace counts 11 if that keeps the total at or below 21, otherwise
/// it counts 1. The resolution is greedy per ace rather than globally
/// optimal, which matters for hands holding two or more aces.
///
/// An empty hand scores 0. Arithmetic saturates so absurd synthetic hands
/// cannot wrap.
#[must_use]
pub fn score_hand(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;

    for card in cards.iter().filter(|card| !card.is_ace()) {
        total = total.saturating_add(card.rank);
    }

    for _ace in cards.iter().filter(|card| card.is_ace()) {
        if total.saturating_add(11) > 21 {
            total = total.saturating_add(1);
        } else {
            total += 11;
        }
    }

    total
}

/// An ordered sequence of cards dealt to one participant.
///
/// Order is irrelevant to scoring but preserved so the presentation layer
/// can lay cards out in deal order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the total of the hand. See [`score_hand`].
    #[must_use]
    pub fn total(&self) -> u8 {
        score_hand(&self.cards)
    }

    /// Returns whether the hand is bust (total over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
