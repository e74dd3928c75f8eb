//! Full-deck generation and composition validation.

use std::collections::HashSet;

use super::cards_types::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;
use crate::errors::GameError;

/// The canonical 40-card deck, suit-major. Only composition matters to
/// callers; the order is fixed for determinism.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Validate that `deck` is the full 40-card deck exactly once each.
///
/// The type system admits exactly 40 distinct `Card` values, so 40 unique
/// cards are necessarily the full set; duplicates and omissions are the only
/// failure modes.
pub fn assert_is_valid_deck(deck: &[Card]) -> Result<(), GameError> {
    if deck.len() != DECK_SIZE {
        return Err(GameError::validation(format!(
            "deck has {} cards, expected {DECK_SIZE}",
            deck.len()
        )));
    }
    let unique: HashSet<Card> = deck.iter().copied().collect();
    if unique.len() != DECK_SIZE {
        return Err(GameError::validation(
            "deck contains duplicate cards".to_string(),
        ));
    }
    Ok(())
}
