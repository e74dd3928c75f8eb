//! Shuffling and dealing with an injected randomness source.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::Card;
use super::deck::{assert_is_valid_deck, full_deck};
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::errors::GameError;

/// Build the full deck and shuffle it with the caller's RNG. A seeded RNG
/// makes the whole game reproducible.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Deal 8 cards to each of 5 players in fixed order from a complete deck.
/// The deck composition is validated first.
pub fn deal_hands(deck: &[Card]) -> Result<[Vec<Card>; PLAYERS], GameError> {
    assert_is_valid_deck(deck)?;

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (player, hand) in hands.iter_mut().enumerate() {
        let start = player * HAND_SIZE;
        *hand = deck[start..start + HAND_SIZE].to_vec();
    }
    Ok(hands)
}
