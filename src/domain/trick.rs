//! Trick resolution: winner and point value of five played cards.

use super::cards_types::{Card, Suit};
use crate::domain::rules::PLAYERS;
use crate::domain::state::PlayerId;
use crate::errors::GameError;

/// One play within a trick; owned by the current trick list and destroyed
/// when the trick is resolved and cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Sum of the point values of the played cards; order-independent.
pub fn trick_points(played: &[PlayedCard]) -> u8 {
    played.iter().map(|pc| pc.card.points()).sum()
}

/// Determine the winner of a complete trick.
///
/// The winning suit is the trump suit if one is declared and present among
/// the plays, otherwise the lead suit. Within the winning suit the highest
/// strength wins; strengths are unique per suit, so there is never a tie.
pub fn resolve_trick(
    played: &[PlayedCard],
    trump_suit: Option<Suit>,
) -> Result<PlayerId, GameError> {
    if played.len() != PLAYERS {
        return Err(GameError::invalid_move(format!(
            "expected {PLAYERS} played cards, got {}",
            played.len()
        )));
    }

    let lead_suit = played[0].card.suit;
    let winning_suit = match trump_suit {
        Some(trump) if played.iter().any(|pc| pc.card.suit == trump) => trump,
        _ => lead_suit,
    };

    // The lead card always matches the winning suit when no trump is in
    // play, so the filter is never empty.
    played
        .iter()
        .filter(|pc| pc.card.suit == winning_suit)
        .max_by_key(|pc| pc.card.strength())
        .map(|pc| pc.player_id)
        .ok_or_else(|| GameError::invalid_move("trick has no card of the winning suit"))
}
