//! Public snapshot API for observing game state without exposing internals.
//!
//! Hands are redacted to counts and the hidden partner is omitted until the
//! reveal, so a snapshot can be forwarded to any player or spectator.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, PlayerId};

/// Public record of one play in the current trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCardPublic {
    pub player: PlayerId,
    pub card: Card,
}

/// Public auction facts: bids and passes are open information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionPublic {
    pub last_bid: Option<u8>,
    pub last_bidder: Option<PlayerId>,
    pub passed: [bool; PLAYERS],
}

/// Serializable projection of everything publicly knowable about a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub dealer: PlayerId,
    pub current_player: PlayerId,
    pub trick_index: u8,
    pub current_trick: Vec<PlayedCardPublic>,
    pub hand_sizes: [u8; PLAYERS],
    pub auction: AuctionPublic,
    pub caller: Option<PlayerId>,
    pub target_points: Option<u8>,
    pub trump_suit: Option<Suit>,
    pub called_card: Option<Card>,
    /// `None` until the called card has been played.
    pub partner: Option<PlayerId>,
    pub partner_revealed: bool,
    pub player_points: [u8; PLAYERS],
    pub caller_team_won: Option<bool>,
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        let mut hand_sizes = [0u8; PLAYERS];
        for (i, hand) in state.hands.iter().enumerate() {
            hand_sizes[i] = hand.len() as u8;
        }

        Self {
            phase: state.phase,
            dealer: state.turn.dealer_player,
            current_player: state.turn.current_player,
            trick_index: state.trick.index,
            current_trick: state
                .trick
                .played
                .iter()
                .map(|pc| PlayedCardPublic {
                    player: pc.player_id,
                    card: pc.card,
                })
                .collect(),
            hand_sizes,
            auction: AuctionPublic {
                last_bid: state.auction.last_bid,
                last_bidder: state.auction.last_bidder,
                passed: state.auction.passed,
            },
            caller: state.call.caller_player,
            target_points: state.call.target_points,
            trump_suit: state.call.trump_suit,
            called_card: state.call.called_card,
            partner: state.call.partner_revealed.then(|| state.call.partner_player).flatten(),
            partner_revealed: state.call.partner_revealed,
            player_points: state.score.player_points,
            caller_team_won: state.call.caller_team_won,
        }
    }
}
