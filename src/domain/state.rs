//! Mutable game state container plus pure, invariant-preserving queries.
//!
//! No phase-transition logic lives here; that belongs to `game_flow`.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{assert_player_id, PLAYERS};
use crate::domain::trick::PlayedCard;
use crate::errors::GameError;

pub type PlayerId = u8; // 0..=4

/// Game progression phases, linear with one branch.
///
/// The original design reserved a separate dead-trick resolve step between
/// `DeadTrickCall` and `TrickPlay`; resolution is folded into the call
/// instead, so no such variant exists here.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Players bid increasing point targets; the winner becomes caller.
    Auction,
    /// The first trick, played before trump and partner are known.
    DeadTrickPlay,
    /// Auction winner declares trump and the called card.
    DeadTrickCall,
    /// Normal trick rounds with an established trump.
    TrickPlay,
    /// All hands exhausted.
    GameOver,
}

/// Auction bookkeeping: who has passed, who holds the highest bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionState {
    pub start_player: PlayerId,
    pub current_player: PlayerId,
    pub last_bid: Option<u8>,
    pub last_bidder: Option<PlayerId>,
    pub passed: [bool; PLAYERS],
}

impl AuctionState {
    pub fn new(start_player: PlayerId) -> Result<Self, GameError> {
        assert_player_id(start_player)?;
        Ok(Self {
            start_player,
            current_player: start_player,
            last_bid: None,
            last_bidder: None,
            passed: [false; PLAYERS],
        })
    }

    pub fn is_player_active(&self, player_id: PlayerId) -> bool {
        !self.passed[player_id as usize]
    }

    pub fn active_players_count(&self) -> usize {
        self.passed.iter().filter(|&&p| !p).count()
    }
}

/// Ordered plays of the current trick plus the round counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrickState {
    pub played: Vec<PlayedCard>,
    pub index: u8,
}

impl TrickState {
    pub fn new() -> Self {
        Self {
            played: Vec::with_capacity(PLAYERS),
            index: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.played.len() == PLAYERS
    }
}

/// The call and the hidden partnership derived from it.
///
/// `partner_player` is concealed information: it is never public knowledge
/// until `partner_revealed` flips, which happens at most once, the first
/// time the called card is physically played.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallState {
    pub caller_player: Option<PlayerId>,
    pub target_points: Option<u8>,
    pub trump_suit: Option<Suit>,
    pub called_card: Option<Card>,
    pub partner_player: Option<PlayerId>,
    pub partner_revealed: bool,
    pub caller_team_won: Option<bool>,
}

/// Per-player captured cards and points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub won_cards: [Vec<Card>; PLAYERS],
    pub player_points: [u8; PLAYERS],
}

/// Whose turn it is and who dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    pub current_player: PlayerId,
    pub dealer_player: PlayerId,
}

/// The single mutable root, owned exclusively by one orchestrator instance
/// for the lifetime of one game. The auxiliary records are always-present
/// fields rather than phase payloads: scores, the call, and hands persist
/// across phase changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub hands: [Vec<Card>; PLAYERS],
    pub auction: AuctionState,
    pub trick: TrickState,
    pub call: CallState,
    pub score: ScoreState,
    pub turn: TurnState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Auction,
            hands: Default::default(),
            // start player 0 is in range, so this cannot fail
            auction: AuctionState {
                start_player: 0,
                current_player: 0,
                last_bid: None,
                last_bidder: None,
                passed: [false; PLAYERS],
            },
            trick: TrickState::new(),
            call: CallState::default(),
            score: ScoreState::default(),
            turn: TurnState::default(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_trick_is_complete(&self) -> bool {
        self.trick.is_complete()
    }

    pub fn hand(&self, player_id: PlayerId) -> Result<&[Card], GameError> {
        assert_player_id(player_id)?;
        Ok(&self.hands[player_id as usize])
    }

    pub fn remaining_cards_in_hand(&self, player_id: PlayerId) -> Result<usize, GameError> {
        Ok(self.hand(player_id)?.len())
    }

    /// Team totals as `(caller_team, others)`, only once both the caller
    /// and the partner identity are known. Pure projection; never assigns
    /// the partner. A caller who called their own card plays alone and is
    /// counted once.
    pub fn team_points_if_known(&self) -> Option<(u16, u16)> {
        let caller = self.call.caller_player?;
        let partner = self.call.partner_player?;

        let mut caller_team = self.score.player_points[caller as usize] as u16;
        if partner != caller {
            caller_team += self.score.player_points[partner as usize] as u16;
        }
        let total: u16 = self
            .score
            .player_points
            .iter()
            .map(|&p| p as u16)
            .sum();
        Some((caller_team, total - caller_team))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat / turn math (5 fixed seats: 0..=4). Shared by the auction loop and
/// trick rotation so there is a single source of truth for "who acts next".
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    ((p as usize + 1) % PLAYERS) as PlayerId
}

/// First to act after the deal and in the dead trick: left of the dealer.
#[inline]
pub fn auction_start_seat(dealer: PlayerId) -> PlayerId {
    next_player(dealer)
}
