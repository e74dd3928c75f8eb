//! Transition events emitted by the orchestrator.
//!
//! The engine never prints; every state transition and resolution is
//! reported through an [`EventSink`] so drivers can render, forward, or
//! silence them. Rejected actions are not events — they are returned as
//! errors to the caller.

use tracing::info;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::PlayerId;

/// Edge-triggered notifications of what just happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameSetup {
        dealer: PlayerId,
        first_to_act: PlayerId,
    },
    BidPlaced {
        player: PlayerId,
        offer: u8,
    },
    PlayerPassed {
        player: PlayerId,
    },
    AuctionConcluded {
        caller: Option<PlayerId>,
        target_points: Option<u8>,
    },
    CardPlayed {
        player: PlayerId,
        card: Card,
    },
    /// The dead trick is on the table, unresolved, awaiting the call.
    DeadTrickFinished,
    CallDeclared {
        trump_suit: Suit,
        called_card: Card,
    },
    TrickResolved {
        winner: PlayerId,
        points: u8,
        trick_index: u8,
    },
    PartnerRevealed {
        partner: PlayerId,
    },
    TurnBecame {
        player: PlayerId,
    },
    GameOver,
    GameScored {
        caller_team_points: u16,
        others_points: u16,
        caller_team_won: bool,
    },
}

/// Receives every event the engine emits. Implementations must not assume
/// any particular ordering guarantees beyond emission order.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Logs each event through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameSetup {
                dealer,
                first_to_act,
            } => info!(dealer, first_to_act, "game set up"),
            GameEvent::BidPlaced { player, offer } => info!(player, offer, "bid placed"),
            GameEvent::PlayerPassed { player } => info!(player, "player passed"),
            GameEvent::AuctionConcluded {
                caller,
                target_points,
            } => info!(?caller, ?target_points, "auction concluded"),
            GameEvent::CardPlayed { player, card } => {
                info!(player, card = %card, "card played")
            }
            GameEvent::DeadTrickFinished => info!("dead trick finished, awaiting call"),
            GameEvent::CallDeclared {
                trump_suit,
                called_card,
            } => info!(trump = %trump_suit, called = %called_card, "call declared"),
            GameEvent::TrickResolved {
                winner,
                points,
                trick_index,
            } => info!(winner, points, trick_index, "trick resolved"),
            GameEvent::PartnerRevealed { partner } => info!(partner, "partner revealed"),
            GameEvent::TurnBecame { player } => info!(player, "turn advanced"),
            GameEvent::GameOver => info!("game over"),
            GameEvent::GameScored {
                caller_team_points,
                others_points,
                caller_team_won,
            } => info!(caller_team_points, others_points, caller_team_won, "game scored"),
        }
    }
}

/// Discards every event; keeps tests and benchmarks quiet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Buffers events in order for assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
