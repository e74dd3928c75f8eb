//! Domain error type shared across the engine.
//!
//! Every variant is a local, recoverable rejection: the engine leaves state
//! unchanged and returns the specific reason to the driver. Nothing here is
//! fatal to the engine itself.

use thiserror::Error;

use crate::domain::state::{Phase, PlayerId};

/// Central error type for rejected actions and invalid inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Action attempted in a phase that does not allow it.
    #[error("phase error: {action} not allowed in {phase:?}")]
    Phase { phase: Phase, action: &'static str },

    /// Actor is not the current player.
    #[error("turn error: expected player {expected}, got {actor}")]
    Turn { expected: PlayerId, actor: PlayerId },

    /// Bid at or below the current floor / highest bid.
    #[error("auction error: bid {offer} not above current floor {floor}")]
    Auction { offer: u8, floor: u8 },

    /// Invalid move: bad card index, malformed trick state, and similar.
    #[error("move error: {0}")]
    Move(String),

    /// Invalid player id, invalid deck composition, malformed input.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GameError {
    pub fn phase(phase: Phase, action: &'static str) -> Self {
        Self::Phase { phase, action }
    }

    pub fn turn(expected: PlayerId, actor: PlayerId) -> Self {
        Self::Turn { expected, actor }
    }

    pub fn auction(offer: u8, floor: u8) -> Self {
        Self::Auction { offer, floor }
    }

    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::Move(detail.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
