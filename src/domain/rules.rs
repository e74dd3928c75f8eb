//! Fixed game constants and small rule helpers.

use crate::domain::state::PlayerId;
use crate::errors::GameError;

pub const PLAYERS: usize = 5;
pub const HAND_SIZE: usize = 8;
pub const DECK_SIZE: usize = 40;

/// A first bid must exceed this floor; later bids must exceed the highest bid.
pub const BID_FLOOR: u8 = 60;

/// Total point value of the deck; all trick points sum to this.
pub const TOTAL_POINTS: u16 = 120;

pub fn assert_player_id(player_id: PlayerId) -> Result<(), GameError> {
    if (player_id as usize) < PLAYERS {
        Ok(())
    } else {
        Err(GameError::validation(format!(
            "invalid player_id {player_id}"
        )))
    }
}
