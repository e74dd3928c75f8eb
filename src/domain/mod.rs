//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod trick;

#[cfg(test)]
mod tests_state;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::{assert_is_valid_deck, full_deck};
pub use trick::{resolve_trick, trick_points, PlayedCard};
