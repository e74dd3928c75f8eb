//! # briscola5
//!
//! Rules engine for five-player Briscola "chiamata": auction, concealed
//! dead trick, hidden partnership, and trick play to a scored conclusion.
//!
//! The crate is a pure, synchronous library. A driver (CLI, transport
//! adapter, test harness) owns a [`game_flow::GameFlow`] instance and feeds
//! it player actions; the engine validates turn and phase legality, mutates
//! the single [`domain::state::GameState`] root, and reports every
//! transition through an [`game_flow::events::EventSink`]. Rejected actions
//! leave state untouched and surface a specific [`errors::GameError`]; the
//! driver decides whether to reprompt or abort.
//!
//! ## Modules
//!
//! - `domain`: card types, deck, dealing, trick resolution, game state
//! - `errors`: recoverable domain error type
//! - `game_flow`: the phase-transition orchestrator and its event sink
//!
//! Shuffling uses an injected `rand::Rng`, so a fixed seed plus a fixed
//! action sequence reproduces a game exactly.

pub mod domain;
pub mod errors;
pub mod game_flow;

// Re-exports for ergonomics
pub use domain::snapshot::GameSnapshot;
pub use domain::state::{GameState, Phase, PlayerId};
pub use domain::{Card, PlayedCard, Rank, Suit};
pub use errors::GameError;
pub use game_flow::events::{EventSink, GameEvent, NullSink, RecordingSink, TracingSink};
pub use game_flow::GameFlow;
