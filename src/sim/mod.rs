//! Deterministic game session module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the host's frame clock and delivered events
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies; effects on collaborators
//!   surface as [`GameEvent`]s drained by the host

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{classify, CollisionTag, ContactOutcome};
pub use spawn::{next_obstacle, ObstacleDescriptor};
pub use state::{EntityId, GameEvent, GamePhase, GameState, Obstacle, SoundId};
pub use tick::{on_contact, on_input_event, on_spawn_timer, restart, tick};
