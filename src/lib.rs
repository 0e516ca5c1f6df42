//! Fluppy Cat - a flappy-style arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic game session (state machine, scoring, spawning)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Persisted best score
//! - `platform`: Browser/native platform abstraction
//!
//! Rendering, physics simulation, and audio playback are host concerns.
//! The session consumes input and contact events, and emits
//! [`sim::GameEvent`]s the host applies to its scene graph, physics engine,
//! and mixer each frame.

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScores, ScoreStore};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the original frame cap)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Background tiles laid side by side for seamless scrolling
    pub const BG_TILES: usize = 2;

    /// Bird sprite/body size (points)
    pub const BIRD_SIZE: f32 = 50.0;
    /// Collectible sprite/body size (points)
    pub const COLLECTIBLE_SIZE: f32 = 40.0;
    /// Pillar sprite width at half scale (points)
    pub const PILLAR_WIDTH: f32 = 50.0;
    /// Obstacles spawn this far past the right screen edge
    pub const PILLAR_SPAWN_LEAD: f32 = 25.0;

    /// Restart control size (points)
    pub const RESTART_BUTTON_SIZE: f32 = 100.0;
    /// Pause control size (points)
    pub const PAUSE_BUTTON_SIZE: f32 = 40.0;
}

/// Axis-aligned rectangle, used for control hit regions
///
/// Stored as center + half-extents, matching how the host positions its
/// button sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    /// Build a rect from a center point and full size
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Whether a point lies inside (edges inclusive)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (p.x - self.center.x).abs() <= self.half.x && (p.y - self.center.y).abs() <= self.half.y
    }
}
