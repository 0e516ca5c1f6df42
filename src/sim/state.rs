//! Game session state and core types
//!
//! All state that drives the session lives here. The session never touches
//! a scene graph or physics engine directly: effects are queued as
//! [`GameEvent`]s and drained by the host after each operation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::BG_TILES;
use crate::tuning::Tuning;
use crate::Rect;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first tap; gravity off, nothing spawns
    Idle,
    /// Active gameplay
    Playing,
    /// Bird hit a pillar or the ground; waiting for the restart tap
    Dead,
}

/// Opaque handle identifying an entity to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Sound effect identifiers for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Collectible consumed
    Coin,
}

/// A pillar pair plus its collectible
///
/// All three entities share the pair's horizontal position. The collectible
/// slot is cleared when consumed; the pillars live until the pair scrolls
/// off the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub top: EntityId,
    pub bottom: EntityId,
    pub collectible: Option<EntityId>,
    /// Horizontal position of the pair
    pub x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub collectible_y: f32,
}

/// Effects for the host to apply to its scene, physics engine, and mixer
///
/// Emitted in order; the host drains the queue once per frame via
/// [`GameState::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    ScoreChanged(u32),
    HighScoreChanged(u32),
    PauseToggled(bool),
    /// Zero or set the entity's velocity (issued before each flap impulse)
    SetVelocity { entity: EntityId, velocity: Vec2 },
    ApplyImpulse { entity: EntityId, impulse: Vec2 },
    GravityEnabled { entity: EntityId, enabled: bool },
    /// The entity no longer triggers gameplay contacts; the host may keep
    /// moving it under residual impulse
    CollisionResponseDisabled(EntityId),
    /// Host runs the death presentation and shows the restart control
    BirdDied,
    ObstacleSpawned { obstacle: Obstacle },
    RemoveEntity(EntityId),
    PlaySound(SoundId),
    /// Session rebuilt; host reconstructs the bird, labels, and background
    SceneReset { bird: EntityId },
}

/// Complete session state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Balance constants the session was built with
    pub tuning: Tuning,
    /// Scene dimensions supplied by the host
    pub screen: Vec2,
    pub phase: GamePhase,
    /// External scheduling suspension. While set, the host delivers no
    /// tick/spawn/contact callbacks; only the unpause hit-test runs here.
    pub paused: bool,
    pub score: u32,
    /// Best score as last read from or proposed to the store
    pub high_score: u32,
    pub bird: EntityId,
    /// Live obstacles in spawn order (front-most first)
    pub obstacles: Vec<Obstacle>,
    /// Left edge of each background tile
    pub background_x: [f32; BG_TILES],
    /// Seconds until the next spawn; `None` while the timer is disarmed
    pub spawn_in: Option<f32>,
    /// Restart control hit region, supplied by the renderer
    pub restart_region: Option<Rect>,
    /// Pause control hit region, supplied by the renderer
    pub pause_region: Option<Rect>,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh `Idle` session
    ///
    /// `high_score` is the stored best, read by the host from its
    /// [`crate::ScoreStore`] (missing value reads as 0). Emits
    /// [`GameEvent::SceneReset`] so hosts build the scene the same way
    /// after construction and after [`super::restart`].
    pub fn new(seed: u64, screen: Vec2, tuning: Tuning, high_score: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            screen,
            phase: GamePhase::Idle,
            paused: false,
            score: 0,
            high_score,
            bird: EntityId(0),
            obstacles: Vec::new(),
            background_x: Self::initial_background(screen.x),
            spawn_in: None,
            restart_region: None,
            pause_region: None,
            events: Vec::new(),
            next_id: 1,
        };

        let bird = state.next_entity_id();
        state.bird = bird;
        state.emit(GameEvent::SceneReset { bird });
        state
    }

    /// Tile positions for an unscrolled background
    pub(crate) fn initial_background(screen_width: f32) -> [f32; BG_TILES] {
        std::array::from_fn(|i| i as f32 * screen_width)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// Install the control hit regions the renderer laid out
    pub fn set_control_regions(&mut self, restart: Option<Rect>, pause: Option<Rect>) {
        self.restart_region = restart;
        self.pause_region = pause;
    }

    /// Take all events emitted since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
