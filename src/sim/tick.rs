//! Session operations
//!
//! The five entry points the host scheduler drives: [`tick`] each frame,
//! [`on_input_event`] per tap, [`on_contact`] per physics contact,
//! [`on_spawn_timer`] at timer expiry, and [`restart`]. All synchronous;
//! each queues [`GameEvent`]s the host drains afterwards.

use glam::Vec2;

use super::collision::{classify, CollisionTag, ContactOutcome};
use super::spawn::next_obstacle;
use super::state::{EntityId, GameEvent, GamePhase, GameState, Obstacle, SoundId};
use crate::consts::{BG_TILES, PILLAR_SPAWN_LEAD, PILLAR_WIDTH};
use crate::highscores::ScoreStore;
use crate::Rect;

/// Handle a tap at `location` (scene coordinates)
///
/// `None` means the host could not attribute a position; it can still flap,
/// never hit a control. The store is consulted only on the restart tap.
pub fn on_input_event<S: ScoreStore>(
    state: &mut GameState,
    location: Option<Vec2>,
    store: &mut S,
) {
    match state.phase {
        GamePhase::Idle => start_run(state),

        GamePhase::Playing => {
            if state.paused {
                // Physics clock is suspended; only the unpause hit-test runs
                if hits(state.pause_region, location) {
                    set_paused(state, false);
                }
                return;
            }

            flap(state);
            if hits(state.pause_region, location) {
                set_paused(state, true);
            }
        }

        GamePhase::Dead => {
            // The pause control is gone while dead; everything but the
            // restart tap is a no-op.
            if hits(state.restart_region, location) {
                commit_high_score(state, store);
                restart(state);
            }
        }
    }
}

/// Handle a contact the physics engine reported between two tagged bodies
pub fn on_contact(state: &mut GameState, a: CollisionTag, b: CollisionTag) {
    if state.phase != GamePhase::Playing || state.paused {
        return;
    }

    match classify(a, b) {
        ContactOutcome::Lethal => kill_bird(state),
        ContactOutcome::Scored => collect(state),
        ContactOutcome::Ignored => {}
    }
}

/// Advance the session by one frame
///
/// Scrolls the background, moves obstacles left and despawns pairs past the
/// left edge, and counts the spawn timer down. Obstacle motion is gated on
/// `Playing`, which is what freezes the field in place on death.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing || state.paused {
        return;
    }

    scroll_background(state);
    move_obstacles(state, dt);

    if let Some(remaining) = state.spawn_in {
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            on_spawn_timer(state);
        } else {
            state.spawn_in = Some(remaining);
        }
    }
}

/// Spawn the next obstacle and re-arm the timer
pub fn on_spawn_timer(state: &mut GameState) {
    if state.phase != GamePhase::Playing || state.paused {
        return;
    }

    let spawn_x = state.screen.x + PILLAR_SPAWN_LEAD;
    let desc = next_obstacle(&mut state.rng, &state.tuning, spawn_x, state.screen.y);

    let obstacle = Obstacle {
        top: state.next_entity_id(),
        bottom: state.next_entity_id(),
        collectible: Some(state.next_entity_id()),
        x: desc.x,
        top_y: desc.top_y,
        bottom_y: desc.bottom_y,
        collectible_y: desc.collectible_y,
    };
    state.obstacles.push(obstacle.clone());
    state.emit(GameEvent::ObstacleSpawned { obstacle });

    state.spawn_in = Some(state.tuning.spawn_delay);
}

/// Tear the session down to a fresh `Idle`
///
/// Safe to call from any phase; a pending spawn timer is cancelled first.
/// High-score commitment happens on the restart tap in [`on_input_event`],
/// not here, so a bare restart never writes to the store.
pub fn restart(state: &mut GameState) {
    state.spawn_in = None;

    for obstacle in std::mem::take(&mut state.obstacles) {
        remove_obstacle_entities(state, &obstacle);
    }

    state.score = 0;
    state.paused = false;
    state.phase = GamePhase::Idle;
    state.background_x = GameState::initial_background(state.screen.x);

    let bird = state.next_entity_id();
    state.bird = bird;
    state.emit(GameEvent::SceneReset { bird });
    state.emit(GameEvent::ScoreChanged(0));
    state.emit(GameEvent::PhaseChanged(GamePhase::Idle));
    log::info!("session restarted");
}

fn start_run(state: &mut GameState) {
    state.phase = GamePhase::Playing;
    log::info!("run started (seed {})", state.seed);
    state.emit(GameEvent::PhaseChanged(GamePhase::Playing));

    let bird = state.bird;
    state.emit(GameEvent::GravityEnabled {
        entity: bird,
        enabled: true,
    });

    // First pair appears immediately; the recurring delay starts after it
    on_spawn_timer(state);
    flap(state);
}

/// One upward impulse. Velocity is zeroed first so impulses never compound.
fn flap(state: &mut GameState) {
    let bird = state.bird;
    let impulse = state.tuning.flap_impulse;
    state.emit(GameEvent::SetVelocity {
        entity: bird,
        velocity: Vec2::ZERO,
    });
    state.emit(GameEvent::ApplyImpulse {
        entity: bird,
        impulse,
    });
}

fn kill_bird(state: &mut GameState) {
    state.phase = GamePhase::Dead;
    state.spawn_in = None;
    log::info!("bird died at score {}", state.score);

    let bird = state.bird;
    state.emit(GameEvent::CollisionResponseDisabled(bird));
    state.emit(GameEvent::BirdDied);
    state.emit(GameEvent::PhaseChanged(GamePhase::Dead));
}

fn collect(state: &mut GameState) {
    state.score += 1;
    let score = state.score;
    state.emit(GameEvent::ScoreChanged(score));
    state.emit(GameEvent::PlaySound(SoundId::Coin));

    // Contacts carry tags, not entity refs. The bird sits at mid-screen, so
    // the front-most pair still holding a collectible is the one it reached.
    match take_front_collectible(state) {
        Some(id) => state.emit(GameEvent::RemoveEntity(id)),
        None => log::warn!("scoring contact with no collectible in flight"),
    }
}

fn take_front_collectible(state: &mut GameState) -> Option<EntityId> {
    state
        .obstacles
        .iter_mut()
        .find_map(|obstacle| obstacle.collectible.take())
}

fn scroll_background(state: &mut GameState) {
    let width = state.screen.x;
    let speed = state.tuning.background_speed;
    for x in state.background_x.iter_mut() {
        *x -= speed;
        // A tile fully past the left edge jumps right by the span of all
        // tiles, keeping the pair seamless
        if *x <= -width {
            *x += width * BG_TILES as f32;
        }
    }
}

fn move_obstacles(state: &mut GameState, dt: f32) {
    let dx = state.tuning.pillar_speed * dt;
    for obstacle in &mut state.obstacles {
        obstacle.x -= dx;
    }

    let cutoff = -PILLAR_WIDTH;
    let mut gone = Vec::new();
    state.obstacles.retain(|obstacle| {
        if obstacle.x < cutoff {
            gone.push(obstacle.clone());
            false
        } else {
            true
        }
    });
    for obstacle in gone {
        remove_obstacle_entities(state, &obstacle);
    }
}

fn remove_obstacle_entities(state: &mut GameState, obstacle: &Obstacle) {
    state.emit(GameEvent::RemoveEntity(obstacle.top));
    state.emit(GameEvent::RemoveEntity(obstacle.bottom));
    if let Some(collectible) = obstacle.collectible {
        state.emit(GameEvent::RemoveEntity(collectible));
    }
}

fn commit_high_score<S: ScoreStore>(state: &mut GameState, store: &mut S) {
    let stored = store.high_score();
    let best = stored.max(state.score);
    if best > stored {
        store.set_high_score(best);
        log::info!("new high score: {best}");
    }
    if best != state.high_score {
        state.high_score = best;
        state.emit(GameEvent::HighScoreChanged(best));
    }
}

fn set_paused(state: &mut GameState, paused: bool) {
    state.paused = paused;
    state.emit(GameEvent::PauseToggled(paused));
    log::debug!("paused: {paused}");
}

fn hits(region: Option<Rect>, location: Option<Vec2>) -> bool {
    match (region, location) {
        (Some(region), Some(location)) => region.contains(location),
        _ => false,
    }
}
