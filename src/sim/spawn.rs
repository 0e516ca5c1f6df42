//! Obstacle placement policy
//!
//! One draw per spawn: a half-gap `d` and a whole-pair vertical offset `o`,
//! both uniform. The pillar centers sit at `mid ± d + o` with the
//! collectible at mid-gap, so the gap width is `2d` regardless of offset.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Placement for one pillar pair and its collectible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleDescriptor {
    pub x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub collectible_y: f32,
}

/// Draw placement for the next obstacle
pub fn next_obstacle(
    rng: &mut Pcg32,
    tuning: &Tuning,
    spawn_x: f32,
    screen_height: f32,
) -> ObstacleDescriptor {
    let mid = screen_height / 2.0;
    let d = rng.random_range(tuning.gap_min..=tuning.gap_max);
    let o = rng.random_range(-tuning.offset_range..=tuning.offset_range);

    ObstacleDescriptor {
        x: spawn_x,
        top_y: mid + d + o,
        bottom_y: mid - d + o,
        collectible_y: mid + o,
    }
}
