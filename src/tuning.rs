//! Data-driven game balance
//!
//! The numbers that shape a run, kept out of the code so hosts can override
//! them from a JSON blob. Defaults reproduce the original game feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Balance constants for one session
///
/// Deserialization fills missing fields from the defaults, so a host
/// override only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Impulse applied to the bird per flap
    pub flap_impulse: Vec2,
    /// Seconds between obstacle spawns
    pub spawn_delay: f32,
    /// Horizontal obstacle speed (points/sec)
    pub pillar_speed: f32,
    /// Background scroll speed (points per tick)
    pub background_speed: f32,
    /// Half vertical pillar gap, lower bound (points)
    pub gap_min: f32,
    /// Half vertical pillar gap, upper bound (points)
    pub gap_max: f32,
    /// Whole-pair vertical jitter, drawn from ±this (points)
    pub offset_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flap_impulse: Vec2::new(0.0, 40.0),
            spawn_delay: 1.5,
            pillar_speed: 125.0,
            background_speed: 2.0,
            gap_min: 390.0,
            gap_max: 400.0,
            offset_range: 200.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for storage or transmission to a host
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_feel() {
        let tuning = Tuning::default();
        assert_eq!(tuning.flap_impulse, Vec2::new(0.0, 40.0));
        assert_eq!(tuning.spawn_delay, 1.5);
        assert_eq!(tuning.background_speed, 2.0);
        assert_eq!(tuning.gap_min, 390.0);
        assert_eq!(tuning.gap_max, 400.0);
        assert_eq!(tuning.offset_range, 200.0);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"spawn_delay": 2.0}"#).unwrap();
        assert_eq!(tuning.spawn_delay, 2.0);
        assert_eq!(tuning.gap_min, Tuning::default().gap_min);
        assert_eq!(tuning.flap_impulse, Tuning::default().flap_impulse);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
