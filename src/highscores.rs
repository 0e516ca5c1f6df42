//! High score persistence
//!
//! A single best score, stored as a JSON envelope under a fixed key
//! (LocalStorage in browsers, in-memory on native). The session talks to
//! storage through the narrow [`ScoreStore`] trait; an absent or unreadable
//! record reads as 0.

use serde::{Deserialize, Serialize};

/// Key-value persistence surface the session proposes updates through
pub trait ScoreStore {
    /// Best score on record; 0 when nothing is stored
    fn high_score(&self) -> u32;
    /// Record a new best. Implementations keep the stored value monotonic.
    fn set_high_score(&mut self, score: u32);
}

/// Persisted best score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    best: u32,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fluppy_cat_highscore";

    /// Create an empty store
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Load the stored best from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("loaded high score {}", scores.best);
                    return scores;
                }
            }
        }

        log::info!("no stored high score, starting at 0");
        Self::new()
    }

    /// Save the best to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("high score saved ({})", self.best);
            }
        }
    }

    /// Native stubs: the store lives for the process only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {}
}

impl ScoreStore for HighScores {
    fn high_score(&self) -> u32 {
        self.best
    }

    fn set_high_score(&mut self, score: u32) {
        // The stored best never regresses
        if score > self.best {
            self.best = score;
            self.save();
        }
    }
}
