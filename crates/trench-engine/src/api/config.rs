use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;

/// Configuration for the engine, provided by the game and optionally
/// overridden from JSON by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels (default: 300).
    pub width: f32,
    /// Canvas height in pixels (default: 150).
    pub height: f32,
    /// Duration of the fade between slides in milliseconds (default: 500).
    pub fade_ms: f64,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Whether sound effects start enabled. Games usually ask first.
    pub sound_enabled: bool,
    /// Draw on-screen controls for touch devices.
    pub touch_controls: bool,
    /// Seed for the engine RNG. 0 lets the host pick one at startup.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 150.0,
            fade_ms: 500.0,
            max_sounds: 32,
            max_events: 32,
            sound_enabled: false,
            touch_controls: false,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the fields present in `json` onto this config.
    pub fn merge_json(&self, json: &str) -> Result<Self, EngineError> {
        let mut base = serde_json::to_value(self)?;
        let patch: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), Some(patch)) = (base.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                base.insert(key.clone(), value.clone());
            }
        } else {
            return Err(EngineError::InvalidConfig("expected a JSON object".into()));
        }
        let config: GameConfig = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes and durations the engine cannot work with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fade_ms > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "fade_ms must be positive, got {}",
                self.fade_ms
            )));
        }
        Ok(())
    }
}
