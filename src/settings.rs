//! Effect settings and preferences
//!
//! Persisted in LocalStorage on wasm32; defaults everywhere else.

use serde::{Deserialize, Serialize};

use crate::sim::SpriteKind;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Multiplier applied to each kind's default sprite count
    pub fn density(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.5,
            QualityPreset::Medium => 1.0,
            QualityPreset::High => 1.5,
        }
    }
}

/// Effect settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sprite density preset
    pub quality: QualityPreset,

    // === Effects ===
    /// Drifting background particles
    pub ambient: bool,
    /// Falling confetti
    pub confetti: bool,
    /// Rising hearts
    pub hearts: bool,

    // === Accessibility ===
    /// Reduced motion (no animated fields at all)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            // Effects - all on by default
            ambient: true,
            confetti: true,
            hearts: true,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Whether a kind should animate at all
    pub fn kind_enabled(&self, kind: SpriteKind) -> bool {
        if self.reduced_motion {
            return false;
        }
        match kind {
            SpriteKind::Ambient => self.ambient,
            SpriteKind::Confetti => self.confetti,
            SpriteKind::Heart => self.hearts,
        }
    }

    /// Effective sprite count for a kind on a surface of `width` pixels
    pub fn sprite_count(&self, kind: SpriteKind, width: f32) -> usize {
        if !self.kind_enabled(kind) {
            return 0;
        }
        (kind.default_count(width) as f32 * self.quality.density()).floor() as usize
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse stored settings. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "sprite_field_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only). `false` if nothing was
    /// written.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> bool {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        let Some(storage) = storage else {
            return false;
        };

        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return false;
            }
        };
        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::warn!("Failed to save settings: {:?}", e);
                false
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
