//! Sprite state and kind tags
//!
//! Everything a field needs to simulate and draw one sprite lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::{Paint, Rgb};
use crate::consts::*;

/// Which effect a sprite belongs to. Drives shape, boundary rule and
/// respawn policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    /// Slow drifting dots, hue-cycling, pushed away by the pointer
    Ambient,
    /// Rotating squares falling from the top edge
    Confetti,
    /// Rotating hearts rising from below the bottom edge
    Heart,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 3] = [SpriteKind::Ambient, SpriteKind::Confetti, SpriteKind::Heart];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKind::Ambient => "ambient",
            SpriteKind::Confetti => "confetti",
            SpriteKind::Heart => "hearts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ambient" | "particles" => Some(SpriteKind::Ambient),
            "confetti" => Some(SpriteKind::Confetti),
            "hearts" | "heart" => Some(SpriteKind::Heart),
            _ => None,
        }
    }

    /// Initial population for a surface of the given width.
    /// Ambient fields thin out on narrow viewports.
    pub fn default_count(&self, width: f32) -> usize {
        match self {
            SpriteKind::Ambient => {
                let by_width = (width.max(0.0) / AMBIENT_WIDTH_PER_SPRITE).floor() as usize;
                by_width.min(AMBIENT_MAX_COUNT)
            }
            SpriteKind::Confetti => CONFETTI_COUNT,
            SpriteKind::Heart => HEART_COUNT,
        }
    }

    /// Whether pointer input affects this kind
    pub fn tracks_pointer(&self) -> bool {
        matches!(self, SpriteKind::Ambient)
    }
}

/// How a sprite is colored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Appearance {
    /// Fixed color for the sprite's whole life
    Fixed(Rgb),
    /// Continuously advancing hue, always in [0, 360)
    Hue { hue: f32, speed: f32 },
}

impl Appearance {
    /// Fill for the current frame. Hue sprites carry their opacity in the
    /// fill; fixed colors rely on the surface's global alpha.
    pub fn paint(&self, opacity: f32) -> Paint {
        match *self {
            Appearance::Fixed(rgb) => Paint::Solid(rgb),
            Appearance::Hue { hue, .. } => Paint::Hsla { hue, alpha: opacity },
        }
    }
}

/// One simulated visual element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Per-frame displacement. Confetti and hearts keep their fall/rise speed in `vel.y`.
    pub vel: Vec2,
    pub size: f32,
    /// Radians. Always 0 for ambient particles.
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Confetti only: fixed phase for the sideways drift
    pub drift_angle: f32,
    /// In [0, 1]
    pub opacity: f32,
    pub appearance: Appearance,
}

impl Sprite {
    /// Fall (confetti) or rise (heart) speed, always non-negative
    pub fn speed(&self) -> f32 {
        self.vel.y.abs()
    }

    pub fn hue(&self) -> Option<f32> {
        match self.appearance {
            Appearance::Hue { hue, .. } => Some(hue),
            Appearance::Fixed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(SpriteKind::from_str("particles"), Some(SpriteKind::Ambient));
        assert_eq!(SpriteKind::from_str("Confetti"), Some(SpriteKind::Confetti));
        assert_eq!(SpriteKind::from_str("heart"), Some(SpriteKind::Heart));
        assert_eq!(SpriteKind::from_str("snow"), None);
        for kind in SpriteKind::ALL {
            assert_eq!(SpriteKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_default_counts() {
        assert_eq!(SpriteKind::Ambient.default_count(1920.0), 60);
        assert_eq!(SpriteKind::Ambient.default_count(375.0), 12);
        assert_eq!(SpriteKind::Ambient.default_count(0.0), 0);
        assert_eq!(SpriteKind::Confetti.default_count(375.0), 150);
        assert_eq!(SpriteKind::Heart.default_count(1920.0), 15);
    }

    #[test]
    fn test_only_ambient_tracks_pointer() {
        assert!(SpriteKind::Ambient.tracks_pointer());
        assert!(!SpriteKind::Confetti.tracks_pointer());
        assert!(!SpriteKind::Heart.tracks_pointer());
    }
}
