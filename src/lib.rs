//! Sprite Field - canvas sprite animation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprite state, kind profiles, stepping)
//! - `renderer`: Drawing surface abstraction and per-kind shape drawing
//! - `platform`: Frame loop driver and browser glue
//! - `settings`: Quality preset and per-effect toggles

pub mod color;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SurfaceError;
pub use settings::{QualityPreset, Settings};
pub use sim::{Field, Sprite, SpriteKind, SurfaceSize, advance};

/// Engine configuration constants
pub mod consts {
    /// One reference frame. Step magnitudes are tuned per frame, not per second.
    pub const FRAME_DT: f32 = 1.0;

    /// Pointer influence radius for ambient particles
    pub const POINTER_RADIUS: f32 = 80.0;
    /// Velocity gain applied at the centre of the influence radius
    pub const POINTER_GAIN: f32 = 0.01;

    /// Ambient: one particle per this many pixels of width, capped
    pub const AMBIENT_WIDTH_PER_SPRITE: f32 = 30.0;
    pub const AMBIENT_MAX_COUNT: usize = 60;
    pub const CONFETTI_COUNT: usize = 150;
    pub const HEART_COUNT: usize = 15;

    /// Confetti re-enters this far above the top edge
    pub const CONFETTI_RESPAWN_Y: f32 = -20.0;
    /// Horizontal drift amplitude for confetti (pixels per frame)
    pub const CONFETTI_LATERAL_GAIN: f32 = 2.0;
    /// Hearts spawn up to this far below the bottom edge
    pub const HEART_SPAWN_DEPTH: f32 = 100.0;
    /// Heart path is authored in a 30-unit box
    pub const HEART_PATH_UNITS: f32 = 30.0;
}

/// Wrap a hue angle into [0, 360)
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}
