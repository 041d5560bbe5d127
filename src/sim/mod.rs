//! Deterministic simulation module
//!
//! All sprite physics lives here. This module must be pure and deterministic:
//! - Per-frame steps only (no wall-clock time)
//! - Seeded RNG only
//! - Stable iteration order (by sprite index)
//! - No rendering or platform dependencies

pub mod field;
pub mod force;
pub mod profile;
pub mod sprite;
pub mod step;

pub use field::{Field, SurfaceSize};
pub use force::pointer_push;
pub use sprite::{Appearance, Sprite, SpriteKind};
pub use step::{Boundary, StepReport, advance};
