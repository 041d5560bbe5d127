//! Kind profiles: the randomization ranges each sprite kind spawns from
//!
//! Every draw is uniform over a half-open range. Ranges were tuned per frame
//! at ~60 Hz.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::field::SurfaceSize;
use super::sprite::{Appearance, Sprite, SpriteKind};
use crate::color::{CONFETTI_PALETTE, HEART_COLOR};
use crate::consts::*;

/// Spawn a freshly randomized sprite of `kind` on a surface of `size`
pub fn spawn<R: Rng>(kind: SpriteKind, size: SurfaceSize, rng: &mut R) -> Sprite {
    match kind {
        SpriteKind::Ambient => spawn_ambient(size, rng),
        SpriteKind::Confetti => spawn_confetti(size, rng),
        SpriteKind::Heart => spawn_heart(size, rng),
    }
}

fn spawn_ambient<R: Rng>(size: SurfaceSize, rng: &mut R) -> Sprite {
    Sprite {
        kind: SpriteKind::Ambient,
        pos: Vec2::new(rng.random_range(0.0..size.width), rng.random_range(0.0..size.height)),
        vel: Vec2::new(rng.random_range(-0.05..0.05), rng.random_range(-0.05..0.05)),
        size: rng.random_range(1.0..5.0),
        rotation: 0.0,
        rotation_speed: 0.0,
        drift_angle: 0.0,
        opacity: rng.random_range(0.2..0.6),
        appearance: Appearance::Hue {
            hue: rng.random_range(0.0..360.0),
            speed: rng.random_range(-0.05..0.05),
        },
    }
}

fn spawn_confetti<R: Rng>(size: SurfaceSize, rng: &mut R) -> Sprite {
    let color = CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())];
    Sprite {
        kind: SpriteKind::Confetti,
        pos: Vec2::new(rng.random_range(0.0..size.width), CONFETTI_RESPAWN_Y),
        vel: Vec2::new(0.0, rng.random_range(2.0..5.0)),
        size: rng.random_range(5.0..15.0),
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng.random_range(-0.1..0.1),
        drift_angle: rng.random_range(0.0..TAU),
        opacity: 1.0,
        appearance: Appearance::Fixed(color),
    }
}

fn spawn_heart<R: Rng>(size: SurfaceSize, rng: &mut R) -> Sprite {
    Sprite {
        kind: SpriteKind::Heart,
        pos: Vec2::new(
            rng.random_range(0.0..size.width),
            size.height + rng.random_range(0.0..HEART_SPAWN_DEPTH),
        ),
        vel: Vec2::new(0.0, -rng.random_range(0.5..1.5)),
        size: rng.random_range(10.0..30.0),
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng.random_range(-0.01..0.01),
        drift_angle: 0.0,
        opacity: rng.random_range(0.3..0.8),
        appearance: Appearance::Fixed(HEART_COLOR),
    }
}

/// Confetti recycle: back above the top edge at a new column.
/// Size, speed, color and spin are kept.
pub fn recycle_confetti<R: Rng>(sprite: &mut Sprite, size: SurfaceSize, rng: &mut R) {
    sprite.pos = Vec2::new(rng.random_range(0.0..size.width), CONFETTI_RESPAWN_Y);
}
