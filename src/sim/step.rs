//! Per-frame simulation step
//!
//! Advances every sprite of a field in index order. `dt` is measured in
//! reference frames (`FRAME_DT = 1.0`); each kind's increments are tuned for
//! one frame and scale linearly.

use super::field::{Field, SurfaceSize};
use super::force::pointer_push;
use super::profile;
use super::sprite::{Appearance, Sprite, SpriteKind};
use crate::consts::CONFETTI_LATERAL_GAIN;
use crate::{wrap_angle, wrap_hue};

/// What a boundary check did to a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Still inside its kind's live area
    Inside,
    /// Crossed an edge and re-entered at the opposite one (ambient)
    Wrapped,
    /// Position reset, everything else kept (confetti)
    Recycled,
    /// Replaced by a fresh sprite (hearts)
    Respawned,
}

/// Counts of boundary events in one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub wrapped: usize,
    pub recycled: usize,
    pub respawned: usize,
}

impl StepReport {
    fn record(&mut self, boundary: Boundary) {
        match boundary {
            Boundary::Inside => {}
            Boundary::Wrapped => self.wrapped += 1,
            Boundary::Recycled => self.recycled += 1,
            Boundary::Respawned => self.respawned += 1,
        }
    }
}

/// Advance the field by `dt` frames
pub fn advance(field: &mut Field, dt: f32) -> StepReport {
    let size = field.size();
    let pointer = field.pointer();
    let mut report = StepReport::default();

    let Field { sprites, rng, .. } = field;
    for sprite in sprites.iter_mut() {
        let boundary = match sprite.kind {
            SpriteKind::Ambient => {
                let boundary = step_ambient(sprite, size, dt);
                if let Some(pointer) = pointer {
                    sprite.vel += pointer_push(sprite.pos, pointer) * dt;
                }
                boundary
            }
            SpriteKind::Confetti => {
                step_confetti(sprite, dt);
                if sprite.pos.y > size.height {
                    profile::recycle_confetti(sprite, size, rng);
                    Boundary::Recycled
                } else {
                    Boundary::Inside
                }
            }
            SpriteKind::Heart => {
                step_heart(sprite, dt);
                if sprite.pos.y < -sprite.size {
                    *sprite = profile::spawn(SpriteKind::Heart, size, rng);
                    Boundary::Respawned
                } else {
                    Boundary::Inside
                }
            }
        };
        report.record(boundary);
    }

    report
}

/// Drift, cycle hue, wrap toroidally
fn step_ambient(sprite: &mut Sprite, size: SurfaceSize, dt: f32) -> Boundary {
    sprite.pos += sprite.vel * dt;

    if let Appearance::Hue { hue, speed } = &mut sprite.appearance {
        *hue = wrap_hue(*hue + *speed * dt);
    }

    let mut boundary = Boundary::Inside;
    if sprite.pos.x > size.width {
        sprite.pos.x = 0.0;
        boundary = Boundary::Wrapped;
    } else if sprite.pos.x < 0.0 {
        sprite.pos.x = size.width;
        boundary = Boundary::Wrapped;
    }
    if sprite.pos.y > size.height {
        sprite.pos.y = 0.0;
        boundary = Boundary::Wrapped;
    } else if sprite.pos.y < 0.0 {
        sprite.pos.y = size.height;
        boundary = Boundary::Wrapped;
    }
    boundary
}

/// Fall, drift sideways, spin
fn step_confetti(sprite: &mut Sprite, dt: f32) {
    sprite.pos.y += sprite.speed() * dt;
    sprite.pos.x += sprite.drift_angle.sin() * CONFETTI_LATERAL_GAIN * dt;
    sprite.rotation = wrap_angle(sprite.rotation + sprite.rotation_speed * dt);
}

/// Rise, spin
fn step_heart(sprite: &mut Sprite, dt: f32) {
    sprite.pos.y -= sprite.speed() * dt;
    sprite.rotation = wrap_angle(sprite.rotation + sprite.rotation_speed * dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_ambient_stays_on_surface() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 60, 12345);
        for _ in 0..1000 {
            advance(&mut field, FRAME_DT);
            assert_eq!(field.len(), 60);
        }
        for sprite in field.sprites() {
            assert!(surface().contains(sprite.pos), "escaped: {:?}", sprite.pos);
            let hue = sprite.hue().unwrap();
            assert!((0.0..360.0).contains(&hue));
            assert!((0.0..=1.0).contains(&sprite.opacity));
        }
    }

    #[test]
    fn test_ambient_wraps_to_opposite_edge() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 1, 1);
        {
            let s = &mut field.sprites[0];
            s.pos = Vec2::new(799.99, 300.0);
            s.vel = Vec2::new(0.05, 0.0);
        }
        let report = advance(&mut field, FRAME_DT);
        assert_eq!(report.wrapped, 1);
        assert_eq!(field.sprites()[0].pos.x, 0.0);

        {
            let s = &mut field.sprites[0];
            s.pos = Vec2::new(400.0, 0.01);
            s.vel = Vec2::new(0.0, -0.05);
        }
        advance(&mut field, FRAME_DT);
        assert_eq!(field.sprites()[0].pos.y, 600.0);
    }

    #[test]
    fn test_hue_wraps_after_many_steps() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 4, 5);
        for (i, sprite) in field.sprites.iter_mut().enumerate() {
            let speed = if i % 2 == 0 { 7.3 } else { -11.1 };
            sprite.appearance = Appearance::Hue { hue: 359.0, speed };
        }
        for _ in 0..10_000 {
            advance(&mut field, FRAME_DT);
        }
        for sprite in field.sprites() {
            let hue = sprite.hue().unwrap();
            assert!((0.0..360.0).contains(&hue), "hue out of range: {hue}");
        }
    }

    #[test]
    fn test_pointer_pushes_nearby_sprite_only() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 2, 9);
        field.sprites[0].pos = Vec2::new(100.0, 100.0);
        field.sprites[0].vel = Vec2::ZERO;
        field.sprites[1].pos = Vec2::new(500.0, 500.0);
        field.sprites[1].vel = Vec2::ZERO;
        field.set_pointer(120.0, 100.0);

        advance(&mut field, FRAME_DT);
        assert!(field.sprites()[0].vel.x < 0.0, "pushed away from pointer");
        assert_eq!(field.sprites()[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_no_pointer_no_force() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 1, 9);
        field.sprites[0].pos = Vec2::new(1.0, 1.0);
        let vel = field.sprites[0].vel;
        advance(&mut field, FRAME_DT);
        assert_eq!(field.sprites()[0].vel, vel);
    }

    #[test]
    fn test_confetti_falls_and_recycles() {
        let mut field = Field::with_seed(SpriteKind::Confetti, surface(), 150, 2024);
        let originals: Vec<Sprite> = field.sprites().to_vec();
        let mut last_y: Vec<f32> = originals.iter().map(|s| s.pos.y).collect();
        let mut recycled_seen = 0;

        for _ in 0..600 {
            let report = advance(&mut field, FRAME_DT);
            recycled_seen += report.recycled;
            for (i, sprite) in field.sprites().iter().enumerate() {
                if sprite.pos.y < last_y[i] {
                    // Recycle event: only position changed
                    assert!((-30.0..=-10.0).contains(&sprite.pos.y));
                    assert!((0.0..800.0).contains(&sprite.pos.x));
                    assert_eq!(sprite.size, originals[i].size);
                    assert_eq!(sprite.rotation_speed, originals[i].rotation_speed);
                    assert_eq!(sprite.appearance, originals[i].appearance);
                    assert_eq!(sprite.vel, originals[i].vel);
                }
                last_y[i] = sprite.pos.y;
            }
        }
        assert!(recycled_seen > 0);
        assert_eq!(field.len(), 150);
    }

    #[test]
    fn test_confetti_drift_and_spin() {
        let mut field = Field::with_seed(SpriteKind::Confetti, surface(), 1, 3);
        {
            let s = &mut field.sprites[0];
            s.pos = Vec2::new(400.0, 100.0);
            s.vel = Vec2::new(0.0, 3.0);
            s.drift_angle = std::f32::consts::FRAC_PI_2;
            s.rotation = 0.0;
            s.rotation_speed = 0.05;
        }
        advance(&mut field, FRAME_DT);
        let s = &field.sprites()[0];
        assert!((s.pos.y - 103.0).abs() < 1e-4);
        assert!((s.pos.x - 402.0).abs() < 1e-4);
        assert!((s.rotation - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_hearts_stay_in_band() {
        let size = surface();
        let mut field = Field::with_seed(SpriteKind::Heart, size, 15, 77);
        let mut respawns = 0;
        for _ in 0..3000 {
            respawns += advance(&mut field, FRAME_DT).respawned;
            for s in field.sprites() {
                assert!(s.pos.y >= -s.size, "above band: {} < {}", s.pos.y, -s.size);
                assert!(s.pos.y <= size.height + HEART_SPAWN_DEPTH);
            }
        }
        assert!(respawns > 0);
        assert_eq!(field.len(), 15);
    }

    #[test]
    fn test_heart_full_respawn() {
        let mut field = Field::with_seed(SpriteKind::Heart, surface(), 1, 8);
        {
            let s = &mut field.sprites[0];
            s.pos = Vec2::new(10.0, -s.size + 0.1);
            s.vel = Vec2::new(0.0, -1.0);
        }
        let before = field.sprites()[0].clone();
        let report = advance(&mut field, FRAME_DT);
        assert_eq!(report.respawned, 1);
        let after = &field.sprites()[0];
        assert!(after.pos.y >= 600.0);
        assert_ne!(after.size, before.size);
        assert_ne!(after.vel, before.vel);
    }

    #[test]
    fn test_dt_scales_step() {
        let mut a = Field::with_seed(SpriteKind::Heart, surface(), 3, 4);
        let mut b = a.clone();
        advance(&mut a, 2.0 * FRAME_DT);
        advance(&mut b, FRAME_DT);
        advance(&mut b, FRAME_DT);
        for (sa, sb) in a.sprites().iter().zip(b.sprites()) {
            assert!((sa.pos.y - sb.pos.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_resize_applies_on_next_step() {
        let mut field = Field::with_seed(SpriteKind::Confetti, surface(), 1, 6);
        field.sprites[0].pos = Vec2::new(100.0, 300.0);
        field.resize(SurfaceSize::new(800.0, 200.0).unwrap());
        let report = advance(&mut field, FRAME_DT);
        assert_eq!(report.recycled, 1);
        assert_eq!(field.sprites()[0].pos.y, CONFETTI_RESPAWN_Y);
    }
}
