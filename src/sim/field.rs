//! Sprite field: a fixed-size population of one kind on one surface

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::profile;
use super::sprite::{Sprite, SpriteKind};
use crate::error::SurfaceError;

/// Pixel dimensions of a drawing surface. Always finite and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Result<Self, SurfaceError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SurfaceError::NonFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::ZeroArea { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// The owning collection of sprites for one effect.
///
/// The population is allocated once in the constructor; stepping only
/// rewrites records in place, so `len()` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    kind: SpriteKind,
    size: SurfaceSize,
    pub(crate) sprites: Vec<Sprite>,
    /// Last known pointer position (ambient only). `None` until the first event.
    pointer: Option<Vec2>,
    seed: u64,
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl Field {
    /// Create a field seeded from the thread RNG
    pub fn new(kind: SpriteKind, size: SurfaceSize, count: usize) -> Self {
        Self::with_seed(kind, size, count, rand::random())
    }

    /// Create a field with a fixed seed (reproducible runs)
    pub fn with_seed(kind: SpriteKind, size: SurfaceSize, count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sprites = (0..count).map(|_| profile::spawn(kind, size, &mut rng)).collect();
        Self {
            kind,
            size,
            sprites,
            pointer: None,
            seed,
            rng,
        }
    }

    pub fn kind(&self) -> SpriteKind {
        self.kind
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record the pointer in surface space. Last write before the next
    /// step wins. Ignored by kinds that don't track the pointer.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if self.kind.tracks_pointer() {
            self.pointer = Some(Vec2::new(x, y));
        }
    }

    /// Track a new surface size. Sprite positions are left as they are and
    /// get checked against the new bounds on the next step.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_surface_size_validation() {
        assert!(SurfaceSize::new(800.0, 600.0).is_ok());
        assert_eq!(
            SurfaceSize::new(0.0, 600.0),
            Err(SurfaceError::ZeroArea { width: 0.0, height: 600.0 })
        );
        assert!(matches!(SurfaceSize::new(800.0, -1.0), Err(SurfaceError::ZeroArea { .. })));
        assert_eq!(SurfaceSize::new(f32::NAN, 600.0), Err(SurfaceError::NonFinite));
        assert_eq!(SurfaceSize::new(800.0, f32::INFINITY), Err(SurfaceError::NonFinite));
    }

    #[test]
    fn test_field_has_requested_count() {
        for kind in SpriteKind::ALL {
            let field = Field::with_seed(kind, surface(), 42, 7);
            assert_eq!(field.len(), 42);
            assert!(field.sprites().iter().all(|s| s.kind == kind));
        }
        assert!(Field::with_seed(SpriteKind::Heart, surface(), 0, 7).is_empty());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Field::with_seed(SpriteKind::Confetti, surface(), 20, 99);
        let b = Field::with_seed(SpriteKind::Confetti, surface(), 20, 99);
        assert_eq!(a.seed(), 99);
        for (sa, sb) in a.sprites().iter().zip(b.sprites()) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.size, sb.size);
        }
    }

    #[test]
    fn test_pointer_only_for_ambient() {
        let mut ambient = Field::with_seed(SpriteKind::Ambient, surface(), 5, 1);
        assert_eq!(ambient.pointer(), None);
        ambient.set_pointer(10.0, 20.0);
        ambient.set_pointer(30.0, 40.0);
        assert_eq!(ambient.pointer(), Some(Vec2::new(30.0, 40.0)));

        let mut hearts = Field::with_seed(SpriteKind::Heart, surface(), 5, 1);
        hearts.set_pointer(10.0, 20.0);
        assert_eq!(hearts.pointer(), None);
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut field = Field::with_seed(SpriteKind::Ambient, surface(), 10, 3);
        let before: Vec<Vec2> = field.sprites().iter().map(|s| s.pos).collect();
        field.resize(SurfaceSize::new(200.0, 100.0).unwrap());
        assert_eq!(field.size().width, 200.0);
        let after: Vec<Vec2> = field.sprites().iter().map(|s| s.pos).collect();
        assert_eq!(before, after);
    }
}
