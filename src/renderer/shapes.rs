//! Shape routines for the three sprite kinds

use glam::Vec2;

use super::surface::DrawSurface;
use crate::color::Paint;
use crate::consts::HEART_PATH_UNITS;

/// Heart outline in a 30-unit box: two cubic lobes meeting at the bottom
/// tip (0, 10) and the top notch (0, 0). Each entry is (control1, control2, end).
pub const HEART_PATH: [(Vec2, Vec2, Vec2); 2] = [
    (Vec2::new(-10.0, -10.0), Vec2::new(-15.0, 0.0), Vec2::new(0.0, 10.0)),
    (Vec2::new(15.0, 0.0), Vec2::new(10.0, -10.0), Vec2::new(0.0, 0.0)),
];

/// Filled circle
pub fn dot<S: DrawSurface + ?Sized>(surface: &mut S, center: Vec2, radius: f32, paint: &Paint) {
    surface.begin_path();
    surface.circle(center, radius);
    surface.set_fill(paint);
    surface.fill();
}

/// Filled square of side `size`, rotated about its center
pub fn square<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Vec2,
    size: f32,
    rotation: f32,
    paint: &Paint,
) {
    surface.save();
    surface.translate(center);
    surface.rotate(rotation);
    surface.set_fill(paint);
    surface.fill_rect(Vec2::splat(-size / 2.0), Vec2::splat(size));
    surface.restore();
}

/// Filled heart scaled so `size` maps onto the path's 30-unit box
pub fn heart<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Vec2,
    size: f32,
    rotation: f32,
    paint: &Paint,
) {
    surface.save();
    surface.translate(center);
    surface.rotate(rotation);
    surface.scale(size / HEART_PATH_UNITS);

    surface.begin_path();
    surface.move_to(Vec2::ZERO);
    for (c1, c2, end) in HEART_PATH {
        surface.bezier_to(c1, c2, end);
    }
    surface.set_fill(paint);
    surface.fill();

    surface.restore();
}
