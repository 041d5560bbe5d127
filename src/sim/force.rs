//! Pointer proximity force for ambient particles

use glam::Vec2;

use crate::consts::{POINTER_GAIN, POINTER_RADIUS};

/// Velocity nudge for a sprite at `pos` with the pointer at `pointer`.
///
/// Points away from the pointer, scaled linearly from `POINTER_GAIN` at
/// distance 0 down to zero at `POINTER_RADIUS` and beyond. At distance 0 the
/// direction is undefined; atan2(0, 0) = 0 so the push goes along -x.
pub fn pointer_push(pos: Vec2, pointer: Vec2) -> Vec2 {
    let d = pointer - pos;
    let distance = d.length();
    if distance >= POINTER_RADIUS {
        return Vec2::ZERO;
    }

    let angle = d.y.atan2(d.x);
    let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
    -Vec2::new(angle.cos(), angle.sin()) * force * POINTER_GAIN
}
