//! Axis-separated movement shared by every mover.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::world::Grid;

/// Advance `pos` by `distance` along `direction`, testing each axis
/// independently against the **pre-move** position.
///
/// A blocked axis is simply dropped while the other may still commit,
/// which is what lets a mover slide along a wall instead of sticking when
/// pushing into it diagonally. Anything `<= 0` (empty or outside the grid)
/// is walkable.
pub fn walk(pos: &mut Vec2, direction: f32, distance: f32, grid: &Grid) {
    let dx = direction.cos() * distance;
    let dy = direction.sin() * distance;
    let (x, y) = (pos.x, pos.y);
    if grid.get(x + dx, y) <= 0 {
        pos.x = x + dx;
    }
    if grid.get(x, y + dy) <= 0 {
        pos.y = y + dy;
    }
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}
