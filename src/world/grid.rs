//! Square wall grid.
//!
//! Cell codes: `0` passable, `> 0` solid (the value doubles as a wall height
//! code), [`OUT_OF_BOUNDS`] for any query outside the grid. `get` is the
//! single source of truth for both collision checks and ray termination, so
//! world edges need no special-casing anywhere else.

use glam::{Vec2, vec2};
use rand::Rng;

/// Sentinel returned for queries outside `[0, size)` on either axis.
///
/// Deliberately distinct from both "empty" and "wall": movers may leave the
/// grid (`<= 0` is walkable) while rays shade nothing out there.
pub const OUT_OF_BOUNDS: i32 = -1;

/// Row-major `size * size` cell storage, immutable after generation.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// An all-empty grid of side length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell code at the (floored) world coordinates, or [`OUT_OF_BOUNDS`].
    #[inline]
    pub fn get(&self, x: f32, y: f32) -> i32 {
        let gx = x.floor();
        let gy = y.floor();
        let side = self.size as f32;
        if gx < 0.0 || gx >= side || gy < 0.0 || gy >= side {
            return OUT_OF_BOUNDS;
        }
        self.cells[gy as usize * self.size + gx as usize]
    }

    /// Overwrite one in-bounds cell. Generation-time helper only.
    pub fn set(&mut self, x: usize, y: usize, code: i32) {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = code;
        }
    }

    /// Fill every cell with a wall at independent probability `p`.
    pub fn randomize(&mut self, p: f64, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(p.clamp(0.0, 1.0)) { 1 } else { 0 };
        }
    }

    /// Empty the cells within Chebyshev `radius` of `(x, y)`.
    ///
    /// Used after [`randomize`](Self::randomize) so a run never starts with
    /// the player buried inside a wall.
    pub fn clear_area(&mut self, x: usize, y: usize, radius: usize) {
        if self.size == 0 {
            return;
        }
        let x0 = x.saturating_sub(radius);
        let y0 = y.saturating_sub(radius);
        for cy in y0..=(y + radius).min(self.size.saturating_sub(1)) {
            for cx in x0..=(x + radius).min(self.size.saturating_sub(1)) {
                self.cells[cy * self.size + cx] = 0;
            }
        }
    }

    /// Centre of a uniformly chosen empty cell, or `None` on a full grid.
    pub fn random_empty_cell(&self, rng: &mut impl Rng) -> Option<Vec2> {
        let empty: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i] == 0)
            .collect();
        if empty.is_empty() {
            return None;
        }
        let idx = empty[rng.gen_range(0..empty.len())];
        Some(vec2(
            (idx % self.size) as f32 + 0.5,
            (idx / self.size) as f32 + 0.5,
        ))
    }
}
