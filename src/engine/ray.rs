//! Grid DDA ray marcher.
//!
//! A ray is walked from grid line to grid line: at every step the crossing
//! of the next x-integer line and the next y-integer line are computed
//! independently and the nearer one (squared length) becomes the next
//! sample. Marching does **not** stop at the first wall – the rain overlay
//! wants samples behind the hit – only at the range cutoff.
//!
//! The walk is an explicit loop into a caller-owned `Vec`, reused across
//! columns, so the hot loop allocates nothing once warm.

use glam::{Vec2, vec2};

use crate::world::Grid;

/// One ray/grid-line intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Crossing point in world units.
    pub pos: Vec2,
    /// Cell code just past the crossed line (0 empty, >0 wall, −1 outside).
    pub cell: i32,
    /// Cumulative Euclidean distance from the ray origin.
    pub distance: f32,
    /// Darkening offset: 0 and 1 for the two "lit" facings, 2 for far-side
    /// facings. Added to the distance by the shading pass.
    pub shading: f32,
    /// Fractional wall-face coordinate in `[0, 1)` for texture sampling.
    pub offset: f32,
    /// Squared length of this segment; used for the crossing tie-break.
    pub length2: f32,
}

impl Sample {
    fn origin(pos: Vec2) -> Self {
        Self {
            pos,
            cell: 0,
            distance: 0.0,
            shading: 0.0,
            offset: 0.0,
            length2: 0.0,
        }
    }
}

/// Candidate crossing of one grid-line family.
struct Crossing {
    pos: Vec2,
    length2: f32,
}

/// March a ray from `origin` at `angle`, appending samples into `out`.
///
/// `out` is cleared first. The origin sample (distance 0) is always
/// emitted, even when the origin cell itself is solid; the last sample is
/// the first whose distance reaches `range` (so `range = 0` yields the
/// origin alone). Geometry consumes no randomness: identical inputs always
/// produce identical sequences.
pub fn cast_into(grid: &Grid, origin: Vec2, angle: f32, range: f32, out: &mut Vec<Sample>) {
    let (sin, cos) = angle.sin_cos();
    out.clear();
    let mut cur = Sample::origin(origin);
    out.push(cur);
    while cur.distance < range {
        cur = next_sample(grid, &cur, sin, cos);
        out.push(cur);
    }
}

/// Convenience wrapper allocating a fresh sequence. Hot paths use
/// [`cast_into`].
pub fn cast(grid: &Grid, origin: Vec2, angle: f32, range: f32) -> Vec<Sample> {
    let mut out = Vec::new();
    cast_into(grid, origin, angle, range, &mut out);
    out
}

fn next_sample(grid: &Grid, from: &Sample, sin: f32, cos: f32) -> Sample {
    let step_x = axis_step(sin, cos, from.pos.x, from.pos.y, false);
    let step_y = axis_step(cos, sin, from.pos.y, from.pos.x, true);
    // exact ties go to the x-line branch
    if step_x.length2 <= step_y.length2 {
        inspect_x_line(grid, step_x, from.distance, cos)
    } else {
        inspect_y_line(grid, step_y, from.distance, sin)
    }
}

/// Crossing with the next integer line of one axis.
///
/// `run` is the ray component along the stepped axis, `rise` the other one.
/// A zero `run` never crosses that line family (infinite candidate).
fn axis_step(rise: f32, run: f32, x: f32, y: f32, inverted: bool) -> Crossing {
    if run == 0.0 {
        return Crossing {
            pos: Vec2::ZERO,
            length2: f32::INFINITY,
        };
    }
    let dx = if run > 0.0 {
        (x + 1.0).floor() - x
    } else {
        (x - 1.0).ceil() - x
    };
    let dy = dx * rise / run;
    Crossing {
        pos: if inverted {
            vec2(y + dy, x + dx)
        } else {
            vec2(x + dx, y + dy)
        },
        length2: dx * dx + dy * dy,
    }
}

fn inspect_x_line(grid: &Grid, c: Crossing, prior: f32, cos: f32) -> Sample {
    // approaching from +x looks at the cell left of the line
    let shift = if cos < 0.0 { 1.0 } else { 0.0 };
    Sample {
        pos: c.pos,
        cell: grid.get(c.pos.x - shift, c.pos.y),
        distance: prior + c.length2.sqrt(),
        shading: if cos < 0.0 { 2.0 } else { 0.0 },
        offset: c.pos.y.rem_euclid(1.0),
        length2: c.length2,
    }
}

fn inspect_y_line(grid: &Grid, c: Crossing, prior: f32, sin: f32) -> Sample {
    let shift = if sin < 0.0 { 1.0 } else { 0.0 };
    Sample {
        pos: c.pos,
        cell: grid.get(c.pos.x, c.pos.y - shift),
        distance: prior + c.length2.sqrt(),
        shading: if sin < 0.0 { 2.0 } else { 1.0 },
        offset: c.pos.x.rem_euclid(1.0),
        length2: c.length2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_is_deterministic() {
        let mut grid = Grid::new(8);
        grid.set(3, 3, 1);
        let a = cast(&grid, vec2(1.3, 2.7), 0.4, 10.0);
        let b = cast(&grid, vec2(1.3, 2.7), 0.4, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn distances_are_non_decreasing_and_reach_range() {
        let grid = Grid::new(8);
        let ray = cast(&grid, vec2(4.2, 4.8), 1.1, 6.0);
        for pair in ray.windows(2) {
            assert!(pair[1].distance >= pair[0].distance);
        }
        let last = ray.last().unwrap();
        assert!(last.distance >= 6.0, "terminated at {}", last.distance);
        // every earlier sample is still inside the range
        assert!(ray[ray.len() - 2].distance < 6.0);
    }

    #[test]
    fn zero_range_yields_the_origin_sample_alone() {
        let grid = Grid::new(8);
        let ray = cast(&grid, vec2(2.5, 2.5), 0.7, 0.0);
        assert_eq!(ray.len(), 1);
        assert_eq!(ray[0].distance, 0.0);
        assert_eq!(ray[0].pos, vec2(2.5, 2.5));
    }

    #[test]
    fn origin_sample_is_emitted_even_inside_a_wall() {
        let mut grid = Grid::new(4);
        grid.set(1, 1, 1);
        let ray = cast(&grid, vec2(1.5, 1.5), 0.0, 3.0);
        assert_eq!(ray[0].distance, 0.0);
        assert_eq!(ray[0].cell, 0); // the origin sample carries no wall code
    }

    #[test]
    fn wall_in_the_next_cell_is_reported_at_its_line() {
        // 3×3 grid, single wall; cast straight along the wall's row
        let mut grid = Grid::new(3);
        grid.set(1, 1, 1);
        let ray = cast(&grid, vec2(0.5, 1.5), 0.0, 5.0);
        let hit = ray
            .iter()
            .find(|s| s.cell > 0)
            .expect("wall should be sampled");
        assert!((hit.pos.x - 1.0).abs() < 1e-5);
        assert!(hit.distance <= 5.0);
        assert_eq!(hit.cell, 1);
    }

    #[test]
    fn facing_decides_the_shading_class() {
        let mut grid = Grid::new(5);
        grid.set(3, 2, 1);
        // hit from the west: x-line crossed travelling +x
        let east = cast(&grid, vec2(2.5, 2.5), 0.0, 4.0);
        let hit = east.iter().find(|s| s.cell > 0).unwrap();
        assert_eq!(hit.shading, 0.0);
        // hit from the east: same wall, far-face class
        let west = cast(&grid, vec2(4.5, 2.5), std::f32::consts::PI, 4.0);
        let hit = west.iter().find(|s| s.cell > 0).unwrap();
        assert_eq!(hit.shading, 2.0);
        // hit from the north travelling +y
        let south = cast(&grid, vec2(3.5, 1.5), std::f32::consts::FRAC_PI_2, 4.0);
        let hit = south.iter().find(|s| s.cell > 0).unwrap();
        assert_eq!(hit.shading, 1.0);
    }

    #[test]
    fn offsets_stay_in_the_unit_interval() {
        let grid = Grid::new(8);
        for angle in [0.3f32, 1.9, 3.6, 5.1] {
            for s in cast(&grid, vec2(3.3, 4.6), angle, 8.0) {
                assert!((0.0..1.0).contains(&s.offset), "offset {}", s.offset);
            }
        }
    }

    #[test]
    fn axis_aligned_ray_never_crosses_parallel_lines() {
        let grid = Grid::new(8);
        // straight east: every crossing is an x-integer line at constant y
        let ray = cast(&grid, vec2(1.5, 3.5), 0.0, 4.0);
        for s in &ray[1..] {
            assert!((s.pos.x - s.pos.x.round()).abs() < 1e-5);
            assert!((s.pos.y - 3.5).abs() < 1e-5);
        }
        // consecutive crossings are one cell apart
        assert!((ray[2].distance - ray[1].distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn marching_continues_behind_the_first_wall() {
        let mut grid = Grid::new(8);
        grid.set(3, 3, 1);
        let ray = cast(&grid, vec2(1.5, 3.5), 0.0, 6.0);
        let hit_idx = ray.iter().position(|s| s.cell > 0).unwrap();
        assert!(
            hit_idx + 1 < ray.len(),
            "samples behind the hit feed the rain overlay"
        );
    }

    #[test]
    fn rays_leaving_the_grid_sample_the_sentinel() {
        let grid = Grid::new(3);
        let ray = cast(&grid, vec2(1.5, 1.5), 0.0, 6.0);
        assert!(ray.iter().any(|s| s.cell == crate::world::OUT_OF_BOUNDS));
    }
}
