//! One vertical screen column: wall slice, darkening overlay, rain streaks.

use rand::Rng;

use crate::engine::ray::Sample;
use crate::renderer::{BLACK, Style, Surface, WHITE};
use crate::world::{Camera, Texture};

/// Streak opacity; low enough that draw order barely matters.
const RAIN: Style = Style::tint(WHITE, 0.15);
/// World-unit height of the band a streak may fall within.
const RAIN_BAND: f32 = 0.1;

/// Draw one screen column from its ray sequence.
///
/// Samples are walked farthest to nearest. Each traversed cell sheds a
/// pseudo-random number of streaks biased by its index, so depth reads as
/// rain density; the nearest solid sample gets the textured wall slice and
/// the flat distance/facing darkening on top.
///
/// Column pixel extents are `floor(column * spacing)` wide `ceil(spacing)`:
/// rounding may overlap neighbours but never leaves a gap.
#[allow(clippy::too_many_arguments)]
pub fn draw_column<S: Surface, R: Rng>(
    surface: &mut S,
    camera: &Camera,
    wall_tex: &Texture,
    column: usize,
    ray: &[Sample],
    view_angle: f32,
    light: f32,
    rng: &mut R,
) {
    let left = (column as f32 * camera.spacing).floor();
    let width = camera.spacing.ceil();
    let hit = ray.iter().position(|s| s.cell > 0);

    for (idx, sample) in ray.iter().enumerate().rev() {
        let mut drops = rng.gen_range(0.0f32..1.0).powi(3) * idx as f32;

        if hit == Some(idx) {
            let texture_x = (wall_tex.w as f32 * sample.offset).floor() as i32;
            let slice = camera.project(sample.cell as f32, view_angle, sample.distance);
            surface.draw_image_region(
                wall_tex,
                texture_x,
                0,
                1,
                wall_tex.h as i32,
                left,
                slice.top,
                width,
                slice.height,
            );

            let dark = (sample.distance + sample.shading) / camera.light_range - light;
            if dark > 0.0 {
                surface.fill_rect(
                    left,
                    slice.top,
                    width,
                    slice.height,
                    Style::tint(BLACK, dark.min(1.0)),
                );
            }
        }

        if drops > 0.0 {
            let band = camera.project(RAIN_BAND, view_angle, sample.distance);
            loop {
                drops -= 1.0;
                if drops <= 0.0 {
                    break;
                }
                let y = rng.gen_range(0.0f32..1.0) * band.top;
                surface.fill_rect(left, y, 1.0, band.height, RAIN);
            }
        }
    }
}
