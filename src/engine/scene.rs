//! Full-frame draw pass: sky, wall columns, weapon.
//!
//! The order is fixed – there is no depth buffer, later draws simply paint
//! over earlier ones.

use std::f32::consts::TAU;

use rand::Rng;

use crate::engine::columns::draw_column;
use crate::engine::ray::{Sample, cast_into};
use crate::renderer::{Style, Surface, WHITE};
use crate::sim::Player;
use crate::world::texture::CHECKER;
use crate::world::{Camera, Texture, World};

/// The images one scene draws from. Zero-area textures are replaced with
/// the checkerboard fallback at construction.
pub struct SceneAssets {
    pub wall: Texture,
    pub sky: Texture,
    pub weapon: Texture,
}

impl SceneAssets {
    fn sanitized(mut self) -> Self {
        for tex in [&mut self.wall, &mut self.sky, &mut self.weapon] {
            if tex.w == 0 || tex.h == 0 {
                *tex = CHECKER.clone();
            }
        }
        self
    }
}

pub struct Scene {
    pub camera: Camera,
    assets: SceneAssets,
    /// Ray sample arena, reused by every column of every frame.
    ray: Vec<Sample>,
}

impl Scene {
    pub fn new(camera: Camera, assets: SceneAssets) -> Self {
        Self {
            camera,
            assets: assets.sanitized(),
            ray: Vec::new(),
        }
    }

    /// Draw one complete frame onto `surface`.
    pub fn render<S: Surface, R: Rng>(
        &mut self,
        surface: &mut S,
        player: &Player,
        world: &World,
        rng: &mut R,
    ) {
        self.draw_sky(surface, player.direction, world.light);
        self.draw_columns(surface, player, world, rng);
        self.draw_weapon(surface, player.paces);
    }

    /// Parallax panorama: a full turn scrolls the image by its own width,
    /// drawn twice so the seam wraps. A positive ambient light paints the
    /// lightning flash over the lower half.
    fn draw_sky<S: Surface>(&self, surface: &mut S, direction: f32, light: f32) {
        let sky = &self.assets.sky;
        let cam = &self.camera;
        let width = sky.w as f32 * (cam.height / sky.h as f32) * 2.0;
        let left = direction / TAU * -width;

        surface.draw_image_region(
            sky,
            0,
            0,
            sky.w as i32,
            sky.h as i32,
            left,
            0.0,
            width,
            cam.height,
        );
        if left < width - cam.width {
            surface.draw_image_region(
                sky,
                0,
                0,
                sky.w as i32,
                sky.h as i32,
                left + width,
                0.0,
                width,
                cam.height,
            );
        }
        if light > 0.0 {
            surface.fill_rect(
                0.0,
                cam.height * 0.5,
                cam.width,
                cam.height * 0.5,
                Style::tint(WHITE, (light * 0.1).min(1.0)),
            );
        }
    }

    fn draw_columns<S: Surface, R: Rng>(
        &mut self,
        surface: &mut S,
        player: &Player,
        world: &World,
        rng: &mut R,
    ) {
        for column in 0..self.camera.resolution {
            let angle = self.camera.column_angle(column);
            cast_into(
                &world.grid,
                player.pos,
                player.direction + angle,
                self.camera.range,
                &mut self.ray,
            );
            draw_column(
                surface,
                &self.camera,
                &self.assets.wall,
                column,
                &self.ray,
                angle,
                world.light,
                rng,
            );
        }
    }

    /// Foreground sprite with a sinusoidal bob keyed on walked distance.
    fn draw_weapon<S: Surface>(&self, surface: &mut S, paces: f32) {
        let weapon = &self.assets.weapon;
        let cam = &self.camera;
        let bob_x = (paces * 2.0).cos() * cam.scale * 6.0;
        let bob_y = (paces * 4.0).sin() * cam.scale * 6.0;
        surface.draw_image_region(
            weapon,
            0,
            0,
            weapon.w as i32,
            weapon.h as i32,
            cam.width * 0.66 + bob_x,
            cam.height * 0.6 + bob_y,
            weapon.w as f32 * cam.scale,
            weapon.h as f32 * cam.scale,
        );
    }
}
