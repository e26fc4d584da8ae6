//! Drawing abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.* Column and scene
//! passes issue calls against a type implementing [`Surface`]; the software
//! backend rasterises them into a `Vec<u32>` scratch buffer and loans the
//! finished frame out through `end_frame`.
//!
//! Style state is **explicit**: every `fill_rect` carries its own [`Style`]
//! value instead of mutating a shared fill colour/alpha on the backend, so
//! draw calls have no hidden ordering dependencies.

use crate::world::Texture;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

pub const BLACK: Rgba = 0xFF_00_00_00;
pub const WHITE: Rgba = 0xFF_FF_FF_FF;

/// Immutable fill parameters threaded through each `fill_rect` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Rgba,
    /// Coverage in `[0, 1]`; values outside are clamped by the backend.
    pub alpha: f32,
}

impl Style {
    pub const fn tint(color: Rgba, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

/// A drawing surface that owns an internal scratch buffer for one frame.
///
/// * `draw_image_region` blits the `sx, sy, sw, sh` sub-rectangle of `tex`
///   onto the destination rectangle `dx, dy, dw, dh` (floats: callers work
///   in projected screen coordinates), nearest-neighbour scaled. Fully
///   transparent source texels leave the destination untouched.
/// * `fill_rect` alpha-blends `style` over the destination rectangle.
/// * `end_frame(submit)` runs `submit(&[Rgba], w, h)` exactly once; software
///   callers forward the slice to their window manager.
///
/// Pixels are never read back.
pub trait Surface {
    fn begin_frame(&mut self, width: usize, height: usize);

    #[allow(clippy::too_many_arguments)]
    fn draw_image_region(
        &mut self,
        tex: &Texture,
        sx: i32,
        sy: i32,
        sw: i32,
        sh: i32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    );

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, style: Style);

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

pub mod software;
pub use software::Software;
