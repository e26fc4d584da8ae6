//! ---------------------------------------------------------------------------
//! Software (CPU) backend for [`Surface`]
//!
//! * Fills an internal `Vec<u32>` frame-buffer in **0xAARRGGBB** format.
//! * Nearest-neighbour scaling for image blits; per-call alpha blending for
//!   fills. Everything is clipped to the viewport.
//! ---------------------------------------------------------------------------

use crate::renderer::{Rgba, Style, Surface};
use crate::world::Texture;

/// Night-black clear colour.
const CLEAR: Rgba = 0xFF_06_06_0A;

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Surface for Software {
    fn begin_frame(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
        self.scratch.fill(CLEAR);
    }

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
    ) {
        if sw <= 0 || sh <= 0 || dw <= 0.0 || dh <= 0.0 || tex.w == 0 || tex.h == 0 {
            return;
        }
        let (x0, x1) = clip_span(dx, dw, self.width);
        let (y0, y1) = clip_span(dy, dh, self.height);

        for py in y0..y1 {
            // midpoint sampling keeps 1-px-wide sources stable
            let v = (py as f32 + 0.5 - dy) / dh;
            let tex_y = sample(sy, sh, v, tex.h);
            for px in x0..x1 {
                let u = (px as f32 + 0.5 - dx) / dw;
                let tex_x = sample(sx, sw, u, tex.w);
                let texel = tex.texel(tex_x, tex_y);
                let a = texel >> 24;
                if a == 0 {
                    continue;
                }
                let dst = &mut self.scratch[py * self.width + px];
                *dst = if a == 0xFF {
                    texel
                } else {
                    blend(*dst, texel, a as f32 / 255.0)
                };
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, style: Style) {
        let alpha = style.alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 || w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = clip_span(x, w, self.width);
        let (y0, y1) = clip_span(y, h, self.height);
        for py in y0..y1 {
            let row = py * self.width;
            for px in x0..x1 {
                let dst = &mut self.scratch[row + px];
                *dst = blend(*dst, style.color, alpha);
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/// Clip `[start, start + len)` to `0..limit`, returned as integer pixels.
fn clip_span(start: f32, len: f32, limit: usize) -> (usize, usize) {
    let lo = start.floor().max(0.0) as usize;
    let hi = (start + len).ceil().min(limit as f32).max(0.0) as usize;
    (lo.min(limit), hi)
}

/// Map normalized `t` into the source region, clamped to texture bounds.
#[inline]
fn sample(src_start: i32, src_len: i32, t: f32, tex_extent: usize) -> usize {
    let coord = src_start + (t * src_len as f32) as i32;
    coord.clamp(src_start, src_start + src_len - 1).clamp(0, tex_extent as i32 - 1) as usize
}

/// Linear blend of `src` over `dst` with coverage `t` in `[0, 1]`.
#[inline]
fn blend(dst: Rgba, src: Rgba, t: f32) -> Rgba {
    let ch = |shift: u32| {
        let d = (dst >> shift) & 0xFF;
        let s = (src >> shift) & 0xFF;
        let mixed = d as f32 + (s as f32 - d as f32) * t;
        (mixed as u32).min(255) << shift
    };
    0xFF00_0000 | ch(16) | ch(8) | ch(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{BLACK, WHITE};

    fn frame(sw: &mut Software) -> Vec<Rgba> {
        let mut out = Vec::new();
        sw.end_frame(|fb, _, _| out = fb.to_vec());
        out
    }

    #[test]
    fn opaque_fill_overwrites() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.fill_rect(1.0, 1.0, 2.0, 2.0, Style::tint(WHITE, 1.0));
        let fb = frame(&mut sw);
        assert_eq!(fb[1 * 4 + 1], WHITE);
        assert_eq!(fb[2 * 4 + 2], WHITE);
        assert_eq!(fb[0], CLEAR);
    }

    #[test]
    fn half_alpha_lands_between() {
        let mut sw = Software::default();
        sw.begin_frame(2, 1);
        sw.fill_rect(0.0, 0.0, 1.0, 1.0, Style::tint(BLACK, 1.0));
        sw.fill_rect(0.0, 0.0, 1.0, 1.0, Style::tint(WHITE, 0.5));
        let fb = frame(&mut sw);
        let r = (fb[0] >> 16) & 0xFF;
        assert!((126..=129).contains(&r), "got {r}");
    }

    #[test]
    fn out_of_viewport_rects_are_clipped() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.fill_rect(-10.0, -10.0, 100.0, 5.0, Style::tint(WHITE, 1.0));
        sw.fill_rect(3.5, 3.5, 8.0, 8.0, Style::tint(WHITE, 1.0));
        // negative sizes are ignored outright
        sw.fill_rect(1.0, 1.0, -3.0, 2.0, Style::tint(WHITE, 1.0));
        let fb = frame(&mut sw);
        assert_eq!(fb.len(), 16); // and no panic above
    }

    #[test]
    fn one_px_column_stretches_across_destination() {
        let tex = Texture::new("T", 2, 2, vec![WHITE, BLACK, WHITE, BLACK]);
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        // left source column only, stretched over the whole viewport
        sw.draw_image_region(&tex, 0, 0, 1, 2, 0.0, 0.0, 4.0, 4.0);
        let fb = frame(&mut sw);
        assert!(fb.iter().all(|&p| p == WHITE));
    }

    #[test]
    fn transparent_texels_leave_destination_alone() {
        let tex = Texture::new("T", 1, 1, vec![0x00_12_34_56]);
        let mut sw = Software::default();
        sw.begin_frame(2, 2);
        sw.draw_image_region(&tex, 0, 0, 1, 1, 0.0, 0.0, 2.0, 2.0);
        let fb = frame(&mut sw);
        assert!(fb.iter().all(|&p| p == CLEAR));
    }
}
