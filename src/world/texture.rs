//! CPU-side texture storage plus the built-in procedural art.
//!
//! Pixels are 32-bit **ARGB** (`0xAARRGGBB`) in row-major order. Alpha 0
//! texels are skipped by the blitter, which is how the weapon sprite keeps
//! its silhouette. The built-ins exist so the binary runs with no files on
//! disk; real art can be swapped in through the farbfeld loader.

use once_cell::sync::Lazy;

/// Grey 8×8 checkerboard substituted for any unusable (zero-area) texture.
pub static CHECKER: Lazy<Texture> = Lazy::new(Texture::checker);

#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u32>,
}

impl Texture {
    pub fn new(name: &str, w: usize, h: usize, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), w * h);
        Self {
            name: name.to_string(),
            w,
            h,
            pixels,
        }
    }

    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.w + x]
    }

    fn checker() -> Self {
        let mut pixels = vec![0u32; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pixels[y * 8 + x] = if (x ^ y) & 1 == 0 {
                    0xFF_60_60_60
                } else {
                    0xFF_30_30_30
                };
            }
        }
        Texture::new("CHECKER", 8, 8, pixels)
    }

    /// 64×64 mortared brick, per-brick shade picked by a coordinate hash.
    pub fn brick() -> Self {
        const W: usize = 64;
        const H: usize = 64;
        const COURSE: usize = 16; // brick row height incl. mortar
        const BRICK_W: usize = 32;
        let mut pixels = vec![0u32; W * H];
        for y in 0..H {
            let course = y / COURSE;
            // odd courses shift half a brick
            let shift = if course & 1 == 0 { 0 } else { BRICK_W / 2 };
            for x in 0..W {
                let bx = (x + shift) % W;
                let mortar = y % COURSE >= COURSE - 2 || bx % BRICK_W >= BRICK_W - 2;
                pixels[y * W + x] = if mortar {
                    0xFF_2B_28_26
                } else {
                    let tone = hash((bx / BRICK_W) as u32, course as u32) % 24;
                    let speck = hash(x as u32, y as u32 ^ 0x9E37) % 13;
                    rgb(74 + tone + speck / 4, 34 + tone / 2, 28 + tone / 3)
                };
            }
        }
        Texture::new("BRICK", W, H, pixels)
    }

    /// 512×128 storm panorama: graded night sky, a few stars, cloud bands.
    pub fn night_sky() -> Self {
        const W: usize = 512;
        const H: usize = 128;
        let mut pixels = vec![0u32; W * H];
        for y in 0..H {
            let t = y as f32 / H as f32;
            let base_r = 8.0 + 22.0 * t;
            let base_g = 10.0 + 24.0 * t;
            let base_b = 26.0 + 38.0 * t;
            for x in 0..W {
                // two slow sine bands as cloud cover
                let fx = x as f32 / W as f32 * std::f32::consts::TAU;
                let cloud = ((fx * 3.0).sin() * 0.5 + (fx * 7.0 + t * 4.0).sin() * 0.3)
                    .max(0.0)
                    * (1.0 - t)
                    * 18.0;
                let mut p = rgb(
                    (base_r + cloud) as u32,
                    (base_g + cloud) as u32,
                    (base_b + cloud * 1.2) as u32,
                );
                if t < 0.45 && hash(x as u32, y as u32) % 601 == 0 {
                    p = 0xFF_C8_CC_E0; // star
                }
                pixels[y * W + x] = p;
            }
        }
        Texture::new("STORMSKY", W, H, pixels)
    }

    /// 64×64 rifle silhouette on a transparent background.
    pub fn rifle() -> Self {
        const W: usize = 64;
        const H: usize = 64;
        let mut pixels = vec![0u32; W * H]; // alpha 0 everywhere
        // barrel: a thick diagonal from lower-right towards upper-left
        for t in 0..46 {
            let x = 58 - t;
            let y = 56 - (t as f32 * 0.62) as usize;
            for dy in 0..4 {
                for dx in 0..3 {
                    let (px, py) = (x + dx, y + dy);
                    if px < W && py < H {
                        pixels[py * W + px] = if dy == 0 { 0xFF_3A_3C_40 } else { 0xFF_20_22_26 };
                    }
                }
            }
        }
        // stock block under the barrel's near end
        for y in 52..H {
            for x in 44..62 {
                pixels[y * W + x] = 0xFF_18_14_10;
            }
        }
        Texture::new("RIFLE", W, H, pixels)
    }
}

#[inline]
fn rgb(r: u32, g: u32, b: u32) -> u32 {
    0xFF00_0000 | (r.min(255) << 16) | (g.min(255) << 8) | b.min(255)
}

/// Cheap 2-D integer hash for per-texel variation (fmix-style avalanche).
#[inline]
fn hash(x: u32, y: u32) -> u32 {
    let mut h = x.wrapping_mul(0x85EB_CA6B) ^ y.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_ins_have_consistent_dimensions() {
        for tex in [Texture::brick(), Texture::night_sky(), Texture::rifle()] {
            assert_eq!(tex.pixels.len(), tex.w * tex.h, "{}", tex.name);
            assert!(tex.w > 0 && tex.h > 0);
        }
    }

    #[test]
    fn wall_and_sky_are_fully_opaque() {
        for tex in [Texture::brick(), Texture::night_sky()] {
            assert!(
                tex.pixels.iter().all(|p| p >> 24 == 0xFF),
                "{} must have no holes",
                tex.name
            );
        }
    }

    #[test]
    fn rifle_keeps_a_transparent_silhouette() {
        let tex = Texture::rifle();
        let clear = tex.pixels.iter().filter(|&&p| p >> 24 == 0).count();
        let solid = tex.pixels.len() - clear;
        assert!(clear > solid, "sprite should be mostly background");
        assert!(solid > 0, "sprite should not be empty");
    }

    #[test]
    fn checker_fallback_is_ready() {
        assert_eq!(CHECKER.w, 8);
        assert_eq!(CHECKER.texel(0, 0), 0xFF_60_60_60);
        assert_eq!(CHECKER.texel(1, 0), 0xFF_30_30_30);
    }
}
