//! # farbfeld image loading
//!
//! The built-in procedural art can be replaced from disk. The format is
//! [farbfeld](https://tools.suckless.org/farbfeld/): 8-byte magic, two
//! big-endian `u32` dimensions, then 16-bit big-endian RGBA rows, which we
//! quantize down to the renderer's 8-bit ARGB.
//!
//! Loading is synchronous and happens before the window opens; a bad file
//! fails startup instead of racing the first frame.

use byteorder::{BigEndian as BE, ReadBytesExt};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};
use thiserror::Error;

use crate::world::Texture;

/// Refuse images that would dwarf the framebuffer anyway.
const MAX_PIXELS: u64 = 4096 * 4096;

/// Errors that can be encountered while decoding an image file.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header magic wasn't `farbfeld`.
    #[error("not a farbfeld image")]
    BadMagic,

    /// Header dimensions exceed the sanity cap.
    #[error("image {w}x{h} is too large")]
    TooLarge { w: u32, h: u32 },
}

/// Decode a farbfeld file into a [`Texture`] named after its file stem.
pub fn load_farbfeld(path: &Path) -> Result<Texture, AssetError> {
    let mut reader = BufReader::new(File::open(path)?);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "IMAGE".to_string());
    read_farbfeld(&mut reader, &name)
}

/// Format decoder proper, split out so tests can feed it from memory.
pub fn read_farbfeld(reader: &mut impl Read, name: &str) -> Result<Texture, AssetError> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if &magic != b"farbfeld" {
        return Err(AssetError::BadMagic);
    }

    let w = reader.read_u32::<BE>()?;
    let h = reader.read_u32::<BE>()?;
    if w as u64 * h as u64 > MAX_PIXELS {
        return Err(AssetError::TooLarge { w, h });
    }

    let mut pixels = Vec::with_capacity((w * h) as usize);
    for _ in 0..w * h {
        let r = (reader.read_u16::<BE>()? >> 8) as u32;
        let g = (reader.read_u16::<BE>()? >> 8) as u32;
        let b = (reader.read_u16::<BE>()? >> 8) as u32;
        let a = (reader.read_u16::<BE>()? >> 8) as u32;
        pixels.push(a << 24 | r << 16 | g << 8 | b);
    }
    Ok(Texture::new(name, w as usize, h as usize, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    fn farbfeld(w: u32, h: u32, rgba16: &[[u16; 4]]) -> Vec<u8> {
        let mut buf = Vec::from(*b"farbfeld");
        buf.write_u32::<BE>(w).unwrap();
        buf.write_u32::<BE>(h).unwrap();
        for px in rgba16 {
            for c in px {
                buf.write_u16::<BE>(*c).unwrap();
            }
        }
        buf
    }

    #[test]
    fn decodes_pixels_to_argb() {
        let bytes = farbfeld(
            2,
            1,
            &[
                [0xFFFF, 0x0000, 0x0000, 0xFFFF], // red
                [0x0000, 0x0000, 0xFFFF, 0x8080], // half-transparent blue
            ],
        );
        let tex = read_farbfeld(&mut Cursor::new(bytes), "T").unwrap();
        assert_eq!((tex.w, tex.h), (2, 1));
        assert_eq!(tex.pixels[0], 0xFF_FF_00_00);
        assert_eq!(tex.pixels[1], 0x80_00_00_FF);
    }

    #[test]
    fn rejects_a_wrong_magic() {
        let mut bytes = farbfeld(1, 1, &[[0, 0, 0, 0]]);
        bytes[0] = b'X';
        assert!(matches!(
            read_farbfeld(&mut Cursor::new(bytes), "T"),
            Err(AssetError::BadMagic)
        ));
    }

    #[test]
    fn rejects_absurd_dimensions() {
        let bytes = farbfeld(100_000, 100_000, &[]);
        assert!(matches!(
            read_farbfeld(&mut Cursor::new(bytes), "T"),
            Err(AssetError::TooLarge { .. })
        ));
    }

    #[test]
    fn truncated_pixel_data_is_an_io_error() {
        let mut bytes = farbfeld(2, 2, &[[1, 2, 3, 4]]); // 3 pixels short
        bytes.truncate(bytes.len() - 2);
        assert!(matches!(
            read_farbfeld(&mut Cursor::new(bytes), "T"),
            Err(AssetError::Io(_))
        ));
    }
}
