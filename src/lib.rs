//! # raincast_rs
//!
//! A first-person view of a square wall grid, rendered one vertical column
//! at a time ("Wolfenstein-style" raycasting) into a CPU framebuffer.
//!
//! Module map:
//! * [`world`]  – wall grid, camera/projection maths, textures, ambient light.
//! * [`engine`] – the grid DDA ray marcher and the column/scene draw passes.
//! * [`renderer`] – the [`renderer::Surface`] drawing abstraction plus the
//!   software backend that fills a `Vec<u32>` scratch buffer.
//! * [`sim`]    – player/entity movement, input buttons, the frame clock.
//! * [`assets`] – farbfeld image loading for replacing the built-in art.

pub mod assets;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
