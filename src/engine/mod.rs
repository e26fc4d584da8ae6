//! Ray marching and the frame draw passes.

pub mod columns;
pub mod ray;
pub mod scene;

pub use ray::{Sample, cast, cast_into};
pub use scene::{Scene, SceneAssets};
