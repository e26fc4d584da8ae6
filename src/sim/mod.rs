//! Game-logic layer: movement, entities, input, the per-tick driver.

pub mod entity;
pub mod input;
pub mod motion;
pub mod player;
pub mod tic;

pub use entity::{Entity, ItemKind, Kind, PICKUP_RADIUS};
pub use input::Buttons;
pub use motion::{walk, wrap_angle};
pub use player::Player;
pub use tic::{FrameClock, MAX_FRAME_SECONDS, Sim};
