//! The player: pose, input response, pace accumulation.

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::input::Buttons;
use crate::sim::motion::{walk, wrap_angle};
use crate::world::Grid;

/// Turn rate in radians per second.
const TURN_RATE: f32 = PI;
/// Walk speed in cells per second.
const WALK_SPEED: f32 = 3.0;

pub struct Player {
    pub pos: Vec2,
    /// Heading in radians, kept in `[0, 2π)`.
    pub direction: f32,
    /// Cumulative walked distance; phases the weapon bob, nothing else.
    pub paces: f32,
}

impl Player {
    pub fn new(pos: Vec2, direction: f32) -> Self {
        Self {
            pos,
            direction: wrap_angle(direction),
            paces: 0.0,
        }
    }

    pub fn rotate(&mut self, angle: f32) {
        self.direction = wrap_angle(self.direction + angle);
    }

    pub fn walk(&mut self, distance: f32, grid: &Grid) {
        walk(&mut self.pos, self.direction, distance, grid);
        self.paces += distance;
    }

    /// Apply one tick of held buttons.
    pub fn update(&mut self, buttons: Buttons, grid: &Grid, seconds: f32) {
        if buttons.contains(Buttons::LEFT) {
            self.rotate(-TURN_RATE * seconds);
        }
        if buttons.contains(Buttons::RIGHT) {
            self.rotate(TURN_RATE * seconds);
        }
        if buttons.contains(Buttons::FORWARD) {
            self.walk(WALK_SPEED * seconds, grid);
        }
        if buttons.contains(Buttons::BACKWARD) {
            self.walk(-WALK_SPEED * seconds, grid);
        }
    }
}
