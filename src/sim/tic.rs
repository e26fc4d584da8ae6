//! Per-tick simulation driver and the frame clock.

use std::time::Instant;

use rand::Rng;
use smallvec::SmallVec;

use crate::sim::entity::{Entity, ItemKind};
use crate::sim::input::Buttons;
use crate::sim::player::Player;
use crate::world::{FLASH_PEAK, World};

/// Ticks at least this long are dropped instead of simulated – one stalled
/// frame (window drag, suspend) must not become a giant movement step.
pub const MAX_FRAME_SECONDS: f32 = 0.2;

/// Converts a monotonic "now" into elapsed-seconds ticks.
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Elapsed seconds since the previous accepted or rejected tick, or
    /// `None` when the gap is stale. The clock always advances, so one bad
    /// gap costs exactly one frame.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let elapsed = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        (elapsed < MAX_FRAME_SECONDS).then_some(elapsed)
    }
}

/// Side effects queued during the entity pass and applied afterwards,
/// once the grid borrow is released.
enum Event {
    Picked(ItemKind),
}
type Events = SmallVec<[Event; 4]>;

/// Owns the player and every entity; advances all game logic one tick.
pub struct Sim {
    pub player: Player,
    pub entities: Vec<Entity>,
    /// Supplies collected this session.
    pub supplies: u32,
}

impl Sim {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            entities: Vec::new(),
            supplies: 0,
        }
    }

    /// One `update` per accepted tick: ambient light, player, entities.
    pub fn update(&mut self, seconds: f32, buttons: Buttons, world: &mut World, rng: &mut impl Rng) {
        world.update_light(seconds, rng);
        self.player.update(buttons, &world.grid, seconds);

        let mut events = Events::new();
        for entity in &mut self.entities {
            if let Some(kind) = entity.update(&self.player, &world.grid, seconds) {
                events.push(Event::Picked(kind));
            }
        }

        for event in events {
            match event {
                Event::Picked(ItemKind::Supply) => self.supplies += 1,
                // a flare lights the whole sky for a moment
                Event::Picked(ItemKind::Flare) => world.light = FLASH_PEAK,
            }
        }
    }
}
