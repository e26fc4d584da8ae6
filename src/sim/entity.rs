//! Non-player movers: chasers and pickups.
//!
//! One struct, one explicit kind tag. Entities are created at world setup
//! and live for the whole session; "removal" is `alive = false`.

use glam::Vec2;

use crate::sim::Player;
use crate::sim::motion::{walk, wrap_angle};
use crate::world::Grid;

/// Distance at which an item is considered touched.
pub const PICKUP_RADIUS: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Supply,
    Flare,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    /// Walks towards the player under the shared collision rule.
    Enemy { speed: f32 },
    /// Sits still until the player comes within [`PICKUP_RADIUS`].
    Item { kind: ItemKind },
}

pub struct Entity {
    pub pos: Vec2,
    pub direction: f32,
    pub alive: bool,
    pub kind: Kind,
}

impl Entity {
    pub fn enemy(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            direction: 0.0,
            alive: true,
            kind: Kind::Enemy { speed },
        }
    }

    pub fn item(pos: Vec2, kind: ItemKind) -> Self {
        Self {
            pos,
            direction: 0.0,
            alive: true,
            kind: Kind::Item { kind },
        }
    }

    /// One tick of behaviour. Returns the item kind when this tick consumed
    /// a pickup.
    pub fn update(&mut self, player: &Player, grid: &Grid, seconds: f32) -> Option<ItemKind> {
        if !self.alive {
            return None;
        }
        match self.kind {
            Kind::Enemy { speed } => {
                let to_player = player.pos - self.pos;
                self.direction = wrap_angle(to_player.y.atan2(to_player.x));
                walk(&mut self.pos, self.direction, speed * seconds, grid);
                None
            }
            Kind::Item { kind } => {
                if self.pos.distance(player.pos) < PICKUP_RADIUS {
                    self.alive = false;
                    Some(kind)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn enemy_closes_in_on_the_player() {
        let grid = Grid::new(8);
        let player = Player::new(vec2(5.5, 2.5), 0.0);
        let mut enemy = Entity::enemy(vec2(2.5, 2.5), 1.5);
        let before = enemy.pos.distance(player.pos);
        enemy.update(&player, &grid, 0.1);
        assert!(enemy.pos.distance(player.pos) < before);
        assert!(enemy.pos.x > 2.5);
    }

    #[test]
    fn enemy_slides_rather_than_walking_through_walls() {
        let mut grid = Grid::new(8);
        grid.set(3, 2, 1); // between enemy and player
        let player = Player::new(vec2(4.5, 2.9), 0.0);
        let mut enemy = Entity::enemy(vec2(2.9, 2.5), 2.0);
        for _ in 0..10 {
            enemy.update(&player, &grid, 0.05);
        }
        // never inside the wall cell
        assert_ne!(grid.get(enemy.pos.x, enemy.pos.y), 1);
    }

    #[test]
    fn item_is_consumed_on_touch() {
        let grid = Grid::new(8);
        let player = Player::new(vec2(2.5, 2.5), 0.0);
        let mut item = Entity::item(vec2(2.7, 2.5), ItemKind::Supply);
        assert_eq!(item.update(&player, &grid, 0.016), Some(ItemKind::Supply));
        assert!(!item.alive);
        // a dead entity stays inert
        assert_eq!(item.update(&player, &grid, 0.016), None);
    }

    #[test]
    fn distant_item_is_left_alone() {
        let grid = Grid::new(8);
        let player = Player::new(vec2(2.5, 2.5), 0.0);
        let mut item = Entity::item(vec2(6.5, 6.5), ItemKind::Flare);
        assert_eq!(item.update(&player, &grid, 0.016), None);
        assert!(item.alive);
    }
}
