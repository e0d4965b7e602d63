use glam::Vec2;
use strum::IntoEnumIterator;

use crate::net::protocol::{ArenaMap, Wall};

use super::tuning::{ARENA_HEIGHT, ARENA_WIDTH, WALL_THICKNESS};

impl Wall {
    pub fn solid(x: f32, y: f32, width: f32, height: f32) -> Self {
        Wall {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
            destructible: false,
            health: -1,
        }
    }

    pub fn breakable(x: f32, y: f32, width: f32, height: f32, hits: i32) -> Self {
        Wall {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
            destructible: true,
            health: hits,
        }
    }

    /// A wall takes part in collision until its health is ground down to zero.
    /// The -1 indestructible sentinel never reaches zero.
    pub fn blocks(&self) -> bool {
        self.health != 0
    }
}

/// Border ring shared by every map.
fn border_walls() -> Vec<Wall> {
    let (w, h, t) = (ARENA_WIDTH, ARENA_HEIGHT, WALL_THICKNESS);
    vec![
        Wall::solid(0.0, 0.0, w, t),
        Wall::solid(0.0, h - t, w, t),
        Wall::solid(0.0, 0.0, t, h),
        Wall::solid(w - t, 0.0, t, h),
    ]
}

impl ArenaMap {
    pub fn id(self) -> u8 {
        match self {
            ArenaMap::ClassicArena => 1,
            ArenaMap::MazeRunner => 2,
            ArenaMap::Fortress => 3,
            ArenaMap::OpenField => 4,
            ArenaMap::Corridors => 5,
        }
    }

    /// Unknown ids fall back to the first map rather than failing.
    pub fn from_id(id: u8) -> Self {
        Self::iter()
            .find(|map| map.id() == id)
            .unwrap_or(ArenaMap::ClassicArena)
    }

    pub fn name(self) -> &'static str {
        match self {
            ArenaMap::ClassicArena => "Classic Arena",
            ArenaMap::MazeRunner => "Maze Runner",
            ArenaMap::Fortress => "Fortress",
            ArenaMap::OpenField => "Open Field",
            ArenaMap::Corridors => "Corridors",
        }
    }

    /// Builds a fresh wall list for this map. Every call returns an
    /// independent copy, so damage from one round never leaks into the next.
    pub fn walls(self) -> Vec<Wall> {
        let (w, h, t) = (ARENA_WIDTH, ARENA_HEIGHT, WALL_THICKNESS);
        let mut walls = border_walls();
        match self {
            ArenaMap::ClassicArena => walls.extend([
                // Center obstacles
                Wall::breakable(w / 2.0 - 60.0, 100.0, 120.0, 30.0, 3),
                Wall::breakable(w / 2.0 - 60.0, h - 130.0, 120.0, 30.0, 3),
                Wall::breakable(w / 2.0 - 15.0, h / 2.0 - 80.0, 30.0, 160.0, 3),
                // Side obstacles
                Wall::breakable(200.0, 150.0, 30.0, 120.0, 2),
                Wall::breakable(200.0, h - 270.0, 30.0, 120.0, 2),
                Wall::breakable(w - 230.0, 150.0, 30.0, 120.0, 2),
                Wall::breakable(w - 230.0, h - 270.0, 30.0, 120.0, 2),
                // Corner blocks
                Wall::solid(80.0, 80.0, 50.0, 50.0),
                Wall::solid(w - 130.0, 80.0, 50.0, 50.0),
                Wall::solid(80.0, h - 130.0, 50.0, 50.0),
                Wall::solid(w - 130.0, h - 130.0, 50.0, 50.0),
            ]),
            ArenaMap::MazeRunner => walls.extend([
                // Horizontal maze walls
                Wall::solid(150.0, 120.0, 250.0, 25.0),
                Wall::solid(w - 400.0, 120.0, 250.0, 25.0),
                Wall::solid(150.0, h - 145.0, 250.0, 25.0),
                Wall::solid(w - 400.0, h - 145.0, 250.0, 25.0),
                // Vertical maze walls
                Wall::breakable(300.0, 220.0, 25.0, 160.0, 2),
                Wall::breakable(w - 325.0, 220.0, 25.0, 160.0, 2),
                // Center cross
                Wall::breakable(w / 2.0 - 100.0, h / 2.0 - 12.0, 200.0, 25.0, 3),
                Wall::breakable(w / 2.0 - 12.0, h / 2.0 - 100.0, 25.0, 200.0, 3),
            ]),
            ArenaMap::Fortress => walls.extend([
                // Left fortress
                Wall::solid(100.0, h / 2.0 - 100.0, 150.0, 25.0),
                Wall::solid(100.0, h / 2.0 + 75.0, 150.0, 25.0),
                Wall::breakable(225.0, h / 2.0 - 100.0, 25.0, 75.0, 2),
                Wall::breakable(225.0, h / 2.0 + 25.0, 25.0, 75.0, 2),
                // Right fortress
                Wall::solid(w - 250.0, h / 2.0 - 100.0, 150.0, 25.0),
                Wall::solid(w - 250.0, h / 2.0 + 75.0, 150.0, 25.0),
                Wall::breakable(w - 250.0, h / 2.0 - 100.0, 25.0, 75.0, 2),
                Wall::breakable(w - 250.0, h / 2.0 + 25.0, 25.0, 75.0, 2),
                // Center pillars
                Wall::solid(w / 2.0 - 60.0, 80.0, 40.0, 40.0),
                Wall::solid(w / 2.0 + 20.0, 80.0, 40.0, 40.0),
                Wall::solid(w / 2.0 - 60.0, h - 120.0, 40.0, 40.0),
                Wall::solid(w / 2.0 + 20.0, h - 120.0, 40.0, 40.0),
            ]),
            ArenaMap::OpenField => walls.extend([
                // Scattered small obstacles
                Wall::breakable(200.0, 200.0, 40.0, 40.0, 1),
                Wall::breakable(w - 240.0, 200.0, 40.0, 40.0, 1),
                Wall::breakable(200.0, h - 240.0, 40.0, 40.0, 1),
                Wall::breakable(w - 240.0, h - 240.0, 40.0, 40.0, 1),
                Wall::breakable(w / 2.0 - 20.0, h / 2.0 - 20.0, 40.0, 40.0, 2),
                // Corner barricades
                Wall::solid(80.0, 80.0, 60.0, 20.0),
                Wall::solid(80.0, 80.0, 20.0, 60.0),
                Wall::solid(w - 140.0, 80.0, 60.0, 20.0),
                Wall::solid(w - 100.0, 80.0, 20.0, 60.0),
                Wall::solid(80.0, h - 100.0, 60.0, 20.0),
                Wall::solid(80.0, h - 140.0, 20.0, 60.0),
                Wall::solid(w - 140.0, h - 100.0, 60.0, 20.0),
                Wall::solid(w - 100.0, h - 140.0, 20.0, 60.0),
            ]),
            ArenaMap::Corridors => walls.extend([
                // Horizontal corridors
                Wall::solid(t, h / 3.0, w / 3.0, 25.0),
                Wall::solid(w - w / 3.0 - t, h / 3.0, w / 3.0, 25.0),
                Wall::solid(t, 2.0 * h / 3.0, w / 3.0, 25.0),
                Wall::solid(w - w / 3.0 - t, 2.0 * h / 3.0, w / 3.0, 25.0),
                // Vertical connectors
                Wall::breakable(w / 3.0, t, 25.0, h / 3.0 - t, 3),
                Wall::breakable(2.0 * w / 3.0, t, 25.0, h / 3.0 - t, 3),
                Wall::breakable(w / 3.0, 2.0 * h / 3.0, 25.0, h / 3.0 - t, 3),
                Wall::breakable(2.0 * w / 3.0, 2.0 * h / 3.0, 25.0, h / 3.0 - t, 3),
            ]),
        }
        walls
    }
}
