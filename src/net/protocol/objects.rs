use std::collections::HashSet;

use bincode::{Decode, Encode};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

// --- IDENTIFIERS ---

/// Which seat a tank belongs to. Player one spawns on the left, player two on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// A single key/button identifier as delivered by the host's input layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct ControlCode(pub String);

/// The set of control codes currently held down, refreshed by the host each tick.
pub type ControlSet = HashSet<ControlCode>;

/// One player's key bindings.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Controls {
    pub forward: ControlCode,
    pub reverse: ControlCode,
    pub left: ControlCode,
    pub right: ControlCode,
    pub fire: ControlCode,
}

// --- GAME ENTITIES ---

#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Tank {
    pub id: PlayerId,
    #[bincode(with_serde)]
    pub position: Vec2,
    #[bincode(with_serde)]
    pub velocity: Vec2,
    pub rotation: f32,
    /// Tracks facing; there is no independent turret aiming.
    pub turret_rotation: f32,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
    /// Seconds until respawn; positive only while dead.
    pub respawn_timer: f32,
    /// Engine-clock time of the last successful shot.
    pub last_shot: f64,
    pub active_effects: Vec<ActivePowerUp>,
    pub speed_multiplier: f32,
    pub fire_rate_multiplier: f32,
    pub damage_multiplier: f32,
    pub shielded: bool,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub owner: PlayerId,
    #[bincode(with_serde)]
    pub position: Vec2,
    #[bincode(with_serde)]
    pub velocity: Vec2,
    pub bounces: u32,
    pub max_bounces: u32,
    pub spawned_at: f64,
    pub damage: f32,
}

/// Axis-aligned wall. `health` of -1 marks an indestructible wall, 0 a destroyed one.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Wall {
    #[bincode(with_serde)]
    pub min: Vec2,
    #[bincode(with_serde)]
    pub max: Vec2,
    pub destructible: bool,
    pub health: i32,
}

#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    SpeedBoost,
    RapidFire,
    DamageBoost,
    Teleport,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u64,
    pub kind: PowerUpKind,
    #[bincode(with_serde)]
    pub position: Vec2,
    pub spawned_at: f64,
    /// Effect lifetime once picked up, not the time it stays on the floor.
    pub duration: f32,
}

/// A timed effect currently applied to a tank.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub expires_at: f64,
}

// --- MATCH STATE ---

#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum ArenaMap {
    ClassicArena,
    MazeRunner,
    Fortress,
    OpenField,
    Corridors,
}

/// Round/match progression. `RoundTransition` holds the engine-clock time at
/// which the pending round reset applies; the tick function checks it itself,
/// so there is never a detached timer racing the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub enum MatchPhase {
    Active,
    RoundTransition { resolve_at: f64 },
    MatchOver { winner: PlayerId },
}

/// The authoritative world snapshot produced by each tick.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct GameState {
    pub tanks: [Tank; 2],
    pub projectiles: Vec<Projectile>,
    pub walls: Vec<Wall>,
    pub power_ups: Vec<PowerUp>,
    /// Kills this round, indexed by player.
    pub scores: [u8; 2],
    /// Rounds taken this match, indexed by player.
    pub round_wins: [u8; 2],
    pub round: u8,
    pub rounds_to_win: u8,
    pub map: ArenaMap,
    pub paused: bool,
    pub phase: MatchPhase,
}

// --- ADMIN OVERRIDES ---

/// Externally authorized per-player rule overrides. Read-only input to the
/// resolvers each tick; never stored in [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct AdminCheats {
    pub enabled: bool,
    pub player: PlayerId,
    pub god_mode: bool,
    pub instant_kill: bool,
    pub unlimited_bounces: bool,
    pub super_speed: bool,
    pub rapid_fire: bool,
}
