use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::objects::{PlayerId, PowerUp, PowerUpKind, Projectile, Wall};

/// One-shot events for the UI/Audio (not persistent state)
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { scores: [u8; 2] },
    TankDestroyed { victim: PlayerId, by: PlayerId },
    ShieldAbsorbed { player: PlayerId },
    PowerUpCollected { player: PlayerId, kind: PowerUpKind },
    WallDamaged { wall: usize, health_left: i32 },
    RoundStarted { round: u8 },
    RoundWon { player: PlayerId, wins: u8 },
    MatchOver { winner: PlayerId },
}

/// Shared world objects mirrored to the remote peer. Tanks travel separately,
/// one record per player, so each side stays authoritative over its own tank.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct MirrorUpdate {
    pub projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    pub walls: Vec<Wall>,
    pub paused: bool,
}
