use std::f32::consts::PI;

use glam::Vec2;

use crate::net::protocol::{PlayerId, PowerUpKind, Tank};

use super::tuning::{
    ARENA_HEIGHT, ARENA_WIDTH, DAMAGE_BOOST_MULTIPLIER, RAPID_FIRE_MULTIPLIER, SHOT_COOLDOWN,
    SPEED_BOOST_MULTIPLIER, TANK_MAX_HEALTH, TANK_SPAWN_INSET,
};

/// Side spawn point and facing: player one on the left looking right,
/// player two on the right looking left.
fn spawn_placement(id: PlayerId) -> (Vec2, f32) {
    match id {
        PlayerId::One => (Vec2::new(TANK_SPAWN_INSET, ARENA_HEIGHT / 2.0), 0.0),
        PlayerId::Two => (
            Vec2::new(ARENA_WIDTH - TANK_SPAWN_INSET, ARENA_HEIGHT / 2.0),
            PI,
        ),
    }
}

impl Tank {
    pub fn spawn(id: PlayerId) -> Self {
        let (position, rotation) = spawn_placement(id);
        Tank {
            id,
            position,
            velocity: Vec2::ZERO,
            rotation,
            turret_rotation: rotation,
            health: TANK_MAX_HEALTH,
            max_health: TANK_MAX_HEALTH,
            alive: true,
            respawn_timer: 0.0,
            // One cooldown in the past, so a fresh tank may fire at once.
            last_shot: -f64::from(SHOT_COOLDOWN),
            active_effects: Vec::new(),
            speed_multiplier: 1.0,
            fire_rate_multiplier: 1.0,
            damage_multiplier: 1.0,
            shielded: false,
        }
    }

    /// Fresh spawn back on the home side: full health, no effects, no shield.
    /// Weapon cooldown state survives death.
    pub fn respawn(&mut self) {
        let last_shot = self.last_shot;
        *self = Tank::spawn(self.id);
        self.last_shot = last_shot;
    }

    /// Drops expired effects, then re-derives the three multipliers and the
    /// shield flag from what remains. Presence alone decides the value, so
    /// stacked entries of the same kind never compound.
    pub fn refresh_effects(&mut self, now: f64) {
        self.active_effects.retain(|effect| effect.expires_at > now);

        self.speed_multiplier = 1.0;
        self.fire_rate_multiplier = 1.0;
        self.damage_multiplier = 1.0;
        let mut shielded = false;

        for effect in &self.active_effects {
            match effect.kind {
                PowerUpKind::Shield => shielded = true,
                PowerUpKind::SpeedBoost => self.speed_multiplier = SPEED_BOOST_MULTIPLIER,
                PowerUpKind::RapidFire => self.fire_rate_multiplier = RAPID_FIRE_MULTIPLIER,
                PowerUpKind::DamageBoost => self.damage_multiplier = DAMAGE_BOOST_MULTIPLIER,
                // Teleport is a one-shot relocation, it never leaves an entry.
                PowerUpKind::Teleport => {}
            }
        }
        self.shielded = shielded;
    }
}
