use glam::Vec2;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::net::protocol::{ActivePowerUp, PowerUp, PowerUpKind, Tank, Wall};

use super::tuning::{
    ARENA_HEIGHT, ARENA_WIDTH, DAMAGE_BOOST_MULTIPLIER, PICKUP_RADIUS, POWERUP_DURATION,
    POWERUP_SPACING, POWERUP_SPAWN_ATTEMPTS, POWERUP_SPAWN_INSET, POWERUP_TANK_CLEARANCE,
    POWERUP_WALL_BUFFER, RAPID_FIRE_MULTIPLIER, SPEED_BOOST_MULTIPLIER, TANK_RADIUS,
    TELEPORT_INSET,
};

/// Rolls a random kind and rejection-samples a clear position for a fresh
/// arena power-up. Returns `None` when no clear spot is found within the
/// attempt budget; the spawn cycle is consumed either way.
pub fn spawn_power_up(
    walls: &[Wall],
    tanks: &[Tank; 2],
    existing: &[PowerUp],
    now: f64,
    rng: &mut impl Rng,
    id: u64,
) -> Option<PowerUp> {
    let kinds: Vec<PowerUpKind> = PowerUpKind::iter().collect();
    let kind = kinds[rng.random_range(0..kinds.len())];

    for _ in 0..POWERUP_SPAWN_ATTEMPTS {
        let position = Vec2::new(
            rng.random_range(POWERUP_SPAWN_INSET..ARENA_WIDTH - POWERUP_SPAWN_INSET),
            rng.random_range(POWERUP_SPAWN_INSET..ARENA_HEIGHT - POWERUP_SPAWN_INSET),
        );
        if position_is_clear(position, walls, tanks, existing) {
            return Some(PowerUp {
                id,
                kind,
                position,
                spawned_at: now,
                duration: POWERUP_DURATION,
            });
        }
    }
    None
}

/// A spot is clear when it keeps a buffer from every blocking wall and a
/// clearance from both tanks and every power-up already on the field.
fn position_is_clear(
    position: Vec2,
    walls: &[Wall],
    tanks: &[Tank; 2],
    existing: &[PowerUp],
) -> bool {
    for wall in walls {
        if !wall.blocks() {
            continue;
        }
        if position.x > wall.min.x - POWERUP_WALL_BUFFER
            && position.x < wall.max.x + POWERUP_WALL_BUFFER
            && position.y > wall.min.y - POWERUP_WALL_BUFFER
            && position.y < wall.max.y + POWERUP_WALL_BUFFER
        {
            return false;
        }
    }
    if tanks
        .iter()
        .any(|tank| tank.position.distance(position) < POWERUP_TANK_CLEARANCE)
    {
        return false;
    }
    !existing
        .iter()
        .any(|other| other.position.distance(position) < POWERUP_SPACING)
}

/// Whether a living tank overlaps a power-up closely enough to collect it.
pub fn check_pickup(tank: &Tank, power_up: &PowerUp) -> bool {
    tank.alive && tank.position.distance(power_up.position) < TANK_RADIUS + PICKUP_RADIUS
}

/// Grants a collected power-up to a tank. Timed kinds take effect
/// immediately and record an expiry entry; teleport relocates on the spot
/// and leaves nothing behind.
pub fn apply_power_up(tank: &mut Tank, kind: PowerUpKind, now: f64, rng: &mut impl Rng) {
    let expires_at = now + f64::from(POWERUP_DURATION);
    match kind {
        PowerUpKind::Shield => {
            tank.shielded = true;
        }
        PowerUpKind::SpeedBoost => {
            tank.speed_multiplier = SPEED_BOOST_MULTIPLIER;
        }
        PowerUpKind::RapidFire => {
            tank.fire_rate_multiplier = RAPID_FIRE_MULTIPLIER;
        }
        PowerUpKind::DamageBoost => {
            tank.damage_multiplier = DAMAGE_BOOST_MULTIPLIER;
        }
        PowerUpKind::Teleport => {
            tank.position = Vec2::new(
                rng.random_range(TELEPORT_INSET..ARENA_WIDTH - TELEPORT_INSET),
                rng.random_range(TELEPORT_INSET..ARENA_HEIGHT - TELEPORT_INSET),
            );
            return;
        }
    }
    tank.active_effects.push(ActivePowerUp { kind, expires_at });
}
