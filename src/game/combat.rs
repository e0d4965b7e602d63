use glam::Vec2;

use crate::net::protocol::{PowerUpKind, Projectile, Tank};

use super::stats::EffectiveStats;
use super::tuning::{
    BARREL_LENGTH, PROJECTILE_RADIUS, PROJECTILE_SPEED, RESPAWN_DELAY, SHOT_COOLDOWN, TANK_RADIUS,
};

/// What a projectile impact did to a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// God mode ate the projectile without touching the tank.
    Blocked,
    /// The shield popped and the tank is untouched underneath.
    Absorbed,
    /// The tank is destroyed and its respawn countdown started.
    Destroyed,
}

/// Fires a shot if the tank is alive and its cooldown has elapsed. The
/// cooldown shrinks with the effective fire rate, and a successful shot
/// stamps a new cooldown start.
pub fn try_fire(tank: &mut Tank, stats: &EffectiveStats, now: f64, id: u64) -> Option<Projectile> {
    if !tank.alive {
        return None;
    }
    let cooldown = f64::from(SHOT_COOLDOWN / stats.fire_rate_multiplier);
    if now - tank.last_shot < cooldown {
        return None;
    }
    tank.last_shot = now;

    let muzzle = Vec2::from_angle(tank.turret_rotation);
    Some(Projectile {
        id,
        owner: tank.id,
        position: tank.position + muzzle * BARREL_LENGTH,
        velocity: muzzle * PROJECTILE_SPEED,
        bounces: 0,
        max_bounces: stats.bounce_cap,
        spawned_at: now,
        damage: stats.damage,
    })
}

/// Tests one projectile against one tank and applies the result. `None`
/// means no contact: the tank is dead, out of reach, or the firer itself
/// before the first bounce.
pub fn strike(projectile: &Projectile, tank: &mut Tank, god_mode: bool) -> Option<HitOutcome> {
    if !tank.alive {
        return None;
    }
    if projectile.owner == tank.id && projectile.bounces == 0 {
        return None;
    }
    if projectile.position.distance(tank.position) >= TANK_RADIUS + PROJECTILE_RADIUS {
        return None;
    }

    if god_mode {
        return Some(HitOutcome::Blocked);
    }
    if tank.shielded {
        tank.shielded = false;
        tank.active_effects
            .retain(|effect| effect.kind != PowerUpKind::Shield);
        return Some(HitOutcome::Absorbed);
    }

    // A connecting hit is outright lethal; the damage value on the
    // projectile only distinguishes normal shots from overridden ones.
    tank.health = 0.0;
    tank.alive = false;
    tank.respawn_timer = RESPAWN_DELAY;
    Some(HitOutcome::Destroyed)
}
