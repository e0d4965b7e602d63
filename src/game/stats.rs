use crate::net::protocol::{AdminCheats, PlayerId, Tank};

use super::tuning::{
    ADMIN_RAPID_FIRE, ADMIN_SUPER_SPEED, BASE_DAMAGE, DEFAULT_BOUNCE_CAP, INSTANT_KILL_DAMAGE,
    UNLIMITED_BOUNCE_CAP,
};

impl AdminCheats {
    /// Overrides only apply to the player they were unlocked for.
    pub fn targets(&self, player: PlayerId) -> bool {
        self.enabled && self.player == player
    }
}

/// Final combat and movement parameters for one tank on one tick.
///
/// Resolved exactly once per tank per tick, with precedence
/// admin override > power-up effect > base value. Admin values are absolute
/// substitutions: super speed forces the multiplier to 3 even while a speed
/// boost is active, it does not stack on top of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub speed_multiplier: f32,
    pub fire_rate_multiplier: f32,
    pub damage: f32,
    pub bounce_cap: u32,
    pub unlimited_bounces: bool,
    pub god_mode: bool,
}

pub fn resolve_stats(tank: &Tank, cheats: Option<&AdminCheats>) -> EffectiveStats {
    let admin = cheats.filter(|c| c.targets(tank.id));

    let speed_multiplier = match admin {
        Some(c) if c.super_speed => ADMIN_SUPER_SPEED,
        _ => tank.speed_multiplier,
    };
    let fire_rate_multiplier = match admin {
        Some(c) if c.rapid_fire => ADMIN_RAPID_FIRE,
        _ => tank.fire_rate_multiplier,
    };
    let damage = match admin {
        Some(c) if c.instant_kill => INSTANT_KILL_DAMAGE,
        _ => BASE_DAMAGE * tank.damage_multiplier,
    };
    let unlimited_bounces = admin.is_some_and(|c| c.unlimited_bounces);
    let bounce_cap = if unlimited_bounces {
        UNLIMITED_BOUNCE_CAP
    } else {
        DEFAULT_BOUNCE_CAP
    };
    let god_mode = admin.is_some_and(|c| c.god_mode);

    EffectiveStats {
        speed_multiplier,
        fire_rate_multiplier,
        damage,
        bounce_cap,
        unlimited_bounces,
        god_mode,
    }
}
