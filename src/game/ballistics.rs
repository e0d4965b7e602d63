use crate::net::protocol::{Projectile, Wall};

use super::tuning::PROJECTILE_LIFETIME;

/// What happened to a projectile during one tick of flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectileStep {
    /// The projectile is spent and must be removed this tick.
    pub expired: bool,
    /// Index of the wall struck by a surviving bounce, if any.
    pub wall_hit: Option<usize>,
}

/// Flies a projectile for one tick: age check, straight-line step, then at
/// most one wall response. A bounce past the cap destroys the projectile
/// without crediting the wall with a hit.
pub fn advance_projectile(
    projectile: &mut Projectile,
    walls: &[Wall],
    now: f64,
    unlimited_bounces: bool,
) -> ProjectileStep {
    if now - projectile.spawned_at > f64::from(PROJECTILE_LIFETIME) {
        return ProjectileStep {
            expired: true,
            wall_hit: None,
        };
    }

    let prev = projectile.position;
    projectile.position += projectile.velocity;

    for (index, wall) in walls.iter().enumerate() {
        if !wall.blocks() {
            continue;
        }
        let pos = projectile.position;
        let inside = pos.x > wall.min.x
            && pos.x < wall.max.x
            && pos.y > wall.min.y
            && pos.y < wall.max.y;
        if !inside {
            continue;
        }

        // The side of entry is whichever face the previous position was
        // still outside of. Corner entries reflect on both axes.
        let hit_left = prev.x <= wall.min.x;
        let hit_right = prev.x >= wall.max.x;
        let hit_top = prev.y <= wall.min.y;
        let hit_bottom = prev.y >= wall.max.y;

        if hit_left {
            projectile.velocity.x = -projectile.velocity.x;
            projectile.position.x = wall.min.x - 1.0;
        } else if hit_right {
            projectile.velocity.x = -projectile.velocity.x;
            projectile.position.x = wall.max.x + 1.0;
        }
        if hit_top {
            projectile.velocity.y = -projectile.velocity.y;
            projectile.position.y = wall.min.y - 1.0;
        } else if hit_bottom {
            projectile.velocity.y = -projectile.velocity.y;
            projectile.position.y = wall.max.y + 1.0;
        }

        projectile.bounces += 1;
        if projectile.bounces > projectile.max_bounces && !unlimited_bounces {
            return ProjectileStep {
                expired: true,
                wall_hit: None,
            };
        }
        return ProjectileStep {
            expired: false,
            wall_hit: Some(index),
        };
    }

    ProjectileStep::default()
}
