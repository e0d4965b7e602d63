use glam::Vec2;

use crate::net::protocol::{ControlSet, Controls, Tank, Wall};

use super::stats::EffectiveStats;
use super::tuning::{REVERSE_FACTOR, ROTATION_STEP, TANK_RADIUS, TANK_SIZE, TANK_SPEED};

/// Advances one living tank by a tick of control intent, then resolves
/// overlap against every blocking wall and the opposing tank.
///
/// * `held`: control codes currently down, as captured by the host.
/// * `stats`: this tank's effective stats, resolved earlier this tick.
/// * `other`: the opposing tank as of the previous tick.
pub fn drive_tank(
    tank: &mut Tank,
    held: &ControlSet,
    controls: &Controls,
    stats: &EffectiveStats,
    walls: &[Wall],
    other: &Tank,
) {
    if !tank.alive {
        return;
    }

    let mut rotation = tank.rotation;
    if held.contains(&controls.left) {
        rotation -= ROTATION_STEP;
    }
    if held.contains(&controls.right) {
        rotation += ROTATION_STEP;
    }

    // Reverse wins when both drive keys are down.
    let mut drive = 0.0;
    if held.contains(&controls.forward) {
        drive = 1.0;
    }
    if held.contains(&controls.reverse) {
        drive = REVERSE_FACTOR;
    }

    let velocity = Vec2::from_angle(rotation) * TANK_SPEED * drive * stats.speed_multiplier;
    let mut position = tank.position + velocity;

    for wall in walls {
        if wall.blocks() {
            resolve_wall_overlap(&mut position, TANK_RADIUS, wall);
        }
    }

    if other.alive {
        separate_from_other(&mut position, other.position);
    }

    tank.rotation = rotation;
    tank.turret_rotation = rotation;
    tank.velocity = velocity;
    tank.position = position;
}

/// Pushes a circle out of a wall along the closest-point axis by the exact
/// penetration depth. A center buried inside the rectangle exits through the
/// nearest edge instead, since the closest-point normal degenerates there.
fn resolve_wall_overlap(position: &mut Vec2, radius: f32, wall: &Wall) {
    let closest = position.clamp(wall.min, wall.max);
    let diff = *position - closest;
    let dist_sq = diff.length_squared();

    if dist_sq >= radius * radius {
        return;
    }

    if dist_sq > 1e-4 {
        let dist = dist_sq.sqrt();
        *position += diff / dist * (radius - dist);
    } else {
        let d_min_x = (position.x - wall.min.x).abs();
        let d_max_x = (position.x - wall.max.x).abs();
        let d_min_y = (position.y - wall.min.y).abs();
        let d_max_y = (position.y - wall.max.y).abs();
        let nearest = d_min_x.min(d_max_x).min(d_min_y).min(d_max_y);

        if nearest == d_min_x {
            position.x = wall.min.x - radius;
        } else if nearest == d_max_x {
            position.x = wall.max.x + radius;
        } else if nearest == d_min_y {
            position.y = wall.min.y - radius;
        } else {
            position.y = wall.max.y + radius;
        }
    }
}

/// Moves this tank away from the opposing one by half the overlap. The other
/// half is recovered by the opponent's own resolution pass the same tick.
fn separate_from_other(position: &mut Vec2, other: Vec2) {
    let diff = *position - other;
    let dist = diff.length();
    if dist < TANK_SIZE && dist > 0.0 {
        *position += diff / dist * ((TANK_SIZE - dist) / 2.0);
    }
}
