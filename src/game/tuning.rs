//! Arena tuning. Distances are in world units, kinematic steps are per tick
//! (the host runs a fixed-rate loop), timers are in seconds of engine clock.

// --- Arena ---

pub const ARENA_WIDTH: f32 = 1000.0;
pub const ARENA_HEIGHT: f32 = 600.0;
pub const WALL_THICKNESS: f32 = 20.0;

// --- Tanks ---

pub const TANK_SIZE: f32 = 30.0;
pub const TANK_RADIUS: f32 = TANK_SIZE / 2.0;
pub const TANK_SPEED: f32 = 3.0; // World units per tick
pub const ROTATION_STEP: f32 = 0.05; // Radians per tick
pub const REVERSE_FACTOR: f32 = -0.6;
pub const TANK_MAX_HEALTH: f32 = 100.0;
pub const TANK_SPAWN_INSET: f32 = 100.0;
pub const RESPAWN_DELAY: f32 = 2.0;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 8.0; // World units per tick
pub const PROJECTILE_RADIUS: f32 = 5.0;
pub const BARREL_LENGTH: f32 = TANK_SIZE * 0.8;
pub const SHOT_COOLDOWN: f32 = 0.5; // Seconds between shots
pub const PROJECTILE_LIFETIME: f32 = 5.0;
pub const DEFAULT_BOUNCE_CAP: u32 = 3;
pub const UNLIMITED_BOUNCE_CAP: u32 = 999;
pub const BASE_DAMAGE: f32 = 100.0;
pub const INSTANT_KILL_DAMAGE: f32 = 1000.0;

// --- Scoring ---

pub const ROUND_WIN_SCORE: u8 = 5;
pub const DEFAULT_ROUNDS_TO_WIN: u8 = 3;
pub const ROUND_RESET_DELAY: f32 = 2.0;

// --- Power-ups ---

pub const POWERUP_SPAWN_INTERVAL: f32 = 5.0;
pub const POWERUP_DURATION: f32 = 8.0;
pub const POWERUP_ARENA_EXPIRY: f32 = 15.0; // Despawn if nobody picks it up
pub const MAX_POWERUPS: usize = 3;
pub const POWERUP_SPAWN_INSET: f32 = 80.0;
pub const POWERUP_WALL_BUFFER: f32 = 20.0;
pub const POWERUP_TANK_CLEARANCE: f32 = 80.0;
pub const POWERUP_SPACING: f32 = 60.0;
pub const POWERUP_SPAWN_ATTEMPTS: u32 = 50;
pub const PICKUP_RADIUS: f32 = 15.0;
pub const TELEPORT_INSET: f32 = 100.0;

// --- Power-up multipliers ---

pub const SPEED_BOOST_MULTIPLIER: f32 = 2.0;
pub const RAPID_FIRE_MULTIPLIER: f32 = 3.0;
pub const DAMAGE_BOOST_MULTIPLIER: f32 = 2.0;

// --- Admin overrides (absolute substitutions, not stacked) ---

pub const ADMIN_SUPER_SPEED: f32 = 3.0;
pub const ADMIN_RAPID_FIRE: f32 = 10.0;
