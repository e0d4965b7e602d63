pub mod ballistics;
pub mod combat;
pub mod engine;
pub mod maps;
pub mod movement;
pub mod powerups;
pub mod stats;
pub mod tank;
pub mod tuning;
