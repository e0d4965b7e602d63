pub mod game;
pub mod net;

pub use game::engine::{GameEngine, MatchConfig, MatchSetupError};
pub use net::protocol::*;
