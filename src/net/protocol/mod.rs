pub mod messages;
pub mod objects;

pub use messages::*;
pub use objects::*;
