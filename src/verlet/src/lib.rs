pub mod constraint;
pub mod constraint_group;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod particle_group;
pub mod pworld;

pub use constraint::StickHandle;
pub use error::{Result, SimError};
pub use particle::PointHandle;
pub use protocol::V2;
