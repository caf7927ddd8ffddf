mod error;
mod loader;
mod model;
mod state;
mod validator;

pub use loader::{StartPoint, WorldSetup, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what callers use.
pub use error::{LoadError, WorldError};
pub use model::{GameObject, Player, Room};
pub use state::WorldState;
pub use validator::{ValidationError, dangling_room_ids, validate_world};
