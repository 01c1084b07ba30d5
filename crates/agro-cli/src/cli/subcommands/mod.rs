mod forum;
mod profile;
mod resources;

pub use forum::ForumCommands;
pub use profile::{ProfileCommands, SaveFarmArgs};
pub use resources::ResourceCommands;
