pub mod dashboard;
pub mod dispatch;
pub mod forum;
pub mod open;
pub mod options;
pub mod profile;
pub mod recommendations;
pub mod resources;
pub mod route;
pub mod shared;
pub mod weather;
