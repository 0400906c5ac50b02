pub mod api;
pub mod components;
pub mod error;
pub mod navigation;
pub mod projects;

pub use api::*;
pub use components::*;
pub use error::*;
pub use navigation::*;
pub use projects::*;
