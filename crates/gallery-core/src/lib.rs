pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod picking;
pub mod pose;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod surface;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use picking::*;
pub use pose::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;
pub use surface::*;
