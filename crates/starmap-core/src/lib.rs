pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod fade;
pub mod map;
pub mod panel;
pub mod poi;
pub mod scroll;
pub mod stars;

pub use camera::*;
pub use catalog::default_registry;
pub use config::*;
pub use error::*;
pub use fade::TouchFade;
pub use hit_test::{pick, Hit};
pub use map::StarMap;
pub use panel::*;
pub use poi::*;
pub use scroll::*;
pub use stars::*;
