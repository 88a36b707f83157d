pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, Settings};

pub use core::{engine::SkylineEngine, pipeline::SkylinePipeline};
pub use domain::model::{Building, Destination, Point, Skyline};
pub use utils::error::{Result, SkylineError};
