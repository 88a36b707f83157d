pub mod engine;
pub mod keypoints;
pub mod merge;
pub mod partition;
pub mod pipeline;
pub mod records;
pub mod trace;

pub use crate::domain::model::{Building, Destination, Point, Skyline, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TraceSink};
pub use crate::utils::error::Result;
