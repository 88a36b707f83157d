use crate::core::{Destination, Pipeline};
use crate::utils::error::Result;

pub struct SkylineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SkylineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Destination> {
        tracing::info!("Starting skyline computation");

        let buildings = self.pipeline.extract().await?;
        tracing::info!("Extracted {} buildings", buildings.len());

        let result = self.pipeline.transform(buildings).await?;
        tracing::info!(
            "Skyline of {} buildings has {} breakpoints ({} trace blocks)",
            result.building_count,
            result.skyline.len(),
            result.trace_log.len()
        );

        let destination = self.pipeline.load(result).await?;
        tracing::info!("Skyline written to {}", destination);

        Ok(destination)
    }
}
