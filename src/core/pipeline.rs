use crate::core::keypoints::BaseSkylines;
use crate::core::partition::solve;
use crate::core::records::{parse_buildings, RecordFormat};
use crate::core::trace::{BufferedTrace, NoTrace, StdoutTrace};
use crate::core::{Building, ConfigProvider, Destination, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct SkylinePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SkylinePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn record_format(&self) -> RecordFormat {
        RecordFormat {
            delimiter: self.config.delimiter(),
            trim: self.config.trim_fields(),
            strict: self.config.strict(),
        }
    }
}

/// Trace blocks first, then the skyline itself.
pub fn render_output(result: &TransformResult) -> String {
    let mut rendered = result.trace_log.concat();
    rendered.push_str(&result.skyline.to_string());
    rendered
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SkylinePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Building>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading buildings from: {}", input_path);

        let data = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", data.len());

        parse_buildings(&data, self.record_format())
    }

    async fn transform(&self, buildings: Vec<Building>) -> Result<TransformResult> {
        let building_count = buildings.len();
        let base = BaseSkylines::from_buildings(&buildings)?;

        let (skyline, trace_log) = if !self.config.trace_enabled() {
            (solve(&base, &mut NoTrace), Vec::new())
        } else if self.config.output_path().is_some() {
            let mut trace = BufferedTrace::new();
            let skyline = solve(&base, &mut trace);
            (skyline, trace.into_blocks())
        } else {
            (solve(&base, &mut StdoutTrace), Vec::new())
        };

        tracing::debug!(
            "Merged {} buildings into {} breakpoints",
            building_count,
            skyline.len()
        );

        Ok(TransformResult {
            skyline,
            trace_log,
            building_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Destination> {
        match self.config.output_path() {
            Some(path) => {
                let rendered = render_output(&result);
                tracing::debug!(
                    "Writing {} bytes ({} trace blocks) to {}",
                    rendered.len(),
                    result.trace_log.len(),
                    path
                );
                self.storage
                    .write_new_file(path, rendered.as_bytes())
                    .await?;
                Ok(Destination::File(PathBuf::from(path)))
            }
            None => {
                println!("{}", result.skyline);
                Ok(Destination::Stdout)
            }
        }
    }
}
