use crate::domain::model::{Building, Destination, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Writes `data` to a file that must not exist yet.
    fn write_new_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn trace_enabled(&self) -> bool;
    fn strict(&self) -> bool;
    fn delimiter(&self) -> u8;
    fn trim_fields(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Building>>;
    async fn transform(&self, buildings: Vec<Building>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Destination>;
}

/// Receives one text block per recursive call of the partitioner.
pub trait TraceSink {
    fn append(&mut self, text: &str);

    /// When false, callers skip rendering blocks altogether.
    fn enabled(&self) -> bool {
        true
    }
}
