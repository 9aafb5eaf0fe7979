use crate::domain::model::{AssignmentRun, DrawInput};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn participants_file(&self) -> &str;
    fn previous_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn file_stem(&self) -> &str;
    fn compress(&self) -> bool;
    fn max_attempts(&self) -> usize;
    fn seed(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<DrawInput>;
    async fn transform(&self, input: DrawInput) -> Result<AssignmentRun>;
    async fn load(&self, run: AssignmentRun) -> Result<Vec<String>>;
}
