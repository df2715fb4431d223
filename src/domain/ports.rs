use crate::domain::model::{Language, Member, Post};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ReportStore: Send + Sync {
    fn save(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
    fn load(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_name(&self) -> &str;
    fn language(&self) -> Language;
    fn members(&self) -> &[Member];
    fn source_endpoint(&self) -> &str;
    fn featured_post(&self) -> u64;
    fn output_path(&self) -> &str;
    fn report_filename(&self) -> &str;
}

#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch(&self, id: u64) -> Result<Post>;
}
