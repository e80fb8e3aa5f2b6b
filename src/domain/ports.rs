use crate::domain::model::{PageSource, PdfSettings, RenderedPdf};
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
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn chrome_path(&self) -> Option<&str>;
    fn idle_timeout_secs(&self) -> u64;
}

/// Turns a loaded page into PDF bytes. Implemented against a real headless
/// browser in `core::renderer`; tests substitute an in-process fake.
pub trait Renderer: Send + Sync {
    fn render(&self, url: &str, settings: &PdfSettings) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn prepare(&self) -> Result<PageSource>;
    async fn render(&self, source: PageSource) -> Result<RenderedPdf>;
    async fn save(&self, pdf: RenderedPdf) -> Result<String>;
}
