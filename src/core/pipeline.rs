use crate::core::{ConfigProvider, PageSource, PdfSettings, Pipeline, RenderedPdf, Renderer, Storage};
use crate::utils::error::{PdfError, Result};
use std::path::{Path, PathBuf};
use url::Url;

pub struct ChromePipeline<S: Storage, C: ConfigProvider, R: Renderer> {
    storage: S,
    config: C,
    renderer: R,
    settings: PdfSettings,
}

impl<S: Storage, C: ConfigProvider, R: Renderer> ChromePipeline<S, C, R> {
    pub fn new(storage: S, config: C, renderer: R) -> Self {
        Self {
            storage,
            config,
            renderer,
            // 頁面設定是固定的：A4、20/15mm 邊距、列印背景
            settings: PdfSettings::default(),
        }
    }

    fn resolve_output_path(&self) -> String {
        match self.config.output_path() {
            Some(path) => path.to_string(),
            None => Path::new(self.config.input_path())
                .with_extension("pdf")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, R: Renderer> Pipeline for ChromePipeline<S, C, R> {
    async fn prepare(&self) -> Result<PageSource> {
        let input = self.config.input_path();
        tracing::debug!("Reading input page: {}", input);

        // 缺檔要在啟動瀏覽器之前就失敗
        let data = self.storage.read_file(input).await?;
        if data.is_empty() {
            tracing::warn!("Input page {} is empty, the PDF will be blank", input);
        }

        let absolute: PathBuf = std::path::absolute(input)?;
        let url = Url::from_file_path(&absolute).map_err(|_| PdfError::ProcessingError {
            message: format!("Cannot build a file:// URL for {}", absolute.display()),
        })?;

        Ok(PageSource {
            path: absolute,
            url: url.to_string(),
            size_bytes: data.len(),
        })
    }

    async fn render(&self, source: PageSource) -> Result<RenderedPdf> {
        tracing::debug!("Rendering {} ({} bytes of HTML)", source.url, source.size_bytes);

        let data = self.renderer.render(&source.url, &self.settings)?;

        if data.is_empty() {
            return Err(PdfError::ProcessingError {
                message: format!("Renderer produced an empty document for {}", source.url),
            });
        }

        Ok(RenderedPdf {
            data,
            settings: self.settings.clone(),
            rendered_at: chrono::Utc::now(),
        })
    }

    async fn save(&self, pdf: RenderedPdf) -> Result<String> {
        let output_path = self.resolve_output_path();

        tracing::debug!("Writing PDF ({} bytes) to {}", pdf.data.len(), output_path);
        self.storage.write_file(&output_path, &pdf.data).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn insert(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PdfError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockRenderer {
        payload: Vec<u8>,
    }

    impl MockRenderer {
        fn pdf() -> Self {
            Self {
                payload: b"%PDF-1.7 fake document".to_vec(),
            }
        }

        fn empty() -> Self {
            Self {
                payload: Vec::new(),
            }
        }
    }

    impl Renderer for MockRenderer {
        fn render(&self, _url: &str, _settings: &PdfSettings) -> Result<Vec<u8>> {
            Ok(self.payload.clone())
        }
    }

    struct MockConfig {
        input: String,
        output: Option<String>,
    }

    impl MockConfig {
        fn new(input: &str) -> Self {
            Self {
                input: input.to_string(),
                output: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn chrome_path(&self) -> Option<&str> {
            None
        }

        fn idle_timeout_secs(&self) -> u64 {
            30
        }
    }

    fn sample_source() -> PageSource {
        PageSource {
            path: PathBuf::from("/pages/landing.html"),
            url: "file:///pages/landing.html".to_string(),
            size_bytes: 64,
        }
    }

    #[tokio::test]
    async fn test_prepare_builds_file_url() {
        let storage = MockStorage::new();
        storage.insert("pages/landing.html", b"<html></html>").await;

        let config = MockConfig::new("pages/landing.html");
        let pipeline = ChromePipeline::new(storage, config, MockRenderer::pdf());

        let source = pipeline.prepare().await.unwrap();

        assert!(source.url.starts_with("file://"));
        assert!(source.url.ends_with("landing.html"));
        assert!(source.path.is_absolute());
        assert_eq!(source.size_bytes, b"<html></html>".len());
    }

    #[tokio::test]
    async fn test_prepare_missing_input_fails() {
        let pipeline = ChromePipeline::new(
            MockStorage::new(),
            MockConfig::new("missing.html"),
            MockRenderer::pdf(),
        );

        let result = pipeline.prepare().await;

        assert!(matches!(result, Err(PdfError::IoError(_))));
    }

    #[tokio::test]
    async fn test_prepare_accepts_empty_input() {
        let storage = MockStorage::new();
        storage.insert("pages/blank.html", b"").await;

        let pipeline = ChromePipeline::new(
            storage,
            MockConfig::new("pages/blank.html"),
            MockRenderer::pdf(),
        );

        let source = pipeline.prepare().await.unwrap();

        assert_eq!(source.size_bytes, 0);
    }

    #[tokio::test]
    async fn test_render_produces_pdf_bytes() {
        let pipeline = ChromePipeline::new(
            MockStorage::new(),
            MockConfig::new("pages/landing.html"),
            MockRenderer::pdf(),
        );

        let pdf = pipeline.render(sample_source()).await.unwrap();

        assert!(pdf.data.starts_with(b"%PDF"));
        assert_eq!(pdf.settings, PdfSettings::default());
    }

    #[tokio::test]
    async fn test_render_rejects_empty_document() {
        let pipeline = ChromePipeline::new(
            MockStorage::new(),
            MockConfig::new("pages/landing.html"),
            MockRenderer::empty(),
        );

        let result = pipeline.render(sample_source()).await;

        assert!(matches!(result, Err(PdfError::ProcessingError { .. })));
    }

    #[tokio::test]
    async fn test_save_derives_sibling_pdf_path() {
        let storage = MockStorage::new();
        let pipeline = ChromePipeline::new(
            storage.clone(),
            MockConfig::new("pages/landing.html"),
            MockRenderer::pdf(),
        );

        let pdf = pipeline.render(sample_source()).await.unwrap();
        let output_path = pipeline.save(pdf).await.unwrap();

        assert_eq!(output_path, "pages/landing.pdf");
        assert!(storage.get_file("pages/landing.pdf").await.is_some());
    }

    #[tokio::test]
    async fn test_save_uses_explicit_output_path() {
        let storage = MockStorage::new();
        let config = MockConfig {
            input: "pages/landing.html".to_string(),
            output: Some("out/custom.pdf".to_string()),
        };
        let pipeline = ChromePipeline::new(storage.clone(), config, MockRenderer::pdf());

        let pdf = pipeline.render(sample_source()).await.unwrap();
        let output_path = pipeline.save(pdf).await.unwrap();

        assert_eq!(output_path, "out/custom.pdf");
        assert!(storage.get_file("out/custom.pdf").await.is_some());
    }
}
