pub mod engine;
pub mod pipeline;
pub mod renderer;

pub use crate::domain::model::{PageSource, PdfSettings, RenderedPdf};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Renderer, Storage};
pub use crate::utils::error::Result;
