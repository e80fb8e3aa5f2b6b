use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MM_PER_INCH: f64 = 25.4;

/// Fixed export geometry: A4 portrait, 20mm top/bottom and 15mm left/right
/// margins, background graphics included. The DevTools print endpoint takes
/// paper sizes in inches, so the renderer converts at that boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfSettings {
    pub paper_width_mm: f64,
    pub paper_height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    pub print_background: bool,
    pub landscape: bool,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            paper_width_mm: 210.0,
            paper_height_mm: 297.0,
            margin_top_mm: 20.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 15.0,
            margin_right_mm: 15.0,
            print_background: true,
            landscape: false,
        }
    }
}

impl PdfSettings {
    pub fn mm_to_inches(mm: f64) -> f64 {
        mm / MM_PER_INCH
    }
}

#[derive(Debug, Clone)]
pub struct PageSource {
    pub path: PathBuf,
    pub url: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub data: Vec<u8>,
    pub settings: PdfSettings,
    pub rendered_at: DateTime<Utc>,
}
