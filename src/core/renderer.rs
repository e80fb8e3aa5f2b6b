use crate::domain::model::PdfSettings;
use crate::domain::ports::{ConfigProvider, Renderer};
use crate::utils::error::Result;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::path::PathBuf;
use std::time::Duration;

pub struct ChromeRenderer {
    chrome_path: Option<PathBuf>,
    idle_timeout: Duration,
}

impl ChromeRenderer {
    pub fn new(chrome_path: Option<PathBuf>, idle_timeout: Duration) -> Self {
        Self {
            chrome_path,
            idle_timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.chrome_path().map(PathBuf::from),
            Duration::from_secs(config.idle_timeout_secs()),
        )
    }
}

impl Renderer for ChromeRenderer {
    fn render(&self, url: &str, settings: &PdfSettings) -> Result<Vec<u8>> {
        let launch_options = LaunchOptions {
            headless: true,
            path: self.chrome_path.clone(),
            ..Default::default()
        };

        // Browser 在離開作用域時會自動關閉瀏覽器進程
        let browser = Browser::new(launch_options)?;
        let tab = browser.new_tab()?;
        tab.set_default_timeout(self.idle_timeout);

        tracing::debug!("Navigating to: {}", url);
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;

        tracing::debug!("Printing page to PDF");
        let data = tab.print_to_pdf(Some(print_options(settings)))?;

        Ok(data)
    }
}

fn print_options(settings: &PdfSettings) -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(settings.landscape),
        display_header_footer: Some(false),
        print_background: Some(settings.print_background),
        paper_width: Some(PdfSettings::mm_to_inches(settings.paper_width_mm)),
        paper_height: Some(PdfSettings::mm_to_inches(settings.paper_height_mm)),
        margin_top: Some(PdfSettings::mm_to_inches(settings.margin_top_mm)),
        margin_bottom: Some(PdfSettings::mm_to_inches(settings.margin_bottom_mm)),
        margin_left: Some(PdfSettings::mm_to_inches(settings.margin_left_mm)),
        margin_right: Some(PdfSettings::mm_to_inches(settings.margin_right_mm)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_print_options_use_a4_paper_in_inches() {
        let options = print_options(&PdfSettings::default());

        assert_close(options.paper_width.unwrap(), 210.0 / 25.4);
        assert_close(options.paper_height.unwrap(), 297.0 / 25.4);
    }

    #[test]
    fn test_print_options_convert_margins_to_inches() {
        let options = print_options(&PdfSettings::default());

        assert_close(options.margin_top.unwrap(), 20.0 / 25.4);
        assert_close(options.margin_bottom.unwrap(), 20.0 / 25.4);
        assert_close(options.margin_left.unwrap(), 15.0 / 25.4);
        assert_close(options.margin_right.unwrap(), 15.0 / 25.4);
    }

    #[test]
    fn test_print_options_keep_background_and_portrait() {
        let options = print_options(&PdfSettings::default());

        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.landscape, Some(false));
        assert_eq!(options.display_header_footer, Some(false));
    }
}
