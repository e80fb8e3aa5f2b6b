use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting HTML to PDF conversion...");

        // Prepare
        println!("Resolving input page...");
        let source = self.pipeline.prepare().await?;
        println!("Resolved {} ({} bytes)", source.path.display(), source.size_bytes);
        self.monitor.log_stats("Prepare");

        // Render
        println!("Rendering page in headless browser...");
        let pdf = self.pipeline.render(source).await?;
        println!("Rendered {} bytes of PDF", pdf.data.len());
        self.monitor.log_stats("Render");

        // Save
        println!("Writing output file...");
        let output_path = self.pipeline.save(pdf).await?;
        self.monitor.log_stats("Save");

        println!("PDF generated successfully: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
