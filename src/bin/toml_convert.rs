use clap::Parser;
use small_pdf::config::toml_config::TomlConfig;
use small_pdf::domain::ports::ConfigProvider;
use small_pdf::utils::{logger, validation::Validate};
use small_pdf::{ChromePipeline, ChromeRenderer, ConvertEngine, LocalStorage, PdfSettings};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "HTML to PDF conversion driven by a TOML job file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "convert.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from the job file
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be converted without launching a browser
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based conversion tool");
    tracing::info!("📁 Loading job file: {}", args.config);

    // 載入 TOML 工作檔
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Job file validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Job file loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No browser will be launched");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲、渲染器與管道
    let storage = LocalStorage::new(".".to_string());
    let renderer = ChromeRenderer::from_config(&config);
    let pipeline = ChromePipeline::new(storage, config, renderer);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 PDF saved to: {}", output_path);
            println!("✅ Conversion completed successfully!");
            println!("📁 PDF saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_pdf::utils::error::ErrorSeverity::Low => 0,
                small_pdf::utils::error::ErrorSeverity::Medium => 2,
                small_pdf::utils::error::ErrorSeverity::High => 1,
                small_pdf::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Job Summary:");
    println!("  Job: {}", config.job.name);

    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }

    println!("  Input: {}", config.input_path());
    println!("  Output: {}", resolved_output(config));
    println!("  Idle timeout: {}s", config.idle_timeout_secs());

    if let Some(chrome) = config.chrome_path() {
        println!("  Chrome binary: {}", chrome);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn resolved_output(config: &TomlConfig) -> String {
    match config.output_path() {
        Some(path) => path.to_string(),
        None => Path::new(config.input_path())
            .with_extension("pdf")
            .to_string_lossy()
            .into_owned(),
    }
}

fn perform_dry_run(config: &TomlConfig) {
    let settings = PdfSettings::default();

    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📄 Page:");
    println!("  Input: {}", config.input_path());
    println!("  Exists: {}", Path::new(config.input_path()).exists());

    println!();
    println!("🖨️ Fixed layout:");
    println!(
        "  Paper: {:.0}mm x {:.0}mm {}",
        settings.paper_width_mm,
        settings.paper_height_mm,
        if settings.landscape { "landscape" } else { "portrait" }
    );
    println!(
        "  Margins: {:.0}mm top/bottom, {:.0}mm left/right",
        settings.margin_top_mm, settings.margin_left_mm
    );
    println!(
        "  Background graphics: {}",
        if settings.print_background { "printed" } else { "skipped" }
    );

    println!();
    println!("💾 Output:");
    println!("  Path: {}", resolved_output(config));

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during the actual run.");
}
