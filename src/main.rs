use clap::Parser;
use usernamecrafter::utils::logger;
use usernamecrafter::{CliConfig, CrafterEngine};

const BANNER: &str = r#"                    =====
                    |@@@|
        John Smith >|***|> J.Smith@dom.com
   =================|===|=================
    |___|___|___|___|+++|___|___|___|___|"#;

fn main() {
    // 完全沒有參數時只提示用法
    if std::env::args_os().len() <= 1 {
        println!("No parameters specified - Restart with -h or --help for options");
        std::process::exit(1);
    }

    let config = CliConfig::parse();

    if config.show_version {
        println!("Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    println!("{}", BANNER);
    println!("            UsernameCrafter v{}\n", env!("CARGO_PKG_VERSION"));

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("[+] - Output file: {}", settings.output_path);
    tracing::info!("[+] - Firstnames file: {}", settings.firstnames_path);
    tracing::info!("[+] - Lastnames file: {}", settings.lastnames_path);
    tracing::info!("[+] - Format: {}", settings.format);

    let monitor_enabled = settings.monitoring;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let output_path = settings.output_path.clone();
    let engine = CrafterEngine::new_with_monitoring(settings, monitor_enabled);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Wrote {} lines to {}", report.lines_written, output_path);
            println!("✅ Wrote {} lines to {}", report.lines_written, output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
