use clap::Parser;
use top_contributors::utils::{logger, validation::Validate};
use top_contributors::{load_results, CliConfig, LocalStorage, ReportEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting top-contributors");
    tracing::debug!("CLI config: {:?}", cli);

    // 合併 TOML 與命令列設定並驗證
    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let run = || -> top_contributors::Result<String> {
        let results = load_results(&config.input_path)?;
        let engine = ReportEngine::from_config(&config);
        engine.run(&results, &LocalStorage::new(config.output_path.clone()))
    };

    match run() {
        Ok(destination) => {
            tracing::info!("✅ Report written to {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
