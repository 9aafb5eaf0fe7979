use clap::Parser;
use secret_santa::utils::error::SantaError;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{AssignmentEngine, CliConfig, FilePipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🎅 Starting secret-santa CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    let pipeline = FilePipeline::new(LocalStorage::new("."), config);
    let engine = AssignmentEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(written) => {
            println!("✅ Secret Santa assignments generated!");
            for path in written {
                println!("📁 {}", path);
            }
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: SantaError) -> ! {
    tracing::error!(
        "❌ Secret Santa run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    if e.is_retryable() {
        eprintln!("🔁 The draw is random, running it again may succeed");
    }

    std::process::exit(e.exit_code());
}
