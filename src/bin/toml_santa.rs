use clap::Parser;
use secret_santa::adapters::input::{parse_participants, parse_prior_assignments};
use secret_santa::core::{ConfigProvider, Storage};
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{AssignmentEngine, FilePipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-santa")]
#[command(about = "Secret Santa draw driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "santa.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the RNG seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Override matching.max_attempts from config
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Parse inputs and show what would run, without drawing or writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🎅 Starting TOML-based Secret Santa draw");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.matching.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }
    if let Some(max_attempts) = args.max_attempts {
        config.matching.max_attempts = max_attempts;
        tracing::info!("🔧 Max attempts overridden to: {}", max_attempts);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let storage = LocalStorage::new(".");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no draw, no output");
        perform_dry_run(&storage, &config).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = FilePipeline::new(storage, config);
    let engine = AssignmentEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(written) => {
            println!("✅ Secret Santa assignments generated!");
            for path in written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Secret Santa run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            if e.is_retryable() {
                eprintln!("🔁 The draw is random, running it again may succeed");
            }
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Run: {}", config.run.name);
    if let Some(description) = &config.run.description {
        println!("  Description: {}", description);
    }
    println!("  Participants: {}", config.participants_file());
    println!(
        "  Previous: {}",
        config.previous_file().unwrap_or("(none)")
    );
    println!("  Max Attempts: {}", config.max_attempts());
    match config.seed() {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: (entropy)"),
    }
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    if config.compress() {
        println!("  Compression: {}.zip", config.file_stem());
    }
    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}

async fn perform_dry_run(
    storage: &LocalStorage,
    config: &TomlConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Dry Run Analysis:");

    let data = storage.read_file(config.participants_file()).await?;
    let participants = parse_participants(config.participants_file(), &data)?;
    println!("  👥 Participants: {}", participants.len());

    if let Some(previous) = config.previous_file() {
        let data = storage.read_file(previous).await?;
        let prior = parse_prior_assignments(previous, &data)?;
        println!("  🔁 Previous pairs excluded: {}", prior.len());
    }

    if let Err(e) = secret_santa::validate(&participants) {
        println!("  ⚠️ {}", e);
    }

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}
