use clap::Parser;
use nba_fg_report::core::{ConfigProvider, Outcome};
use nba_fg_report::report::seed::seed_records;
use nba_fg_report::utils::error::{ErrorSeverity, ReportError};
use nba_fg_report::utils::{logger, validation::Validate};
use nba_fg_report::{
    CliConfig, DataSource, EtlEngine, HttpPageSource, LocalStorage, StatsPipeline, TomlConfig,
};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting nba-fg-report");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config '{}' from {}", config.pipeline.name, path);
                let monitor = cli.monitor || config.monitoring_enabled();
                run(config, monitor, cli.dunks).await
            }
            Err(e) => Err(e),
        },
        None => {
            let (monitor, dunks) = (cli.monitor, cli.dunks);
            run(cli, monitor, dunks).await
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run<C>(config: C, monitor: bool, dunks: bool) -> Result<(), ReportError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;
    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = HttpPageSource::new(
        Duration::from_secs(config.timeout_seconds()),
        config.user_agent(),
    )?;
    let storage = LocalStorage::new(config.output_path());
    let seed_fallback = config.seed_fallback();
    let pipeline = StatsPipeline::new(storage, source, config);

    if dunks {
        return print_dunks(&pipeline).await;
    }

    let mut engine = EtlEngine::new_with_monitoring(pipeline, monitor);
    if seed_fallback {
        engine = engine.with_fallback(seed_records());
    }

    let summary = engine.run().await?;
    if summary.source == DataSource::Seed {
        println!("⚠️  Live data unavailable, report built from the bundled roster");
    }
    println!("✅ Report built for {} players", summary.players);
    println!("📁 Output saved to: {}", summary.output_path);
    Ok(())
}

async fn print_dunks<C: ConfigProvider>(
    pipeline: &StatsPipeline<LocalStorage, HttpPageSource, C>,
) -> Result<(), ReportError> {
    match pipeline.dunk_stats().await? {
        Outcome::Data(records) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Outcome::Insufficient {
            extracted,
            required,
        } => Err(ReportError::InsufficientDataError {
            extracted,
            required,
        }),
    }
}
