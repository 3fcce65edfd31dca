use clap::Parser;
use titanic_survival::utils::{logger, monitor::SystemMonitor};
use titanic_survival::{CliConfig, LocalArtifactStore, SurvivalService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting titanic-survival CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let paths = match config.resolve_artifacts() {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    // Load once; a failure leaves the service in a terminal unavailable
    // state and every submission below is rejected with the captured cause.
    let store = LocalArtifactStore::new(".".to_string());
    let service = SurvivalService::load(&store, &paths).await;
    monitor.log_stats("Artifact load");

    let request = config.form_request();
    match request.submit(&service) {
        Ok(message) => {
            monitor.log_stats("Prediction");
            tracing::info!("✅ Prediction completed");
            println!("{}", message);
        }
        Err(e) => {
            tracing::error!(
                "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                titanic_survival::utils::error::ErrorSeverity::Low => 0,
                titanic_survival::utils::error::ErrorSeverity::Medium => 2,
                titanic_survival::utils::error::ErrorSeverity::High => 1,
                titanic_survival::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
