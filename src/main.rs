use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trip_algo::config::{LoggingSettings, Settings};
use trip_algo::services::{build_report, load_flights, write_report};
use trip_algo::TripPlanner;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Starting Trip Algo planner...");

    let flights = match load_flights(&settings.input.flights_path) {
        Ok(flights) => flights,
        Err(e) => {
            error!("Failed to load flights from {}: {}", settings.input.flights_path, e);
            return ExitCode::FAILURE;
        }
    };

    let thresholds = settings.ranking.thresholds();
    info!("Planner initialized with thresholds: {:?}", thresholds);

    let planner = TripPlanner::new(thresholds);
    let budget = settings.planner.budget;

    let result = match planner.plan(&flights, budget) {
        Ok(result) => result,
        Err(e) => {
            error!("Planning failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(cheapest) = &result.summary.cheapest {
        info!("Cheapest: {}", cheapest);
    }
    if let Some(longest) = &result.summary.longest {
        info!("Longest stay: {}", longest);
    }
    for (position, ranked) in result.recommendations.iter().enumerate() {
        info!(
            "#{} {} ${:.2} ({} days, {}) - {}",
            position + 1,
            ranked.option.destination,
            ranked.option.total_price,
            ranked.option.stay_duration,
            ranked.season_info,
            ranked.recommendation
        );
    }

    if let Some(export_path) = &settings.output.export_path {
        let report = build_report(result, budget, settings.planner.label.clone());
        if let Err(e) = write_report(&report, export_path) {
            error!("Failed to export report to {}: {}", export_path, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
