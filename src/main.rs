//! qsort-grid - Recommends a Q-sort grid for a study.
//!
//! Reads study parameters (YAML or JSON) from stdin and prints a JSON report
//! on stdout. Logs go to stderr.

use std::error::Error;
use std::io::{self, Read};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qsort_grid::application::{GridService, RecommendGridQuery};
use qsort_grid::config::{AppConfig, LoggingConfig};
use qsort_grid::domain::recommendation::StudyParameters;

fn main() -> ExitCode {
    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("qsort-grid: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let params = parse_parameters(&input)?;
    info!(?params, "study parameters read");

    let service = GridService::from_config(&config);
    let report = service.recommend.handle(&RecommendGridQuery { params })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.filter)?,
    };

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

/// An empty document means "use the defaults".
fn parse_parameters(input: &str) -> Result<StudyParameters, serde_yaml::Error> {
    if input.trim().is_empty() {
        return Ok(StudyParameters::default());
    }
    serde_yaml::from_str(input)
}
