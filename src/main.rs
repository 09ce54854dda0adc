use std::process::ExitCode;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cpu_schedule::config::{InputSource, OutputFormat, RunConfig, USAGE};
use cpu_schedule::input::load_processes;
use cpu_schedule::models::Process;
use cpu_schedule::validation::is_arrival_ordered;
use cpu_schedule::workload::WorkloadGenerator;
use cpu_schedule::{report, scheduler};

/// Logs go to stderr so stdout carries only the report.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load(source: &InputSource) -> Result<Vec<Process>> {
    match source {
        InputSource::File(path) => load_processes(path)
            .with_context(|| format!("loading processes from {}", path.display())),
        InputSource::Random { count, seed } => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(*seed),
                None => SmallRng::from_os_rng(),
            };
            let processes = WorkloadGenerator::new(*count).generate(&mut rng);
            info!(count, ?seed, "generated random workload");
            Ok(processes)
        }
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let processes = load(&config.source)?;
    if !is_arrival_ordered(&processes) {
        warn!("process table is not sorted by arrival time");
    }

    let outcomes = config
        .selected_algorithms()
        .into_iter()
        .map(|algorithm| {
            scheduler::run(algorithm, &processes)
                .with_context(|| format!("scheduling processes with {algorithm}"))
        })
        .collect::<Result<Vec<_>>>()?;

    match config.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                print!("{}", report::Report::new(outcome));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes).context("serializing outcomes")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid args: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
