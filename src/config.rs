//! Run configuration parsed from command-line arguments.
//!
//! ```text
//! cpu-schedule <FILE> [--algorithm NAME]... [--quantum N] [--json]
//! cpu-schedule --random COUNT [--seed S] [--algorithm NAME]... [--quantum N] [--json]
//! ```
//!
//! Without `--algorithm` all four disciplines run in report order.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{Algorithm, Quantum};

/// Usage line shown on configuration errors.
pub const USAGE: &str =
    "usage: cpu-schedule <FILE> | --random COUNT [--seed S] [--algorithm NAME]... [--quantum N] [--json]";

/// Where the process table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// CSV file on disk.
    File(PathBuf),
    /// Generated batch.
    Random {
        /// Number of processes.
        count: usize,
        /// RNG seed; `None` draws one from the OS.
        seed: Option<u64>,
    },
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Banner, Gantt chart and table per discipline.
    #[default]
    Text,
    /// Pretty-printed JSON array of outcomes.
    Json,
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Process table source.
    pub source: InputSource,
    /// Disciplines to run, in order; empty runs all four.
    #[serde(default)]
    pub algorithms: Vec<Algorithm>,
    /// Round-robin time slice.
    #[serde(default)]
    pub quantum: Quantum,
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl RunConfig {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut file: Option<PathBuf> = None;
        let mut random: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut algorithms: Vec<Algorithm> = Vec::new();
        let mut quantum = Quantum::DEFAULT;
        let mut format = OutputFormat::Text;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => format = OutputFormat::Json,
                "--algorithm" | "-a" => {
                    let name = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    algorithms.push(
                        name.parse::<Algorithm>()
                            .map_err(ConfigError::UnknownAlgorithm)?,
                    );
                }
                "--quantum" | "-q" => {
                    let ticks: i64 = parse_value(&arg, args.next())?;
                    quantum = Quantum::new(ticks).map_err(|_| ConfigError::InvalidNumber {
                        flag: arg.clone(),
                        value: ticks.to_string(),
                    })?;
                }
                "--random" => random = Some(parse_value(&arg, args.next())?),
                "--seed" => seed = Some(parse_value(&arg, args.next())?),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ => {
                    if let Some(existing) = &file {
                        return Err(ConfigError::ConflictingInput(format!(
                            "{} and {arg}",
                            existing.display()
                        )));
                    }
                    file = Some(PathBuf::from(arg.as_str()));
                }
            }
        }

        let source = match (file, random) {
            (Some(path), None) => InputSource::File(path),
            (None, Some(count)) => InputSource::Random { count, seed },
            (Some(path), Some(_)) => {
                return Err(ConfigError::ConflictingInput(format!(
                    "{} and --random",
                    path.display()
                )))
            }
            (None, None) => return Err(ConfigError::MissingInput),
        };

        // The slice is a separate flag, so it may follow `--algorithm rr`.
        for algorithm in &mut algorithms {
            if let Algorithm::RoundRobin { quantum: q } = algorithm {
                *q = quantum;
            }
        }

        Ok(Self {
            source,
            algorithms,
            quantum,
            format,
        })
    }

    /// Disciplines to run, in report order.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::all(self.quantum).to_vec()
        } else {
            self.algorithms.clone()
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}
