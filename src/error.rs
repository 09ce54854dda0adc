//! Error types.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures surfaced by the simulations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The process table failed validation.
    #[error("Invalid process table: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    /// Round-robin quantum must be at least one tick.
    #[error("Invalid quantum: {0} (must be > 0)")]
    InvalidQuantum(i64),

    /// A simulation ended without running a process to completion.
    #[error("Process {process_id} never completed")]
    Unfinished {
        /// Offending process.
        process_id: i64,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failures while reading a process table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be read.
    #[error("error reading {path}: {source}")]
    Io {
        /// File being read (or `<input>` for streams).
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not have 3 or 4 fields.
    #[error("line {line}: expected 3 or 4 fields, found {fields}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// Fields found.
        fields: usize,
    },

    /// A record's field count differs from the first record's.
    #[error("line {line}: wrong number of fields (expected {expected}, found {found})")]
    InconsistentFieldCount {
        /// 1-based line number.
        line: usize,
        /// Field count of the first record.
        expected: usize,
        /// Field count of this record.
        found: usize,
    },

    /// A field was not an integer.
    #[error("line {line}: invalid {field} '{value}': {source}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Column name.
        field: &'static str,
        /// Raw text.
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failures while parsing command-line arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a file nor `--random` was given.
    #[error("must give a scheduling file to process")]
    MissingInput,

    /// Both a file and `--random` were given, or two files.
    #[error("conflicting inputs: {0}")]
    ConflictingInput(String),

    /// Unrecognized `--flag`.
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// A flag that takes a value was last on the line.
    #[error("flag '{0}' requires a value")]
    MissingValue(String),

    /// `--algorithm` named no known discipline.
    #[error("{0}")]
    UnknownAlgorithm(String),

    /// A flag value was not a valid number.
    #[error("invalid value '{value}' for '{flag}'")]
    InvalidNumber {
        /// Flag name.
        flag: String,
        /// Raw text.
        value: String,
    },
}
