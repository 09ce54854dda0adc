//! Process table loading.
//!
//! Reads comma-separated records, one process per line:
//!
//! ```text
//! processID,burstDuration,arrivalTime[,priority]
//! ```
//!
//! Priority defaults to 0 when the record has three fields. Blank lines
//! are skipped and fields are trimmed. Every record must have the same
//! number of fields as the first one. Any malformed record fails the whole
//! load; no partial table is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;
use crate::models::Process;

const STREAM_NAME: &str = "<input>";

/// Parses a process table from a buffered reader.
pub fn parse_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, LoadError> {
    parse_named(reader, Path::new(STREAM_NAME))
}

/// Opens and parses a process table file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = parse_named(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = processes.len(), "loaded process table");
    Ok(processes)
}

fn parse_named<R: BufRead>(reader: R, name: &Path) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    let mut expected_fields: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoadError::Io {
            path: PathBuf::from(name),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match expected_fields {
            None if fields.len() == 3 || fields.len() == 4 => expected_fields = Some(fields.len()),
            None => {
                return Err(LoadError::MalformedRow {
                    line: line_no,
                    fields: fields.len(),
                })
            }
            Some(expected) if expected != fields.len() => {
                return Err(LoadError::InconsistentFieldCount {
                    line: line_no,
                    expected,
                    found: fields.len(),
                })
            }
            Some(_) => {}
        }

        let id = parse_field(line_no, "process ID", fields[0])?;
        let burst = parse_field(line_no, "burst duration", fields[1])?;
        let arrival = parse_field(line_no, "arrival time", fields[2])?;
        let priority = match fields.get(3) {
            Some(raw) => parse_field(line_no, "priority", raw)?,
            None => 0,
        };

        processes.push(Process {
            id,
            arrival,
            burst,
            priority,
        });
    }

    Ok(processes)
}

fn parse_field(line: usize, field: &'static str, raw: &str) -> Result<i64, LoadError> {
    raw.parse().map_err(|source| LoadError::InvalidInteger {
        line,
        field,
        value: raw.to_string(),
        source,
    })
}
