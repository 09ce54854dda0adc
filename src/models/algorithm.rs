//! Scheduling discipline identifiers and the round-robin quantum.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Time slice granted per turn in round-robin scheduling.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantum(i64);

impl Quantum {
    /// Two ticks per turn.
    pub const DEFAULT: Quantum = Quantum(2);

    /// Largest representable slice; round-robin then degenerates to FCFS.
    pub const UNBOUNDED: Quantum = Quantum(i64::MAX);

    /// Creates a quantum, rejecting zero and negative slices.
    pub fn new(ticks: i64) -> Result<Self, ScheduleError> {
        if ticks <= 0 {
            return Err(ScheduleError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    /// Slice length in ticks.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// The four simulated scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Algorithm {
    /// First-come, first-served (non-preemptive).
    Fcfs,
    /// Preemptive shortest-remaining-time-first.
    Sjf,
    /// Preemptive priority with shortest-remaining tie-break.
    PrioritySjf,
    /// Round-robin with a fixed quantum.
    RoundRobin {
        /// Slice per turn.
        quantum: Quantum,
    },
}

impl Algorithm {
    /// All four disciplines in report order.
    pub fn all(quantum: Quantum) -> [Algorithm; 4] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::PrioritySjf,
            Self::RoundRobin { quantum },
        ]
    }

    /// Short machine-friendly name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::PrioritySjf => "priority_sjf",
            Self::RoundRobin { .. } => "round_robin",
        }
    }

    /// Report banner title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-come, first-serve",
            Self::Sjf => "Shortest-job-first",
            Self::PrioritySjf => "Priority",
            Self::RoundRobin { .. } => "Round-robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub const fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fcfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{}(q={})", self.as_str(), quantum.ticks()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Parses a discipline name; round-robin gets the default quantum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "srt" | "srtf" => Ok(Self::Sjf),
            "priority" | "priority_sjf" | "prio" => Ok(Self::PrioritySjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin {
                quantum: Quantum::DEFAULT,
            }),
            _ => Err(format!(
                "Invalid algorithm '{s}'. Valid: fcfs, sjf, priority, round_robin"
            )),
        }
    }
}
