//! CPU scheduling domain models.
//!
//! Provides the data types shared by every simulated discipline: the
//! input process table, the execution timeline, and the per-process and
//! batch-level outcome.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input burst |
//! | `Timeline` / `ExecutionInterval` | Gantt chart data |
//! | `ProcessResult` | Wait / turnaround / completion per process |
//! | `ScheduleSummary` | Averages and throughput |
//! | `ScheduleOutcome` | Everything one simulation produced |

mod algorithm;
mod outcome;
mod process;
mod timeline;

pub use algorithm::{Algorithm, Quantum};
pub use outcome::{ProcessResult, ScheduleOutcome, ScheduleSummary};
pub use process::Process;
pub use timeline::{ExecutionInterval, Timeline};
