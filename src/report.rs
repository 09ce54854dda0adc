//! Text report rendering.
//!
//! Turns a [`ScheduleOutcome`] into the three-part report printed for each
//! discipline: a title banner, a Gantt chart, and a timing table.
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0	5	14	20
//! ```

use std::fmt::{self, Write};

use crate::models::{ScheduleOutcome, Timeline};

const GANTT_CELL: usize = 8;
const HEADERS: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Renders the full report for one outcome.
pub fn render(out: &mut impl Write, outcome: &ScheduleOutcome) -> fmt::Result {
    render_title(out, outcome.algorithm.title())?;
    render_gantt(out, &outcome.timeline.coalesced())?;
    render_table(out, outcome)
}

/// Full report for one outcome, printable with `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a ScheduleOutcome,
}

impl<'a> Report<'a> {
    /// Wraps an outcome for display.
    pub fn new(outcome: &'a ScheduleOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.outcome)
    }
}

/// Title framed by dashes twice its length.
pub fn render_title(out: &mut impl Write, title: &str) -> fmt::Result {
    let rule = "-".repeat(title.len() * 2);
    writeln!(out, "{rule}")?;
    writeln!(out, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(out, "{rule}")
}

/// Gantt chart: a row of process ids, then a row of boundary times.
pub fn render_gantt(out: &mut impl Write, timeline: &Timeline) -> fmt::Result {
    writeln!(out, "Gantt schedule")?;
    out.write_char('|')?;
    for iv in timeline.intervals() {
        let pid = iv.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(out, "{padding}{pid}{padding}|")?;
    }
    writeln!(out)?;

    let intervals = timeline.intervals();
    for (i, iv) in intervals.iter().enumerate() {
        write!(out, "{}\t", iv.start)?;
        if i + 1 == intervals.len() {
            write!(out, "{}", iv.stop)?;
        }
    }
    write!(out, "\n\n")
}

/// Timing table with an averages footer.
pub fn render_table(out: &mut impl Write, outcome: &ScheduleOutcome) -> fmt::Result {
    writeln!(out, "Schedule table")?;

    let rows: Vec<[String; 7]> = outcome
        .results
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let s = &outcome.summary;
    let footer_labels = ["", "", "", "", "Average", "Average", "Throughput"];
    let footer_values = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", s.average_wait),
        format!("{:.2}", s.average_turnaround),
        format!("{:.2}/t", s.throughput),
    ];

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    for (w, (label, value)) in widths
        .iter_mut()
        .zip(footer_labels.iter().zip(&footer_values))
    {
        *w = (*w).max(label.len()).max(value.len());
    }

    let border = border(&widths);
    writeln!(out, "{border}")?;
    write_row(out, &widths, HEADERS.iter().map(|h| h.to_uppercase()), Align::Center)?;
    writeln!(out, "{border}")?;
    for row in &rows {
        write_row(out, &widths, row.iter().cloned(), Align::Right)?;
    }
    writeln!(out, "{border}")?;
    write_row(out, &widths, footer_labels.iter().map(|l| l.to_uppercase()), Align::Right)?;
    write_row(out, &widths, footer_values.iter().cloned(), Align::Right)?;
    writeln!(out, "{border}")
}

#[derive(Clone, Copy)]
enum Align {
    Center,
    Right,
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn write_row(
    out: &mut impl Write,
    widths: &[usize],
    cells: impl Iterator<Item = String>,
    align: Align,
) -> fmt::Result {
    out.write_char('|')?;
    for (w, cell) in widths.iter().zip(cells) {
        match align {
            Align::Center => write!(out, " {cell:^w$} |", w = *w)?,
            Align::Right => write!(out, " {cell:>w$} |", w = *w)?,
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, RoundRobin, Scheduler};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5).with_priority(2),
            Process::new(2, 9).with_arrival(3).with_priority(1),
            Process::new(3, 6).with_arrival(6).with_priority(3),
        ]
    }

    #[test]
    fn test_title() {
        let mut out = String::new();
        render_title(&mut out, "FCFS").unwrap();
        assert_eq!(out, "--------\n   FCFS\n--------\n");
    }

    #[test]
    fn test_gantt() {
        let outcome = Fcfs.schedule(&sample()).unwrap();
        let mut out = String::new();
        render_gantt(&mut out, &outcome.timeline).unwrap();
        assert_eq!(
            out,
            "Gantt schedule\n|   1   |   2   |   3   |\n0\t5\t14\t20\n\n"
        );
    }

    #[test]
    fn test_gantt_empty() {
        let mut out = String::new();
        render_gantt(&mut out, &Timeline::new()).unwrap();
        assert_eq!(out, "Gantt schedule\n|\n\n\n");
    }

    #[test]
    fn test_table() {
        let outcome = Fcfs.schedule(&sample()).unwrap();
        let mut out = String::new();
        render_table(&mut out, &outcome).unwrap();
        let expected = "\
Schedule table
+----+----------+-------+---------+---------+------------+------------+
| ID | PRIORITY | BURST | ARRIVAL |  WAIT   | TURNAROUND |    EXIT    |
+----+----------+-------+---------+---------+------------+------------+
|  1 |        2 |     5 |       0 |       0 |          5 |          5 |
|  2 |        1 |     9 |       3 |       2 |         11 |         14 |
|  3 |        3 |     6 |       6 |       8 |         14 |         20 |
+----+----------+-------+---------+---------+------------+------------+
|    |          |       |         | AVERAGE |    AVERAGE | THROUGHPUT |
|    |          |       |         |    3.33 |      10.00 |     0.15/t |
+----+----------+-------+---------+---------+------------+------------+
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_uses_coalesced_timeline() {
        let outcome = RoundRobin::default()
            .schedule(&[Process::new(1, 5)])
            .unwrap();
        let report = Report::new(&outcome).to_string();
        assert!(report.starts_with("----------------------\n      Round-robin\n"));
        assert!(report.contains("|   1   |\n0\t5\n"));
        assert!(report.contains("Schedule table"));
    }
}
