//! Round-robin scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival has been reached to the tail of a
//!    FIFO ready queue (arrival order, ties by input order).
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit arrivals reached during or at the end of that slice, *then*
//!    requeue the process if it still has work.
//! 4. With an empty queue, idle until the next arrival.
//!
//! Each slice is recorded as its own interval, even when the same process
//! runs again immediately; [`Timeline::coalesced`] merges them for display.
//!
//! # Termination
//! Every slice runs at least one tick; every idle step moves the clock to
//! a strictly later arrival.

use std::collections::VecDeque;

use tracing::trace;

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Algorithm, Process, Quantum, Timeline};

/// Preemptive round-robin scheduler with a fixed quantum.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    /// Creates a scheduler with the given time slice.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn simulate(&self, processes: &[Process]) -> Timeline {
        let mut ctx = SchedulingContext::new(processes);
        let mut timeline = Timeline::new();

        let mut pending: VecDeque<usize> = RuleEngine::new()
            .with_rule(rules::Fifo)
            .sort_indices(processes, &ctx)
            .into_iter()
            .filter(|&i| !ctx.is_finished(i))
            .collect();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());

        admit(&mut pending, &mut ready, processes, ctx.clock);

        while ctx.unfinished() > 0 {
            let Some(current) = ready.pop_front() else {
                match pending.front() {
                    Some(&next) => {
                        let arrival = processes[next].arrival;
                        trace!(from = ctx.clock, until = arrival, "cpu idle");
                        ctx.idle_until(arrival);
                        admit(&mut pending, &mut ready, processes, ctx.clock);
                        continue;
                    }
                    None => break,
                }
            };

            let pid = processes[current].id;
            let slice = self.quantum.ticks().min(ctx.remaining(current));
            let start = ctx.clock;
            let left = ctx.run(current, slice);
            timeline.push(pid, start, ctx.clock);
            trace!(pid, start, stop = ctx.clock, left, "slice");

            admit(&mut pending, &mut ready, processes, ctx.clock);

            if left > 0 {
                ready.push_back(current);
            } else {
                trace!(pid, completion = ctx.clock, "completed");
            }
        }

        timeline
    }
}

/// Moves every pending process that has arrived by `clock` to the ready tail.
fn admit(
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    processes: &[Process],
    clock: i64,
) {
    while let Some(&next) = pending.front() {
        if !processes[next].has_arrived(clock) {
            break;
        }
        trace!(pid = processes[next].id, at = clock, "arrival");
        ready.push_back(next);
        pending.pop_front();
    }
}
