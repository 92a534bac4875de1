//! Fixed-cadence playback of the move queue.
//!
//! # Cadence
//!
//! The scheduler remembers the tick of the last applied (or discarded) move
//! and waits until `move_delay_ticks` have elapsed since then.  While the
//! queue is empty the elapsed count keeps growing, so the first move of the
//! next plan is applied on the very next tick.

use std::fmt;

use tracing::{trace, warn};

use wh_core::{PlanId, Tick, UnitId};
use wh_grid::{Grid, SwapConflict};
use wh_plan::Move;

use crate::{MoveQueue, QueuedMove};

/// What happened on one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing queued.
    Idle,
    /// Moves are queued but the cadence has not elapsed.
    Waiting { ready_at: Tick },
    /// The head move was applied.  `settled` is set when it parked a moving
    /// unit in the delivery row.
    Applied {
        plan:    PlanId,
        mv:      Move,
        settled: Option<UnitId>,
    },
    /// The head move was refused by the grid and discarded.
    Conflict {
        plan:     PlanId,
        mv:       Move,
        conflict: SwapConflict,
    },
}

/// Result of [`Sim::on_tick`][crate::Sim::on_tick].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick:    Tick,
    pub outcome: TickOutcome,
    /// Moves still queued after this tick.
    pub pending: usize,
}

impl TickReport {
    #[inline]
    pub fn applied(&self) -> bool {
        matches!(self.outcome, TickOutcome::Applied { .. })
    }

    #[inline]
    pub fn is_conflict(&self) -> bool {
        matches!(self.outcome, TickOutcome::Conflict { .. })
    }
}

/// Running totals over a number of ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks:     u64,
    pub applied:   usize,
    pub conflicts: usize,
    pub settled:   usize,
}

impl RunStats {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        match report.outcome {
            TickOutcome::Applied { settled, .. } => {
                self.applied += 1;
                self.settled += usize::from(settled.is_some());
            }
            TickOutcome::Conflict { .. } => self.conflicts += 1,
            TickOutcome::Idle | TickOutcome::Waiting { .. } => {}
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks, {} moves applied, {} conflicts, {} units delivered",
            self.ticks, self.applied, self.conflicts, self.settled
        )
    }
}

/// Drains a [`MoveQueue`] into a [`Grid`] one move at a time.
#[derive(Clone, Debug)]
pub struct Scheduler {
    delay:        u64,
    last_applied: Option<Tick>,
}

impl Scheduler {
    pub fn new(move_delay_ticks: u64) -> Self {
        Self {
            delay:        move_delay_ticks,
            last_applied: None,
        }
    }

    /// Apply at most one queued move at tick `now`.
    ///
    /// Never panics: a move the grid refuses is logged and dropped, and the
    /// cadence advances as if it had been applied.
    pub fn tick(&mut self, now: Tick, grid: &mut Grid, queue: &mut MoveQueue) -> TickOutcome {
        if queue.is_empty() {
            return TickOutcome::Idle;
        }
        match self.last_applied {
            Some(last) if now.since(last) < self.delay => {
                return TickOutcome::Waiting { ready_at: last + self.delay };
            }
            _ => {}
        }
        let Some(QueuedMove { plan, mv }) = queue.pop() else {
            return TickOutcome::Idle;
        };
        self.last_applied = Some(now);

        match grid.apply_swap(mv.from, mv.to) {
            Ok(_) => {
                let settled = if mv.to.row == grid.topology().delivery_row() {
                    grid.settle_at(mv.to)
                } else {
                    None
                };
                trace!(%now, %plan, %mv, "move applied");
                TickOutcome::Applied { plan, mv, settled }
            }
            Err(conflict) => {
                warn!(%now, %plan, %mv, %conflict, "queued move refused, discarding");
                TickOutcome::Conflict { plan, mv, conflict }
            }
        }
    }
}
