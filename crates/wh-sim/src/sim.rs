//! The `Sim` context: grid, move queue, scheduler and selection in one place.

use tracing::{debug, info};

use wh_core::{Coord, PlanId, SimConfig, Tick, UnitId};
use wh_grid::{Cell, Grid};
use wh_plan::{PlanError, PlanKind, RoutePlanner, project, verify};

use crate::{
    MoveQueue, NoopObserver, Rejection, RunStats, Scheduler, Selection, SimObserver, TickOutcome,
    TickReport,
};

// ── Select outcome ────────────────────────────────────────────────────────────

/// What an accepted selection did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The cell is now selected; nothing was planned for it.
    Selected(Coord),
    /// The cell was already selected and has been deselected.
    Deselected,
    /// A plan for the unit on the cell was verified and queued.
    Queued {
        id:          PlanId,
        kind:        PlanKind,
        unit:        UnitId,
        destination: Coord,
        moves:       usize,
    },
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Read-only view for renderers.
#[derive(Copy, Clone, Debug)]
pub struct GridSnapshot<'a> {
    pub grid:      &'a Grid,
    pub selection: Selection,
    pub tick:      Tick,
    pub pending:   usize,
}

impl GridSnapshot<'_> {
    #[inline]
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.grid.cell(at)
    }

    #[inline]
    pub fn is_selected(&self, at: Coord) -> bool {
        self.selection.is(at)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation context.
///
/// `Sim<P>` owns every piece of mutable state.  The grid changes only in
/// [`on_tick`](Self::on_tick) (move playback) and when a plan is accepted
/// (the unit's `InTransit` relabel).  Planning itself reads a projected copy.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RoutePlanner> {
    /// Playback parameters.
    pub config: SimConfig,

    /// Current tick; advanced once per [`on_tick`](Self::on_tick).
    pub clock: Tick,

    pub(crate) grid:      Grid,
    pub(crate) queue:     MoveQueue,
    pub(crate) scheduler: Scheduler,
    pub(crate) selection: Selection,
    pub(crate) planner:   P,
    pub(crate) next_plan: PlanId,
}

impl<P: RoutePlanner> Sim<P> {
    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn queue(&self) -> &MoveQueue {
        &self.queue
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// `true` when no moves are waiting.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot {
            grid:      &self.grid,
            selection: self.selection,
            tick:      self.clock,
            pending:   self.queue.len(),
        }
    }

    /// The grid as it will be once the queue has drained.
    pub fn projected_grid(&self) -> Grid {
        project(&self.grid, self.queue.moves())
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Handle a click on `at`.  See the crate docs for the decision order.
    pub fn on_select(&mut self, at: Coord) -> Result<SelectOutcome, Rejection> {
        self.on_select_observed(at, &mut NoopObserver)
    }

    pub fn on_select_observed<O: SimObserver>(
        &mut self,
        at: Coord,
        observer: &mut O,
    ) -> Result<SelectOutcome, Rejection> {
        let pending = self.queue.len();
        if pending > self.config.max_pending_moves {
            debug!(%at, pending, "selection ignored, plan in flight");
            return Err(Rejection::PlanInFlight { pending });
        }
        if !self.grid.contains(at) {
            self.selection.clear();
            return Err(Rejection::OutOfBounds(at));
        }
        if self.selection.is(at) {
            self.selection.clear();
            return Ok(SelectOutcome::Deselected);
        }
        self.selection.select(at);

        // What is on screen decides; the projected grid only has to agree.
        let Some(unit) = self.grid.cell(at).and_then(Cell::unit) else {
            return Ok(SelectOutcome::Selected(at));
        };
        let projected = self.projected_grid();
        if projected.cell(at).and_then(Cell::unit) != Some(unit) {
            debug!(%at, %unit, pending, "selection ignored, unit still moving");
            return Err(Rejection::PlanInFlight { pending });
        }
        let topo = projected.topology();

        let plan = if at.row == topo.delivery_row() {
            self.planner.plan_return(&projected, at)
        } else if topo.is_storage_cell(at) {
            if !projected.has_empty_delivery_slot() {
                return Err(PlanError::NoEmptyDeliverySlot.into());
            }
            self.planner.plan_dispatch(&projected, at)
        } else {
            return Ok(SelectOutcome::Selected(at));
        };
        let plan = plan.inspect_err(|e| debug!(%at, error = %e, "no plan"))?;
        verify(&projected, &plan.moves)?;

        if plan.kind == PlanKind::Dispatch {
            self.grid.mark_in_transit(plan.unit);
        }

        let id = self.next_plan;
        self.next_plan = id.next();
        info!(
            %id, kind = %plan.kind, unit = %plan.unit,
            from = %plan.origin, to = %plan.destination, moves = plan.len(),
            "plan queued"
        );
        self.queue.enqueue(id, plan.moves.iter().copied());
        observer.on_plan_queued(id, &plan);

        Ok(SelectOutcome::Queued {
            id,
            kind:        plan.kind,
            unit:        plan.unit,
            destination: plan.destination,
            moves:       plan.len(),
        })
    }

    // ── Playback ──────────────────────────────────────────────────────────

    /// Advance one tick: apply at most one queued move.
    pub fn on_tick(&mut self) -> TickReport {
        self.on_tick_observed(&mut NoopObserver)
    }

    pub fn on_tick_observed<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.clock;
        let outcome = self.scheduler.tick(now, &mut self.grid, &mut self.queue);

        match &outcome {
            TickOutcome::Applied { plan, mv, settled } => {
                observer.on_move_applied(now, *plan, *mv);
                if let Some(unit) = settled {
                    observer.on_unit_settled(now, *unit, mv.to);
                }
            }
            TickOutcome::Conflict { plan, mv, conflict } => {
                observer.on_conflict(now, *plan, *mv, conflict);
            }
            TickOutcome::Idle | TickOutcome::Waiting { .. } => {}
        }
        let consumed = matches!(
            outcome,
            TickOutcome::Applied { .. } | TickOutcome::Conflict { .. }
        );
        if consumed && self.queue.is_empty() {
            observer.on_queue_drained(now);
        }

        self.clock = now + 1;
        TickReport {
            tick: now,
            outcome,
            pending: self.queue.len(),
        }
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> RunStats {
        let mut stats = RunStats::default();
        for _ in 0..n {
            stats.record(&self.on_tick_observed(observer));
        }
        stats
    }

    /// Tick until the queue is empty or `max_ticks` have passed.
    pub fn run_until_idle<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> RunStats {
        let mut stats = RunStats::default();
        while !self.queue.is_empty() && stats.ticks < max_ticks {
            stats.record(&self.on_tick_observed(observer));
        }
        stats
    }
}
