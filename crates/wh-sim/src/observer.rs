//! Simulation observer trait for progress reporting and data collection.

use wh_core::{Coord, PlanId, Tick, UnitId};
use wh_grid::SwapConflict;
use wh_plan::{Move, Plan};

/// Callbacks invoked by [`Sim`][crate::Sim] when plans are accepted and while
/// the scheduler plays them back.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_unit_settled(&mut self, _tick: Tick, _unit: UnitId, _at: Coord) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A plan passed verification and its moves were appended to the queue.
    fn on_plan_queued(&mut self, _id: PlanId, _plan: &Plan) {}

    /// A queued move was applied to the grid.
    fn on_move_applied(&mut self, _tick: Tick, _plan: PlanId, _mv: Move) {}

    /// A queued move was refused by the grid and discarded.
    fn on_conflict(&mut self, _tick: Tick, _plan: PlanId, _mv: Move, _conflict: &SwapConflict) {}

    /// A moving unit came to rest in the delivery row.
    fn on_unit_settled(&mut self, _tick: Tick, _unit: UnitId, _at: Coord) {}

    /// The last queued move was consumed this tick.
    fn on_queue_drained(&mut self, _tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
