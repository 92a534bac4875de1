//! Routing trait and the default lane-rotation planner.
//!
//! # Pluggability
//!
//! `wh-sim` plans through the [`RoutePlanner`] trait, so a different routing
//! strategy can be dropped in without touching the scheduler or the grid.
//!
//! # Choosing the aisle phase
//!
//! ```text
//!   distance < 2, or row clear up to the aisle    → walk_lateral
//!   blocked cell between unit and aisle           → rotation_detour  (rows y+v, y+2v)
//!   otherwise                                     → lane_swap        (row y+v)
//! ```
//!
//! `v` is `+1` (toward the dispatch band) unless the unit already sits in the
//! last storage row; when the preferred side has no room, or a blocked cell in
//! its rows, the other side is tried before giving up with
//! [`PlanError::NoDetour`].

use tracing::debug;

use wh_core::Coord;
use wh_grid::{Grid, Topology};

use crate::placement::{choose_delivery_slot, choose_empty_slot};
use crate::segment::{delivery_leg, lane_swap, return_leg, rotation_detour, span, walk_lateral};
use crate::{Move, Plan, PlanError, PlanKind, PlanResult};

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable planning engine.
///
/// Both operations are pure: they read `grid` and return the moves that
/// carry the unit at `at` to its destination, in application order.  The
/// caller is responsible for verifying and queueing the result.
pub trait RoutePlanner {
    /// Plan the route from the storage slot `at` to a delivery cell.
    fn plan_dispatch(&self, grid: &Grid, at: Coord) -> PlanResult<Plan>;

    /// Plan the route from the delivery cell `at` back into storage.
    fn plan_return(&self, grid: &Grid, at: Coord) -> PlanResult<Plan>;
}

/// Upper bound on the number of moves any single plan may contain.
///
/// A lane-swap or rotation cycle costs at most `2 · aisle_freq + 2` moves and
/// there is at most one cycle per column of distance to the aisle; the legs
/// through the aisle and the dispatch band add at most one move per row and
/// column crossed.
pub fn move_budget(topology: &Topology) -> usize {
    let f = topology.aisle_freq();
    4 * f * (f + 2) + 2 * (topology.columns() + topology.rows())
}

// ── LaneRotationPlanner ───────────────────────────────────────────────────────

/// The default planner: aisle, then dispatch lane, then delivery row, with
/// lane swaps and rotation maneuvers to get past whatever is in the way.
#[derive(Copy, Clone, Debug, Default)]
pub struct LaneRotationPlanner;

impl LaneRotationPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Moves that put the unit at `at` into its aisle, plus the row it ends
    /// up in.
    fn to_aisle(&self, grid: &Grid, at: Coord) -> PlanResult<(Vec<Move>, usize)> {
        let topo = grid.topology();
        let approach = topo.approach(at.column);
        let aisle = approach.aisle;
        let lane = span(at.column, aisle);
        let between = &lane[1..lane.len() - 1];

        let clear = between.iter().all(|&c| grid.is_empty_at(Coord::new(c, at.row)));
        if approach.distance < 2 || clear {
            return Ok((walk_lateral(at.row, at.column, aisle), at.row));
        }

        let blocked_in = |row: usize| lane.iter().any(|&c| topo.is_blocked(Coord::new(c, row)));
        let sides = rotation_sides(topo, at.row);

        if between.iter().any(|&c| topo.is_blocked(Coord::new(c, at.row))) {
            for v in sides {
                let (Some(side_row), Some(far_row)) = (
                    storage_row(topo, at.row, v),
                    storage_row(topo, at.row, 2 * v),
                ) else {
                    continue;
                };
                if blocked_in(side_row) || blocked_in(far_row) {
                    continue;
                }
                debug!(%at, aisle, side_row, far_row, "rotation maneuver around blocked cell");
                let moves = rotation_detour(at.row, side_row, far_row, at.column, aisle);
                return Ok((moves, side_row));
            }
            return Err(PlanError::NoDetour(at));
        }

        for v in sides {
            let Some(side_row) = storage_row(topo, at.row, v) else {
                continue;
            };
            if blocked_in(side_row) {
                continue;
            }
            debug!(%at, aisle, side_row, "lane swap toward aisle");
            return Ok((lane_swap(at.row, side_row, at.column, aisle), at.row));
        }
        Err(PlanError::NoDetour(at))
    }
}

impl RoutePlanner for LaneRotationPlanner {
    fn plan_dispatch(&self, grid: &Grid, at: Coord) -> PlanResult<Plan> {
        let cell = grid.cell(at).ok_or(PlanError::OutOfBounds(at))?;
        let unit = cell.unit().ok_or(PlanError::NotAUnit { at, cell })?;
        let topo = grid.topology();
        if !topo.is_storage_cell(at) {
            return Err(PlanError::NotInStorage(at));
        }

        let aisle = topo.nearest_aisle(at.column);
        let slot = choose_delivery_slot(grid, aisle).ok_or(PlanError::NoEmptyDeliverySlot)?;

        let (mut moves, row) = self.to_aisle(grid, at)?;
        moves.extend(delivery_leg(aisle, row, topo.lane_row(), slot));

        debug!(%unit, from = %at, to = %slot, moves = moves.len(), "dispatch planned");
        Ok(Plan {
            kind:        PlanKind::Dispatch,
            unit,
            origin:      at,
            destination: slot,
            moves,
        })
    }

    fn plan_return(&self, grid: &Grid, at: Coord) -> PlanResult<Plan> {
        let cell = grid.cell(at).ok_or(PlanError::OutOfBounds(at))?;
        let unit = cell.unit().ok_or(PlanError::NotAUnit { at, cell })?;
        let topo = grid.topology();
        if at.row != topo.delivery_row() {
            return Err(PlanError::NotInDeliveryRow(at));
        }

        let destination = choose_empty_slot(grid).ok_or(PlanError::NoEmptySlot)?;
        let aisle = topo.nearest_aisle(destination.column);
        let moves = return_leg(at, aisle, destination);

        debug!(%unit, from = %at, to = %destination, moves = moves.len(), "return planned");
        Ok(Plan {
            kind:   PlanKind::Return,
            unit,
            origin: at,
            destination,
            moves,
        })
    }
}

/// Preferred rotation direction first, then the other one.
fn rotation_sides(topology: &Topology, row: usize) -> [isize; 2] {
    if row + 1 == topology.storage_rows() {
        [-1, 1]
    } else {
        [1, -1]
    }
}

/// `row + delta` if it is a storage row.
fn storage_row(topology: &Topology, row: usize, delta: isize) -> Option<usize> {
    row.checked_add_signed(delta)
        .filter(|&r| r < topology.storage_rows())
}
