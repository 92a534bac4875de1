//! Choosing where a moving unit should end up.

use wh_core::{Coord, Toward};
use wh_grid::Grid;

use crate::segment::span;

/// Pick the storage slot a returning unit should go to.
///
/// Storage cells are scanned column-major.  The first empty one whose row is
/// clear between it and its aisle becomes the candidate; the search then
/// sharpens to the farthest cell of the candidate's row, inside the reach
/// window of the same aisle on the same side, that is empty and equally
/// clear.  Filling from the far end keeps the cells near the aisle free for
/// later returns.
///
/// Returns `None` when no reachable empty storage cell exists.  Pure.
pub fn choose_empty_slot(grid: &Grid) -> Option<Coord> {
    let topo = grid.topology();
    for column in (0..grid.columns()).filter(|&c| !topo.is_aisle_column(c)) {
        for row in 0..topo.storage_rows() {
            let at = Coord::new(column, row);
            if !grid.is_empty_at(at) {
                continue;
            }
            let aisle = topo.nearest_aisle(column);
            if !lateral_clear(grid, row, aisle, column) {
                continue;
            }
            return Some(farthest_in_reach(grid, at, aisle).unwrap_or(at));
        }
    }
    None
}

/// Pick the delivery cell for a unit coming down `aisle`: the leftmost empty
/// cell of the delivery row whose path along the dispatch lane is clear.
pub fn choose_delivery_slot(grid: &Grid, aisle: usize) -> Option<Coord> {
    let topo = grid.topology();
    let lane = topo.lane_row();
    grid.empty_delivery_slots().find(|slot| {
        let along_lane = span(aisle, slot.column)
            .into_iter()
            .all(|c| grid.is_empty_at(Coord::new(c, lane)));
        let down = (lane..slot.row).all(|r| grid.is_empty_at(Coord::new(slot.column, r)));
        along_lane && down
    })
}

/// Every cell strictly between `aisle` and `column` on `row` is empty.
fn lateral_clear(grid: &Grid, row: usize, aisle: usize, column: usize) -> bool {
    let cells = span(aisle, column);
    if cells.len() <= 2 {
        return true;
    }
    cells[1..cells.len() - 1]
        .iter()
        .all(|&c| grid.is_empty_at(Coord::new(c, row)))
}

fn farthest_in_reach(grid: &Grid, candidate: Coord, aisle: usize) -> Option<Coord> {
    let side = Toward::between(aisle, candidate.column);
    let (near, far) = grid.topology().reach(aisle, side)?;
    span(far, near)
        .into_iter()
        .map(|c| Coord::new(c, candidate.row))
        .find(|&at| grid.is_empty_at(at) && lateral_clear(grid, at.row, aisle, at.column))
}
