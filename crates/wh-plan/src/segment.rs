//! Routing phases as pure move-list builders.
//!
//! Each builder returns the moves for one phase, in application order, and
//! knows nothing about cell contents.  The planner decides which phases to
//! use and concatenates them.
//!
//! Conventions: `row`/`column` arguments are grid indices; a "hole" is a cell
//! expected to be `Empty` when the phase starts.

use wh_core::Coord;

use crate::Move;

/// Indices from `from` to `to`, both inclusive, in walking order.
pub(crate) fn span(from: usize, to: usize) -> Vec<usize> {
    if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    }
}

/// Walk a single unit along `row` from `from` to `to`, one cell per move.
pub fn walk_lateral(row: usize, from: usize, to: usize) -> Vec<Move> {
    span(from, to)
        .windows(2)
        .map(|w| Move::lateral(row, w[0], w[1]))
        .collect()
}

/// Walk a single unit along `column` from row `from` to row `to`.
pub fn walk_vertical(column: usize, from: usize, to: usize) -> Vec<Move> {
    span(from, to)
        .windows(2)
        .map(|w| Move::vertical(column, w[0], w[1]))
        .collect()
}

/// Slide every cell of `row` between `start` and the hole one step toward
/// the hole.  The moves run from the hole outward, so the hole ends up at
/// `start`.
pub fn shift_into(row: usize, start: usize, hole: usize) -> Vec<Move> {
    span(hole, start)
        .windows(2)
        .map(|w| Move::lateral(row, w[1], w[0]))
        .collect()
}

/// Carry the unit at `(from, row)` into the aisle when the cells in between
/// are occupied, rotating them through `side_row`.
///
/// Each cycle advances the unit one column:
///
/// ```text
///   1. shift row toward the aisle        (unit moves, one neighbour enters the aisle)
///   2. aisle cell hops into side_row
///   3. side_row cell below the gap hops up into row
///   4. shift side_row away from the aisle (aisle cell of side_row is free again)
/// ```
///
/// Once the unit is next to the aisle a single lateral step puts it in.
/// Requires both aisle cells to be empty and no blocked cell in either row
/// between `from` and the aisle.
pub fn lane_swap(row: usize, side_row: usize, from: usize, aisle: usize) -> Vec<Move> {
    let columns = span(from, aisle);
    let mut moves = Vec::new();
    if columns.len() < 2 {
        return moves;
    }
    for &p in &columns[..columns.len() - 2] {
        moves.extend(shift_into(row, p, aisle));
        moves.push(Move::vertical(aisle, row, side_row));
        moves.push(Move::vertical(p, side_row, row));
        moves.extend(shift_into(side_row, aisle, p));
    }
    moves.push(Move::lateral(row, columns[columns.len() - 2], aisle));
    moves
}

/// Rotation maneuver: route the unit at `(from, row)` around a blocked cell
/// in its own row by borrowing `side_row` (next to `row`) and `far_row`
/// (next to `side_row`, on the same side).
///
/// ```text
///   prelude  shift side_row toward the aisle, opening a gap under the unit;
///            the unit drops into side_row
///   cycle    aisle unit of side_row hops to far_row
///            shift side_row toward the aisle   (unit advances one column)
///            far_row cell hops into the gap left behind
///            shift far_row away from the aisle (far_row aisle cell is free again)
/// ```
///
/// One cycle per column of distance.  The unit ends at `(aisle, side_row)`
/// and its old slot `(from, row)` is left empty.  Requires the aisle cells of
/// `side_row` and `far_row` to be empty and no blocked cell in either row
/// between `from` and the aisle.
pub fn rotation_detour(
    row:      usize,
    side_row: usize,
    far_row:  usize,
    from:     usize,
    aisle:    usize,
) -> Vec<Move> {
    let columns = span(from, aisle);
    let mut moves = shift_into(side_row, from, aisle);
    moves.push(Move::vertical(from, row, side_row));
    for &p in &columns[..columns.len() - 1] {
        moves.push(Move::vertical(aisle, side_row, far_row));
        moves.extend(shift_into(side_row, p, aisle));
        moves.push(Move::vertical(p, far_row, side_row));
        moves.extend(shift_into(far_row, aisle, p));
    }
    moves
}

/// From `(aisle, from_row)` down the aisle to the dispatch lane, along the
/// lane to the slot's column, then down into the slot.
pub fn delivery_leg(aisle: usize, from_row: usize, lane_row: usize, slot: Coord) -> Vec<Move> {
    let mut moves = walk_vertical(aisle, from_row, lane_row);
    moves.extend(walk_lateral(lane_row, aisle, slot.column));
    moves.extend(walk_vertical(slot.column, lane_row, slot.row));
    moves
}

/// From a delivery cell: up one row, along that row to `aisle`, up the aisle
/// to the destination row, then along it into the destination.
pub fn return_leg(from: Coord, aisle: usize, destination: Coord) -> Vec<Move> {
    let lift = from.row.saturating_sub(1);
    let mut moves = vec![Move::vertical(from.column, from.row, lift)];
    moves.extend(walk_lateral(lift, from.column, aisle));
    moves.extend(walk_vertical(aisle, lift, destination.row));
    moves.extend(walk_lateral(destination.row, aisle, destination.column));
    moves
}
