//! ASCII rendering of a grid snapshot.

use std::fmt::Write;

use wh_core::Coord;
use wh_grid::Cell;
use wh_sim::GridSnapshot;

/// One character per cell:
///
/// | Char | Cell                      |
/// |------|---------------------------|
/// | `o`  | stored unit               |
/// | `*`  | unit in transit           |
/// | `#`  | blocked                   |
/// | `:`  | empty aisle cell          |
/// | `.`  | any other empty cell      |
/// | `@`  | the selected cell         |
///
/// Aisle columns are marked with `v` in the header and the first dispatch
/// row with `>` in the margin.
pub fn render(snap: &GridSnapshot<'_>) -> String {
    let topo = snap.grid.topology();
    let mut out = String::new();

    out.push_str("   ");
    for column in 0..topo.columns() {
        out.push(if topo.is_aisle_column(column) { 'v' } else { ' ' });
    }
    out.push('\n');

    for row in 0..topo.rows() {
        let margin = if row == topo.lane_row() { '>' } else { ' ' };
        let _ = write!(out, "{row:>2}{margin}");
        for column in 0..topo.columns() {
            let at = Coord::new(column, row);
            let ch = if snap.is_selected(at) {
                '@'
            } else {
                match snap.cell(at) {
                    Some(Cell::StorageUnit(_)) => 'o',
                    Some(Cell::InTransit(_))   => '*',
                    Some(Cell::Blocked)        => '#',
                    Some(Cell::Empty) if topo.is_aisle_column(column) => ':',
                    Some(Cell::Empty) | None   => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "tick {}  |  {} moves queued", snap.tick, snap.pending);
    out
}
