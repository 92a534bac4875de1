//! Unit tests for wh-grid.

use wh_core::{Coord, LayoutConfig, Toward, UnitId};

use crate::{Cell, Grid, SwapConflict};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 18 × 10, aisles at 6 and 12, blocked cells at columns {3, 9, 15} × rows {2, 5}.
fn scenario_layout() -> LayoutConfig {
    let blocked = [3, 9, 15]
        .into_iter()
        .flat_map(|c| [2, 5].into_iter().map(move |r| Coord::new(c, r)));
    LayoutConfig::default().with_blocked(blocked)
}

fn scenario_grid() -> Grid {
    Grid::new(scenario_layout()).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::*;

    #[test]
    fn aisle_columns_are_empty_in_every_row() {
        let grid = scenario_grid();
        for column in [6, 12] {
            for row in 0..10 {
                assert_eq!(grid.cell(Coord::new(column, row)), Some(Cell::Empty), "({column}, {row})");
            }
        }
    }

    #[test]
    fn dispatch_rows_are_empty() {
        let grid = scenario_grid();
        for column in 0..18 {
            for row in [8, 9] {
                assert!(grid.is_empty_at(Coord::new(column, row)));
            }
        }
    }

    #[test]
    fn blocked_cells_take_precedence() {
        let grid = scenario_grid();
        for column in [3, 9, 15] {
            for row in [2, 5] {
                assert_eq!(grid.cell(Coord::new(column, row)), Some(Cell::Blocked));
            }
        }
    }

    #[test]
    fn ids_are_column_major_and_skip_non_storage() {
        let grid = scenario_grid();
        assert_eq!(grid.cell(Coord::new(0, 0)), Some(Cell::StorageUnit(UnitId(0))));
        assert_eq!(grid.cell(Coord::new(0, 7)), Some(Cell::StorageUnit(UnitId(7))));
        assert_eq!(grid.cell(Coord::new(1, 2)), Some(Cell::StorageUnit(UnitId(10))));
        // Column 3 skips rows 2 and 5.
        assert_eq!(grid.cell(Coord::new(3, 1)), Some(Cell::StorageUnit(UnitId(25))));
        assert_eq!(grid.cell(Coord::new(3, 3)), Some(Cell::StorageUnit(UnitId(26))));
        assert_eq!(grid.cell(Coord::new(3, 6)), Some(Cell::StorageUnit(UnitId(28))));
        // Column 6 is an aisle, so column 7 continues right after column 5.
        assert_eq!(grid.cell(Coord::new(5, 7)), Some(Cell::StorageUnit(UnitId(45))));
        assert_eq!(grid.cell(Coord::new(7, 0)), Some(Cell::StorageUnit(UnitId(46))));
    }

    #[test]
    fn unit_count_matches_storage_cells() {
        let grid = scenario_grid();
        // 180 cells − 20 aisle − 32 dispatch (non-aisle) − 6 blocked.
        assert_eq!(grid.unit_count(), 122);
        let ids = grid.unit_ids();
        assert_eq!(ids.len(), 122);
        assert_eq!(ids.first(), Some(&UnitId(0)));
        assert_eq!(ids.last(), Some(&UnitId(121)));
    }

    #[test]
    fn invalid_layout_fails() {
        let bad = LayoutConfig::default().with_blocked([Coord::new(40, 1)]);
        assert!(Grid::new(bad).is_err());
    }

    #[test]
    fn locate_finds_units() {
        let grid = scenario_grid();
        assert_eq!(grid.locate(UnitId(26)), Some(Coord::new(3, 3)));
        assert_eq!(grid.locate(UnitId(9_999)), None);
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let grid = scenario_grid();
        assert_eq!(grid.cell(Coord::new(18, 0)), None);
        assert_eq!(grid.cell(Coord::new(0, 10)), None);
        assert!(!grid.is_empty_at(Coord::new(18, 9)));
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use super::*;

    #[test]
    fn aisles_and_bands() {
        let grid = scenario_grid();
        let topo = grid.topology();
        assert_eq!(topo.aisles().collect::<Vec<_>>(), vec![6, 12]);
        assert_eq!(topo.first_aisle(), 6);
        assert_eq!(topo.last_aisle(), 12);
        assert_eq!(topo.storage_rows(), 8);
        assert_eq!(topo.lane_row(), 8);
        assert_eq!(topo.delivery_row(), 9);
        assert_eq!(topo.blocked().count(), 6);
    }

    #[test]
    fn nearest_aisle_every_column() {
        let grid = scenario_grid();
        let topo = grid.topology();
        let resolved: Vec<usize> = (0..18).map(|c| topo.nearest_aisle(c)).collect();
        assert_eq!(
            resolved,
            vec![6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 12, 12, 12, 12, 12, 12, 12, 12]
        );
    }

    #[test]
    fn ties_break_toward_lower_aisle() {
        let layout = LayoutConfig { columns: 20, aisle_freq: 4, ..LayoutConfig::default() };
        let grid = Grid::new(layout).unwrap();
        // 6 % 4 == 2 == 4 / 2 → lower aisle.
        assert_eq!(grid.topology().nearest_aisle(6), 4);
        assert_eq!(grid.topology().nearest_aisle(7), 8);
    }

    #[test]
    fn odd_period_has_no_tie() {
        let layout = LayoutConfig { columns: 20, aisle_freq: 5, ..LayoutConfig::default() };
        let grid = Grid::new(layout).unwrap();
        let topo = grid.topology();
        assert_eq!(topo.aisles().collect::<Vec<_>>(), vec![5, 10, 15]);
        assert_eq!(topo.nearest_aisle(7), 5);
        assert_eq!(topo.nearest_aisle(8), 10);
        assert_eq!(topo.nearest_aisle(19), 15);
    }

    #[test]
    fn last_aisle_fits_inside_grid() {
        // 18 columns with period 6: column 18 would be an aisle but does not exist.
        let grid = scenario_grid();
        assert_eq!(grid.topology().nearest_aisle(17), 12);
        // 19 columns: column 18 exists and is the last aisle.
        let layout = LayoutConfig { columns: 19, ..LayoutConfig::default() };
        let grid = Grid::new(layout).unwrap();
        assert_eq!(grid.topology().last_aisle(), 18);
        assert_eq!(grid.topology().nearest_aisle(16), 18);
        assert_eq!(grid.topology().nearest_aisle(15), 12);
    }

    #[test]
    fn approach_direction_and_distance() {
        let grid = scenario_grid();
        let topo = grid.topology();
        let a = topo.approach(3);
        assert_eq!((a.aisle, a.toward, a.distance), (6, Toward::Right, 3));
        let b = topo.approach(16);
        assert_eq!((b.aisle, b.toward, b.distance), (12, Toward::Left, 4));
        let c = topo.approach(12);
        assert_eq!((c.aisle, c.toward, c.distance), (12, Toward::Here, 0));
    }

    #[test]
    fn reach_windows() {
        let grid = scenario_grid();
        let topo = grid.topology();
        assert_eq!(topo.reach(6, Toward::Left), Some((5, 0)));
        assert_eq!(topo.reach(6, Toward::Right), Some((7, 9)));
        assert_eq!(topo.reach(12, Toward::Left), Some((11, 10)));
        assert_eq!(topo.reach(12, Toward::Right), Some((13, 17)));
        assert_eq!(topo.reach(6, Toward::Here), None);
    }

    #[test]
    fn reach_can_be_empty_on_one_side() {
        let layout = LayoutConfig { columns: 9, aisle_freq: 2, ..LayoutConfig::default() };
        let grid = Grid::new(layout).unwrap();
        let topo = grid.topology();
        // Column 3 ties between 2 and 4 and goes to 2, so 4 serves nothing on its left.
        assert_eq!(topo.reach(4, Toward::Left), None);
        assert_eq!(topo.reach(2, Toward::Right), Some((3, 3)));
        assert_eq!(topo.reach(8, Toward::Left), None);
    }

    #[test]
    fn storage_cell_predicate() {
        let grid = scenario_grid();
        let topo = grid.topology();
        assert!(topo.is_storage_cell(Coord::new(0, 0)));
        assert!(!topo.is_storage_cell(Coord::new(6, 0)));
        assert!(!topo.is_storage_cell(Coord::new(0, 8)));
        assert!(!topo.is_storage_cell(Coord::new(3, 2)));
        assert!(!topo.is_storage_cell(Coord::new(18, 0)));
    }
}

// ── Swaps and relabelling ─────────────────────────────────────────────────────

#[cfg(test)]
mod swaps {
    use super::*;

    #[test]
    fn swap_into_empty_moves_unit() {
        let mut grid = scenario_grid();
        let moved = grid.apply_swap(Coord::new(5, 3), Coord::new(6, 3)).unwrap();
        assert_eq!(moved, Cell::StorageUnit(UnitId(41)));
        assert!(grid.is_empty_at(Coord::new(5, 3)));
        assert_eq!(grid.locate(UnitId(41)), Some(Coord::new(6, 3)));
    }

    #[test]
    fn swap_of_two_empties_is_allowed() {
        let mut grid = scenario_grid();
        assert_eq!(grid.apply_swap(Coord::new(6, 0), Coord::new(6, 1)), Ok(Cell::Empty));
    }

    #[test]
    fn occupied_destination_is_refused() {
        let mut grid = scenario_grid();
        let before = grid.clone();
        let err = grid.apply_swap(Coord::new(0, 0), Coord::new(1, 0)).unwrap_err();
        assert_eq!(
            err,
            SwapConflict::Occupied { at: Coord::new(1, 0), occupant: Cell::StorageUnit(UnitId(8)) }
        );
        assert_eq!(grid.iter().collect::<Vec<_>>(), before.iter().collect::<Vec<_>>());
    }

    #[test]
    fn blocked_cells_never_move() {
        let mut grid = scenario_grid();
        // Blocked as destination.
        assert_eq!(
            grid.apply_swap(Coord::new(3, 1), Coord::new(3, 2)),
            Err(SwapConflict::Blocked(Coord::new(3, 2)))
        );
        // Blocked as source, even into an empty cell.
        let mut open = Grid::new(
            LayoutConfig::default().with_blocked([Coord::new(5, 0)]),
        )
        .unwrap();
        assert_eq!(
            open.apply_swap(Coord::new(5, 0), Coord::new(6, 0)),
            Err(SwapConflict::Blocked(Coord::new(5, 0)))
        );
        assert_eq!(grid.cell(Coord::new(3, 2)), Some(Cell::Blocked));
    }

    #[test]
    fn non_adjacent_and_out_of_bounds_are_refused() {
        let mut grid = scenario_grid();
        assert!(matches!(
            grid.apply_swap(Coord::new(4, 3), Coord::new(6, 3)),
            Err(SwapConflict::NotAdjacent { .. })
        ));
        assert!(matches!(
            grid.apply_swap(Coord::new(6, 3), Coord::new(6, 3)),
            Err(SwapConflict::NotAdjacent { .. })
        ));
        assert_eq!(
            grid.apply_swap(Coord::new(17, 9), Coord::new(18, 9)),
            Err(SwapConflict::OutOfBounds(Coord::new(18, 9)))
        );
    }

    #[test]
    fn in_transit_round_trip() {
        let mut grid = scenario_grid();
        assert!(grid.mark_in_transit(UnitId(26)));
        assert_eq!(grid.cell(Coord::new(3, 3)), Some(Cell::InTransit(UnitId(26))));
        assert_eq!(grid.settle_at(Coord::new(3, 3)), Some(UnitId(26)));
        assert_eq!(grid.settle_at(Coord::new(3, 3)), None);
        assert_eq!(grid.cell(Coord::new(3, 3)), Some(Cell::StorageUnit(UnitId(26))));
        assert!(!grid.mark_in_transit(UnitId(5_000)));
    }

    #[test]
    fn delivery_slots() {
        let mut grid = scenario_grid();
        assert!(grid.has_empty_delivery_slot());
        assert_eq!(grid.empty_delivery_slots().count(), 18);
        grid.apply_swap(Coord::new(5, 7), Coord::new(6, 7)).unwrap();
        grid.apply_swap(Coord::new(6, 7), Coord::new(6, 8)).unwrap();
        grid.apply_swap(Coord::new(6, 8), Coord::new(6, 9)).unwrap();
        assert_eq!(grid.empty_delivery_slots().count(), 17);
        assert_eq!(grid.empty_delivery_slots().nth(6), Some(Coord::new(7, 9)));
    }
}
