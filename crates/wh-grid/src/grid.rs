//! The cell matrix.

use wh_core::{Coord, LayoutConfig, UnitId};

use crate::{Cell, GridResult, SwapConflict, Topology};

/// A fixed `columns × rows` matrix of [`Cell`]s plus its [`Topology`].
///
/// Cells are stored column-major (`column * rows + row`), the same order in
/// which unit ids are handed out, so iterating the backing `Vec` visits units
/// in id order on a freshly built grid.
///
/// `Grid` is cheap enough to clone that the planner verifies every plan on a
/// scratch copy before it is queued.
#[derive(Clone, Debug)]
pub struct Grid {
    topology:   Topology,
    cells:      Vec<Cell>,
    unit_count: usize,
}

impl Grid {
    /// Validate `layout` and build the initial floor.
    pub fn new(layout: LayoutConfig) -> GridResult<Self> {
        let topology = Topology::new(layout)?;
        let (columns, rows) = (topology.columns(), topology.rows());

        let mut cells = Vec::with_capacity(columns * rows);
        let mut next = UnitId(0);
        for column in 0..columns {
            for row in 0..rows {
                let at = Coord::new(column, row);
                let cell = if topology.is_blocked(at) {
                    Cell::Blocked
                } else if topology.is_aisle_column(column) || topology.is_dispatch_row(row) {
                    Cell::Empty
                } else {
                    let id = next;
                    next = next.next();
                    Cell::StorageUnit(id)
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            topology,
            cells,
            unit_count: next.0 as usize,
        })
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.topology.columns()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.topology.rows()
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        self.topology.contains(at)
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        at.column * self.topology.rows() + at.row
    }

    #[inline]
    fn coord_of(&self, index: usize) -> Coord {
        let rows = self.topology.rows();
        Coord::new(index / rows, index % rows)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// The cell at `at`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.contains(at).then(|| self.cells[self.index(at)])
    }

    /// `true` if `at` is inside the grid and holds nothing.
    #[inline]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.cell(at) == Some(Cell::Empty)
    }

    /// All cells in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord_of(i), cell))
    }

    /// Where `unit` currently is.  O(cells); the grid is small.
    pub fn locate(&self, unit: UnitId) -> Option<Coord> {
        self.cells
            .iter()
            .position(|c| c.unit() == Some(unit))
            .map(|i| self.coord_of(i))
    }

    /// Number of units created at build time.  Conserved by every swap.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Ids of every unit on the floor, ascending.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        let mut ids: Vec<UnitId> = self.cells.iter().filter_map(|c| c.unit()).collect();
        ids.sort_unstable();
        ids
    }

    /// Empty cells of the delivery row, left to right.
    pub fn empty_delivery_slots(&self) -> impl Iterator<Item = Coord> + '_ {
        let row = self.topology.delivery_row();
        (0..self.columns())
            .map(move |column| Coord::new(column, row))
            .filter(|&at| self.is_empty_at(at))
    }

    pub fn has_empty_delivery_slot(&self) -> bool {
        self.empty_delivery_slots().next().is_some()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Exchange the contents of two adjacent cells.
    ///
    /// The swap only happens when `to` is `Empty` and `from` is not blocked;
    /// on any conflict the grid is left untouched.  Returns the cell that
    /// landed on `to` (which may itself be `Empty`).
    pub fn apply_swap(&mut self, from: Coord, to: Coord) -> Result<Cell, SwapConflict> {
        for at in [from, to] {
            if !self.contains(at) {
                return Err(SwapConflict::OutOfBounds(at));
            }
        }
        if !from.is_adjacent(to) {
            return Err(SwapConflict::NotAdjacent { from, to });
        }
        let (fi, ti) = (self.index(from), self.index(to));
        for (at, i) in [(from, fi), (to, ti)] {
            if self.cells[i].is_blocked() {
                return Err(SwapConflict::Blocked(at));
            }
        }
        let occupant = self.cells[ti];
        if !occupant.is_empty() {
            return Err(SwapConflict::Occupied { at: to, occupant });
        }
        self.cells.swap(fi, ti);
        Ok(self.cells[ti])
    }

    /// Relabel `unit` as moving.  Returns `false` if it is not on the floor.
    pub fn mark_in_transit(&mut self, unit: UnitId) -> bool {
        self.relabel(unit, Cell::in_transit)
    }

    /// Park whatever moving unit stands on `at`.  Returns its id if a
    /// relabel happened.
    pub fn settle_at(&mut self, at: Coord) -> Option<UnitId> {
        let i = self.contains(at).then(|| self.index(at))?;
        match self.cells[i] {
            cell @ Cell::InTransit(id) => {
                self.cells[i] = cell.settled();
                Some(id)
            }
            _ => None,
        }
    }

    fn relabel(&mut self, unit: UnitId, f: fn(Cell) -> Cell) -> bool {
        match self.cells.iter_mut().find(|c| c.unit() == Some(unit)) {
            Some(cell) => {
                *cell = f(*cell);
                true
            }
            None => false,
        }
    }
}
