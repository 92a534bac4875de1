//! `wh-grid` — the warehouse floor: cells, static topology, and the single
//! swap primitive that mutates it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cell`]      | `Cell` — `Empty`, `Blocked`, `StorageUnit`, `InTransit`   |
//! | [`topology`]  | `Topology`, `Approach` — aisle columns, bands, resolver   |
//! | [`grid`]      | `Grid` — column-major cell matrix + `apply_swap`          |
//! | [`error`]     | `GridError`, `SwapConflict`, `GridResult<T>`              |
//!
//! # Build rules
//!
//! Cells are initialised once, in this precedence:
//!
//! ```text
//! blocked set                         → Blocked
//! aisle column  OR  dispatch band row → Empty
//! otherwise                           → StorageUnit(next id, column-major)
//! ```
//!
//! After construction the only mutations are swaps (`Grid::apply_swap`) and
//! the `StorageUnit` ⇄ `InTransit` relabelling of a single unit.

pub mod cell;
pub mod error;
pub mod grid;
pub mod topology;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use error::{GridError, GridResult, SwapConflict};
pub use grid::Grid;
pub use topology::{Approach, Topology};
