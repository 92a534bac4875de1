//! `wh-plan` — turns a selected unit into an ordered list of cell swaps.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`moves`]       | `Move`, `Plan`, `PlanKind`                                |
//! | [`segment`]     | Pure builders for each routing phase → `Vec<Move>`        |
//! | [`placement`]   | `choose_empty_slot`, `choose_delivery_slot`               |
//! | [`planner`]     | `RoutePlanner` trait, `LaneRotationPlanner`               |
//! | [`verify`]      | `verify` (dry-run a plan), `project` (replay a queue)     |
//! | [`error`]       | `PlanError`, `PlanResult<T>`                              |
//!
//! # Dispatch route
//!
//! ```text
//!   storage slot ──lateral──▶ aisle ──down──▶ dispatch lane ──lateral──▶ column ──down──▶ delivery row
//!        │
//!        └─ row not clear?  lane-swap cycles with the neighbouring row
//!        └─ blocked cell?   rotation maneuver through the next two rows
//! ```
//!
//! Every phase is built by a function in [`segment`] and the phases are
//! concatenated.  A plan is self-consistent: applied in order to the grid it
//! was planned on, every move lands on an `Empty` cell.

pub mod error;
pub mod moves;
pub mod placement;
pub mod planner;
pub mod segment;
pub mod verify;


pub use error::{PlanError, PlanResult};
pub use moves::{Move, Plan, PlanKind};
pub use placement::{choose_delivery_slot, choose_empty_slot};
pub use planner::{LaneRotationPlanner, RoutePlanner, move_budget};
pub use verify::{project, verify};
