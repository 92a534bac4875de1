//! `wh-core` — foundational types for the `wh` shelf-routing simulator.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `UnitId`, `PlanId`                                    |
//! | [`coord`]       | `Coord`, `Toward`                                     |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `LayoutConfig`, `SimConfig`                           |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `WhError`, `WhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LayoutConfig, SimConfig};
pub use coord::{Coord, Toward};
pub use error::{WhError, WhResult};
pub use ids::{PlanId, UnitId};
pub use rng::SimRng;
pub use time::Tick;
