//! `wh-sim` — the simulation context that owns the grid and plays plans back.
//!
//! # Control flow
//!
//! ```text
//! on_select(coord)
//!   ① Gate       — refuse while more than `max_pending_moves` moves are queued.
//!   ② Selection  — out of bounds clears it; the same cell twice deselects.
//!   ③ Plan       — the live cell decides, the projected grid (live grid +
//!                  queued moves) must hold the same unit there:
//!                    unit in the delivery row → plan_return
//!                    unit in storage          → plan_dispatch
//!                    unit still moving        → PlanInFlight
//!   ④ Verify     — dry-run on the projected grid; refuse on any conflict.
//!   ⑤ Enqueue    — tag the moves with a PlanId and append them to the queue.
//!
//! on_tick()
//!   apply the head move once `move_delay_ticks` have passed since the last
//!   one; settle units that land in the delivery row.
//! ```
//!
//! The [`Sim`] is the only mutator of the grid.  Renderers read it through
//! [`Sim::snapshot`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wh_core::LayoutConfig;
//! use wh_plan::LaneRotationPlanner;
//! use wh_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(LayoutConfig::default(), LaneRotationPlanner).build()?;
//! sim.on_select(Coord::new(5, 3))?;
//! sim.run_until_idle(10_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod scheduler;
pub mod selection;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{Rejection, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::{MoveQueue, QueuedMove};
pub use scheduler::{RunStats, Scheduler, TickOutcome, TickReport};
pub use selection::Selection;
pub use sim::{GridSnapshot, SelectOutcome, Sim};
