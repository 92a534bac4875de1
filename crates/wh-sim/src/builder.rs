//! Fluent builder for constructing a [`Sim`].

use wh_core::{LayoutConfig, PlanId, SimConfig, Tick};
use wh_grid::Grid;
use wh_plan::RoutePlanner;

use crate::{MoveQueue, Scheduler, Selection, Sim, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`LayoutConfig`] — grid size, aisle period, dispatch band, blocked cells
/// - `P: RoutePlanner` — the planner (e.g. [`wh_plan::LaneRotationPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.config(c)`    | `SimConfig::default()` (30 ticks, 1 move) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(layout, LaneRotationPlanner)
///     .config(SimConfig { move_delay_ticks: 0, ..SimConfig::default() })
///     .build()?;
/// ```
pub struct SimBuilder<P: RoutePlanner> {
    layout:  LayoutConfig,
    config:  SimConfig,
    planner: P,
}

impl<P: RoutePlanner> SimBuilder<P> {
    pub fn new(layout: LayoutConfig, planner: P) -> Self {
        Self {
            layout,
            config: SimConfig::default(),
            planner,
        }
    }

    /// Override the playback parameters.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the layout, build the initial grid, and return a ready
    /// [`Sim`] at tick 0 with an empty queue.
    pub fn build(self) -> SimResult<Sim<P>> {
        let grid = Grid::new(self.layout)?;
        tracing::debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            units = grid.unit_count(),
            "grid built"
        );
        Ok(Sim {
            clock:     Tick::ZERO,
            scheduler: Scheduler::new(self.config.move_delay_ticks),
            config:    self.config,
            grid,
            queue:     MoveQueue::new(),
            selection: Selection::default(),
            planner:   self.planner,
            next_plan: PlanId(0),
        })
    }
}
