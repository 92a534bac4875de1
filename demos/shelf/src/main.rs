//! shelf — headless demo for the wh shelf-routing simulator.
//!
//! Builds the reference 18 × 10 floor (or a layout loaded from a JSON file
//! given as the first argument), plays a short scripted session of
//! dispatches and one return, then fires seeded random clicks and prints the
//! floor as ASCII.
//!
//! ```text
//! cargo run -p shelf                      # reference layout
//! cargo run -p shelf -- layout.json       # custom LayoutConfig
//! RUST_LOG=wh_sim=debug cargo run -p shelf
//! ```

mod render;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use wh_core::{Coord, LayoutConfig, PlanId, SimConfig, SimRng, Tick, UnitId};
use wh_grid::SwapConflict;
use wh_plan::{LaneRotationPlanner, Move, Plan};
use wh_sim::{Rejection, SelectOutcome, Sim, SimBuilder, SimObserver};

use render::render;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const RANDOM_CLICKS:  usize = 60;
const MOVE_DELAY:     u64 = 2;
const RETURN_BIAS:    f64 = 0.3;
const MAX_IDLE_TICKS: u64 = 100_000;

/// Cells clicked before the random phase, with what each one shows off.
const SCRIPT: [(usize, usize, &str); 6] = [
    (5, 3, "direct path, unit next to the aisle"),
    (4, 3, "direct path once the row is clear"),
    (3, 3, "direct path, two columns"),
    (1, 2, "rotation maneuver around (3, 2)"),
    (2, 4, "lane swap borrowing row 3, row 5 is blocked"),
    (0, 9, "return from the delivery row"),
];

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SessionLog {
    plans:     usize,
    moves:     usize,
    delivered: usize,
    conflicts: usize,
}

impl SimObserver for SessionLog {
    fn on_plan_queued(&mut self, id: PlanId, plan: &Plan) {
        self.plans += 1;
        info!(%id, kind = %plan.kind, from = %plan.origin, to = %plan.destination, moves = plan.len(), "queued");
    }

    fn on_move_applied(&mut self, _tick: Tick, _plan: PlanId, _mv: Move) {
        self.moves += 1;
    }

    fn on_conflict(&mut self, tick: Tick, plan: PlanId, mv: Move, conflict: &SwapConflict) {
        self.conflicts += 1;
        warn!(%tick, %plan, %mv, %conflict, "conflict");
    }

    fn on_unit_settled(&mut self, tick: Tick, unit: UnitId, at: Coord) {
        self.delivered += 1;
        info!(%tick, %unit, %at, "delivered");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 18 × 10, aisles at 6 and 12, blocked cells at columns {3, 9, 15} × rows {2, 5}.
fn reference_layout() -> LayoutConfig {
    let blocked = [3, 9, 15]
        .into_iter()
        .flat_map(|c| [2, 5].into_iter().map(move |r| Coord::new(c, r)));
    LayoutConfig::default().with_blocked(blocked)
}

fn load_layout(path: &Path) -> Result<LayoutConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn click(
    sim: &mut Sim<LaneRotationPlanner>,
    at:  Coord,
    log: &mut SessionLog,
) -> Result<SelectOutcome, Rejection> {
    let outcome = sim.on_select_observed(at, log);
    sim.run_until_idle(MAX_IDLE_TICKS, log);
    outcome
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shelf=info,wh_sim=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (layout, scripted) = match args.get(1) {
        Some(path) => (load_layout(Path::new(path))?, false),
        None       => (reference_layout(), true),
    };
    let (columns, rows) = (layout.columns, layout.rows);

    println!("=== shelf — wh shelf-routing simulator ===");
    println!(
        "Floor: {columns} × {rows}  |  aisle every {} columns  |  dispatch band {} rows  |  {} blocked",
        layout.aisle_freq,
        layout.dispatch_zone_size,
        layout.blocked.len()
    );

    let config = SimConfig { move_delay_ticks: MOVE_DELAY, ..SimConfig::default() };
    let mut sim = SimBuilder::new(layout, LaneRotationPlanner).config(config).build()?;
    println!("Units: {}", sim.grid().unit_count());
    println!();
    print!("{}", render(&sim.snapshot()));
    println!();

    let mut log = SessionLog::default();
    let t0 = Instant::now();

    // 1. Scripted session on the reference floor.
    if scripted {
        for (column, row, what) in SCRIPT {
            let at = Coord::new(column, row);
            match click(&mut sim, at, &mut log) {
                Ok(outcome) => println!("{at}: {what} → {outcome:?}"),
                Err(e)      => println!("{at}: {what} → rejected: {e}"),
            }
        }
        println!();
        print!("{}", render(&sim.snapshot()));
        println!();
    }

    // 2. Seeded random clicks.
    let mut rng = SimRng::new(SEED);
    let mut rejected = 0usize;
    for _ in 0..RANDOM_CLICKS {
        // Bias toward returns once the delivery row starts filling up.
        let delivered: Vec<Coord> = sim
            .grid()
            .iter()
            .filter(|(at, cell)| at.row == rows - 1 && cell.is_occupied())
            .map(|(at, _)| at)
            .collect();
        let at = match rng.choose(&delivered) {
            Some(&at) if rng.gen_bool(RETURN_BIAS) => at,
            _ => rng.coord(columns, rows),
        };
        if click(&mut sim, at, &mut log).is_err() {
            rejected += 1;
        }
    }
    let elapsed = t0.elapsed();

    // 3. Summary.
    print!("{}", render(&sim.snapshot()));
    println!();
    println!("Session complete in {:.3} s", elapsed.as_secs_f64());
    println!("  plans queued    : {}", log.plans);
    println!("  moves applied   : {}", log.moves);
    println!("  units delivered : {}", log.delivered);
    println!("  clicks rejected : {rejected}");
    println!("  conflicts       : {}", log.conflicts);

    anyhow::ensure!(
        sim.grid().unit_ids().len() == sim.grid().unit_count(),
        "unit conservation violated"
    );
    Ok(())
}
