//! minimal — smallest example for the rust_pursuit framework.
//!
//! Three agents (one per behavior variant) hunt a scripted quarry that
//! loops around the border of a 9x7 tile map with a central obstacle
//! block.  The quarry moves one tile per tick; agents move at the same
//! speed, so only the interceptor's offset aim ever cuts it off.

use std::time::Instant;

use anyhow::Result;

use pursuit_agent::{Agent, AgentConfig, Behavior, TargetView};
use pursuit_core::{SimConfig, Tick};
use pursuit_grid::{TileGrid, TileGridBuilder};
use pursuit_plan::ShortestPathPlanner;
use pursuit_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const TOTAL_TICKS:    u64 = 120;
const PRINT_INTERVAL: u64 = 10;

// '.' walkable, '#' blocked.
const MAP: &[&str] = &[
    ".........", //
    ".........", //
    "..##.##..", //
    "..##.##..", //
    "..##.##..", //
    ".........", //
    ".........",
];

// ── Scripted quarry ───────────────────────────────────────────────────────────

/// The quarry walks the outer ring of the map, one tile per tick.
struct QuarryRoute {
    waypoints: Vec<(u32, u32)>,
    step: usize,
}

impl QuarryRoute {
    fn new(grid: &TileGrid) -> Self {
        let (w, h) = (grid.width(), grid.height());
        let mut waypoints = Vec::new();
        for x in 0..w {
            waypoints.push((x, 0));
        }
        for y in 1..h {
            waypoints.push((w - 1, y));
        }
        for x in (0..w - 1).rev() {
            waypoints.push((x, h - 1));
        }
        for y in (1..h - 1).rev() {
            waypoints.push((0, y));
        }
        Self { waypoints, step: 0 }
    }

    fn advance(&mut self, grid: &TileGrid) -> TargetView {
        let (x, y) = self.waypoints[self.step % self.waypoints.len()];
        self.step += 1;
        let tile = grid.id_at(x, y).expect("route stays on the grid");
        TargetView::at(grid.pos(tile), tile)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct ProgressPrinter;

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, agents: &[Agent]) {
        if tick.0 % PRINT_INTERVAL == 0 {
            let line: Vec<String> = agents
                .iter()
                .map(|a| format!("{} {} at {}", a.config.behavior, a.mode, a.position))
                .collect();
            println!("{tick}: {}", line.join("  |  "));
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("done at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== minimal — rust_pursuit ===");
    println!("Agents: 3  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the map.
    let grid = TileGridBuilder::from_ascii(MAP)?.build();
    println!(
        "Map: {}x{}, {} walkable tiles",
        grid.width(),
        grid.height(),
        grid.walkable_count()
    );

    // 2. Sim config: one tile per tick at the default speed of 1.0.
    let config = SimConfig {
        tick_duration_secs: 1.0,
        total_ticks: TOTAL_TICKS,
        seed: SEED,
    };

    // 3. One agent per behavior variant.
    let mut route = QuarryRoute::new(&grid);
    let first = route.advance(&grid);
    let mut sim = SimBuilder::new(config, grid, ShortestPathPlanner)
        .agent(AgentConfig::with_behavior(Behavior::Wander))
        .agent(AgentConfig::with_behavior(Behavior::RandomChase))
        .agent(AgentConfig::with_behavior(Behavior::InterceptChase))
        .target(first)
        .build()?;

    for (i, agent) in sim.agents.iter().enumerate() {
        println!("  agent {i}: {} spawned at {}", agent.config.behavior, agent.position);
    }
    println!();

    // 4. Run tick by tick, refreshing the quarry snapshot each time.
    let mut obs = ProgressPrinter;
    let t0 = Instant::now();
    for _ in 0..TOTAL_TICKS {
        let target = route.advance(&sim.grid);
        sim.set_target(target);
        sim.run_ticks(1, &mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    // 5. Summary table.
    println!();
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("{:<18} {:<10} {:<14}", "Behavior", "Mode", "Position");
    println!("{}", "-".repeat(42));
    for agent in &sim.agents {
        println!(
            "{:<18} {:<10} {:<14}",
            agent.config.behavior.to_string(),
            agent.mode.to_string(),
            agent.position.to_string(),
        );
    }

    Ok(())
}
