//! Builder for assembling a [`Sim`].

use pursuit_agent::{Agent, AgentConfig, AgentRngs, TargetView};
use pursuit_core::SimConfig;
use pursuit_grid::{MapPhase, TileGrid};
use pursuit_plan::Planner;

use crate::{Sim, SimError, SimResult};

/// Step-by-step construction of a [`Sim`].
///
/// ```no_run
/// # use pursuit_core::SimConfig;
/// # use pursuit_grid::TileGridBuilder;
/// # use pursuit_plan::RandomWalkPlanner;
/// # use pursuit_agent::{AgentConfig, Behavior};
/// # use pursuit_sim::SimBuilder;
/// let grid = TileGridBuilder::new(10, 10).build();
/// let sim = SimBuilder::new(SimConfig::default(), grid, RandomWalkPlanner)
///     .agent(AgentConfig::default())
///     .agent(AgentConfig::with_behavior(Behavior::RandomChase))
///     .build()
///     .unwrap();
/// ```
pub struct SimBuilder<P: Planner> {
    config: SimConfig,
    grid: TileGrid,
    planner: P,
    agent_configs: Vec<AgentConfig>,
    target: TargetView,
}

impl<P: Planner> SimBuilder<P> {
    pub fn new(config: SimConfig, grid: TileGrid, planner: P) -> Self {
        Self {
            config,
            grid,
            planner,
            agent_configs: Vec::new(),
            target: TargetView::default(),
        }
    }

    /// Add one agent with the given configuration.
    pub fn agent(mut self, config: AgentConfig) -> Self {
        self.agent_configs.push(config);
        self
    }

    /// Add many agents at once.
    pub fn agents<I: IntoIterator<Item = AgentConfig>>(mut self, configs: I) -> Self {
        self.agent_configs.extend(configs);
        self
    }

    /// Set the initial tracked-target snapshot.
    pub fn target(mut self, target: TargetView) -> Self {
        self.target = target;
        self
    }

    /// Validate everything and produce a ready-to-run [`Sim`].
    ///
    /// Agents are spawned here: each one is reset onto a random walkable
    /// tile using its own seeded RNG, so the same `SimConfig::seed` yields
    /// the same spawn layout.  A grid with no walkable tiles is rejected
    /// outright rather than deferred to the first tick.
    pub fn build(self) -> SimResult<Sim<P>> {
        if !(self.config.tick_duration_secs > 0.0) {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.config.tick_duration_secs
            )));
        }

        let mut agents = self
            .agent_configs
            .into_iter()
            .map(Agent::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut rngs = AgentRngs::new(agents.len(), self.config.seed);

        for (i, agent) in agents.iter_mut().enumerate() {
            let rng = rngs.get_mut(pursuit_core::AgentId(i as u32));
            agent.reset(&self.grid, rng)?;
        }

        let clock = self.config.make_clock();

        Ok(Sim {
            config: self.config,
            clock,
            grid: self.grid,
            phase: MapPhase::Ready,
            agents,
            rngs,
            planner: self.planner,
            target: self.target,
        })
    }
}
