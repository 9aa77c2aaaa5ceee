//! Unit tests for pursuit-agent: reset, policies, and the state machine.

use pursuit_core::{AgentId, AgentRng, TileId, Vec2};
use pursuit_grid::{TileGrid, TileGridBuilder};
use pursuit_plan::{PlanRequest, Planner, RandomWalkPlanner, ShortestPathPlanner, TilePath};

use crate::{
    machine, Agent, AgentConfig, AgentError, AgentMode, Behavior, BehaviorPolicy, InterceptChase,
    TargetView,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng() -> AgentRng {
    AgentRng::new(7, AgentId(0))
}

fn open_grid() -> TileGrid {
    TileGridBuilder::new(5, 5).build()
}

/// An agent parked on a known tile, bypassing the random spawn.
fn agent_at(grid: &TileGrid, x: u32, y: u32, behavior: Behavior) -> Agent {
    let tile = grid.id_at(x, y).unwrap();
    let mut agent = Agent::new(AgentConfig::with_behavior(behavior)).unwrap();
    agent.mode = AgentMode::Default;
    agent.current_tile = tile;
    agent.position = grid.pos(tile);
    agent
}

/// A target far outside every test agent's vision.
fn distant_target() -> TargetView {
    TargetView::at(Vec2::new(1_000.0, 1_000.0), TileId::INVALID)
}

/// Planner that always returns the same scripted path, whatever the request.
struct FixedPlanner(Vec<TileId>);

impl Planner for FixedPlanner {
    fn plan(
        &self,
        _grid: &TileGrid,
        _from: TileId,
        request: &PlanRequest,
        _rng: &mut AgentRng,
    ) -> TilePath {
        match request {
            PlanRequest::Idle => TilePath::empty(),
            _ => TilePath::from_tiles(self.0.iter().copied()),
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_speed_rejected() {
        let cfg = AgentConfig { speed: 0.0, ..AgentConfig::default() };
        assert!(matches!(cfg.validate(), Err(AgentError::Config(_))));
    }

    #[test]
    fn negative_vision_rejected() {
        let cfg = AgentConfig { vision_radius: -1.0, ..AgentConfig::default() };
        assert!(matches!(cfg.validate(), Err(AgentError::Config(_))));
    }

    #[test]
    fn zero_path_cap_rejected() {
        let cfg = AgentConfig { path_cap: 0, ..AgentConfig::default() };
        assert!(matches!(cfg.validate(), Err(AgentError::Config(_))));
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;

    #[test]
    fn new_agent_starts_uninitialized() {
        let agent = Agent::new(AgentConfig::default()).unwrap();
        assert_eq!(agent.mode, AgentMode::Uninitialized);
        assert_eq!(agent.current_tile, TileId::INVALID);
    }

    #[test]
    fn reset_places_on_walkable_tile() {
        let grid = TileGridBuilder::from_ascii(&[
            "#.#", //
            "###", //
            "..#",
        ])
        .unwrap()
        .build();
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        let mut r = rng();
        agent.reset(&grid, &mut r).unwrap();
        assert!(grid.is_walkable(agent.current_tile));
        assert_eq!(agent.position, grid.pos(agent.current_tile));
        assert_eq!(agent.mode, AgentMode::Default);
    }

    #[test]
    fn reset_is_idempotent_in_effect() {
        let grid = open_grid();
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        let mut r = rng();
        for _ in 0..2 {
            agent.reset(&grid, &mut r).unwrap();
            assert_eq!(agent.mode, AgentMode::Default);
            assert!(agent.path.is_empty());
            assert!(agent.target_tile.is_none());
            assert!(!agent.pursuing);
            assert_eq!(agent.velocity, Vec2::ZERO);
            assert_eq!(agent.position, grid.pos(agent.current_tile));
        }
    }

    #[test]
    fn reset_clears_in_flight_state() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);
        agent.mode = AgentMode::Moving;
        agent.target_tile = Some(TileId(3));
        agent.path = TilePath::from_tiles([TileId(4), TileId(5)]);
        agent.pursuing = true;

        agent.reset(&grid, &mut rng()).unwrap();
        assert_eq!(agent.mode, AgentMode::Default);
        assert!(agent.path.is_empty());
        assert!(agent.target_tile.is_none());
        assert!(!agent.pursuing);
    }

    #[test]
    fn reset_on_degenerate_map_fails_loudly() {
        let grid = TileGridBuilder::from_ascii(&["##", "##"]).unwrap().build();
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        let result = agent.reset(&grid, &mut rng());
        assert!(matches!(result, Err(AgentError::Plan(_))));
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policies {
    use super::*;

    #[test]
    fn wander_never_chases() {
        let grid = open_grid();
        let agent = agent_at(&grid, 2, 2, Behavior::Wander);
        // Target standing on top of the agent.
        let target = TargetView::at(agent.position, agent.current_tile);
        assert!(!Behavior::Wander.policy().wants_chase(&agent, &target));
    }

    #[test]
    fn chase_variants_gate_on_vision() {
        let grid = open_grid();
        let agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        let near = TargetView::at(Vec2::new(3.0, 0.0), TileId(3)); // dist 3 < 5
        let far = TargetView::at(Vec2::new(9.0, 0.0), TileId::INVALID); // dist 9 > 5

        for behavior in [Behavior::RandomChase, Behavior::InterceptChase] {
            let policy = behavior.policy();
            assert!(policy.wants_chase(&agent, &near), "{behavior} near");
            assert!(!policy.wants_chase(&agent, &far), "{behavior} far");
        }
    }

    #[test]
    fn vision_boundary_is_inclusive() {
        let grid = open_grid();
        let agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        let on_edge = TargetView::at(Vec2::new(5.0, 0.0), TileId::INVALID);
        assert!(Behavior::RandomChase.policy().wants_chase(&agent, &on_edge));
    }

    #[test]
    fn random_chase_heads_for_target_tile() {
        let grid = open_grid();
        let agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        let target = TargetView::at(Vec2::new(3.0, 3.0), grid.id_at(3, 3).unwrap());
        let req = Behavior::RandomChase
            .policy()
            .chase_transition(&agent, &target, &grid, &mut rng());
        assert_eq!(
            req,
            PlanRequest::Toward { dest: grid.id_at(3, 3).unwrap(), max_len: 20 }
        );
    }

    #[test]
    fn intercept_snaps_offset_to_walkable() {
        let grid = open_grid();
        let agent = agent_at(&grid, 0, 0, Behavior::InterceptChase);
        let target = TargetView::at(Vec2::new(2.0, 2.0), grid.id_at(2, 2).unwrap());
        let mut r = rng();
        for _ in 0..50 {
            match InterceptChase.chase_transition(&agent, &target, &grid, &mut r) {
                PlanRequest::Toward { dest, .. } => {
                    assert!(grid.is_walkable(dest));
                    // Offset is bounded by 2 tiles per axis.
                    let d = grid.pos(dest).distance(target.position);
                    assert!(d <= (8.0f32).sqrt() + 1e-4, "offset too far: {d}");
                }
                other => panic!("expected Toward, got {other:?}"),
            }
        }
    }

    #[test]
    fn intercept_on_blocked_map_goes_idle() {
        let grid = TileGridBuilder::from_ascii(&["##", "##"]).unwrap().build();
        let agent = Agent::new(AgentConfig::with_behavior(Behavior::InterceptChase)).unwrap();
        let target = TargetView::at(Vec2::ZERO, TileId::INVALID);
        let req = InterceptChase.chase_transition(&agent, &target, &grid, &mut rng());
        assert!(req.is_idle());
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine_tests {
    use super::*;

    const DT: f32 = 0.25;

    #[test]
    fn dormant_states_route_to_default() {
        let grid = open_grid();
        let target = distant_target();
        for mode in [AgentMode::Uninitialized, AgentMode::Rest, AgentMode::Static] {
            let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);
            agent.mode = mode;
            machine::step(&mut agent, &grid, &RandomWalkPlanner, &target, DT, &mut rng());
            assert_eq!(agent.mode, AgentMode::Default, "from {mode}");
        }
    }

    #[test]
    fn null_target_in_moving_falls_back_without_panic() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);
        agent.mode = AgentMode::Moving;
        agent.target_tile = None;
        machine::step(&mut agent, &grid, &RandomWalkPlanner, &distant_target(), DT, &mut rng());
        assert_eq!(agent.mode, AgentMode::Default);
    }

    #[test]
    fn default_with_plan_enters_moving() {
        let grid = open_grid();
        let planner = FixedPlanner(vec![TileId(1), TileId(2), TileId(3)]);
        let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);

        machine::step(&mut agent, &grid, &planner, &distant_target(), DT, &mut rng());

        assert_eq!(agent.mode, AgentMode::Moving);
        assert_eq!(agent.target_tile, Some(TileId(1)));
        assert_eq!(agent.path.len(), 2);
    }

    #[test]
    fn default_with_no_plan_stays_idle() {
        // A sealed-in agent can never plan; it idles in place, it does not
        // stall in Moving or crash.
        let grid = TileGridBuilder::from_ascii(&[
            "###", //
            "#.#", //
            "###",
        ])
        .unwrap()
        .build();
        let mut agent = agent_at(&grid, 1, 1, Behavior::Wander);
        for _ in 0..10 {
            machine::step(&mut agent, &grid, &RandomWalkPlanner, &distant_target(), DT, &mut rng());
            assert_eq!(agent.mode, AgentMode::Default);
            assert!(agent.target_tile.is_none());
        }
    }

    #[test]
    fn wander_end_to_end() {
        // 3-tile path: walk the first leg, return to Default
        // with 2 tiles still queued and current_tile updated.
        let grid = open_grid();
        let planner = FixedPlanner(vec![TileId(1), TileId(2), TileId(3)]);
        let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);
        let target = distant_target();
        let mut r = rng();

        // Tick 1: Default → Moving.
        machine::step(&mut agent, &grid, &planner, &target, DT, &mut r);
        assert_eq!(agent.mode, AgentMode::Moving);

        // Speed 1.0, dt 0.25, tile distance 1.0 → arrival on the 4th move.
        for _ in 0..3 {
            machine::step(&mut agent, &grid, &planner, &target, DT, &mut r);
            assert_eq!(agent.mode, AgentMode::Moving);
        }
        machine::step(&mut agent, &grid, &planner, &target, DT, &mut r);

        assert_eq!(agent.mode, AgentMode::Default);
        assert_eq!(agent.current_tile, TileId(1));
        assert_eq!(agent.position, grid.pos(TileId(1)));
        assert_eq!(agent.path.len(), 2);
        assert!(agent.target_tile.is_none());
    }

    #[test]
    fn moving_velocity_points_at_target() {
        let grid = open_grid();
        let planner = FixedPlanner(vec![TileId(1)]);
        let mut agent = agent_at(&grid, 0, 0, Behavior::Wander);
        let target = distant_target();
        let mut r = rng();

        machine::step(&mut agent, &grid, &planner, &target, DT, &mut r);
        machine::step(&mut agent, &grid, &planner, &target, DT, &mut r);

        // Heading +x at full speed.
        assert!((agent.velocity.x - 1.0).abs() < 1e-6);
        assert!(agent.velocity.y.abs() < 1e-6);
        assert!((agent.position.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn current_tile_stays_walkable_under_random_roaming() {
        let grid = TileGridBuilder::from_ascii(&[
            ".....", //
            ".#.#.", //
            ".....", //
            ".#.#.", //
            ".....",
        ])
        .unwrap()
        .build();
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        let mut r = rng();
        agent.reset(&grid, &mut r).unwrap();

        for _ in 0..500 {
            machine::step(&mut agent, &grid, &RandomWalkPlanner, &distant_target(), 0.5, &mut r);
            assert!(grid.is_walkable(agent.current_tile));
            if agent.mode == AgentMode::Moving {
                let t = agent.target_tile.expect("Moving implies a target");
                assert!(grid.is_walkable(t));
            }
        }
    }

    #[test]
    fn default_enters_chase_when_target_visible() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        let target = TargetView::at(Vec2::new(2.0, 0.0), grid.id_at(2, 0).unwrap());
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, DT, &mut rng());
        assert_eq!(agent.mode, AgentMode::Chase);
    }

    #[test]
    fn default_does_not_chase_beyond_vision() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        let target = TargetView::at(Vec2::new(50.0, 0.0), TileId::INVALID);
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, DT, &mut rng());
        assert_ne!(agent.mode, AgentMode::Chase);
    }

    #[test]
    fn chase_plans_and_enters_moving() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        agent.mode = AgentMode::Chase;
        let target = TargetView::at(Vec2::new(3.0, 0.0), grid.id_at(3, 0).unwrap());

        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, DT, &mut rng());

        assert_eq!(agent.mode, AgentMode::Moving);
        assert!(agent.pursuing);
        assert_eq!(agent.target_tile, Some(grid.id_at(1, 0).unwrap()));
    }

    #[test]
    fn chase_reverts_when_target_leaves_vision() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        agent.mode = AgentMode::Chase;
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &distant_target(), DT, &mut rng());
        assert_eq!(agent.mode, AgentMode::Default);
        assert!(!agent.pursuing);
    }

    #[test]
    fn chase_with_empty_plan_reverts_to_default() {
        // Target shares the agent's tile: BFS yields nothing to walk.
        let grid = open_grid();
        let mut agent = agent_at(&grid, 2, 2, Behavior::RandomChase);
        agent.mode = AgentMode::Chase;
        let target = TargetView::at(agent.position, agent.current_tile);
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, DT, &mut rng());
        assert_eq!(agent.mode, AgentMode::Default);
    }

    #[test]
    fn pursuit_replans_on_arrival_without_default() {
        // Moving → Moving: speed 1.0 with dt 1.0 crosses one tile per tick.
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        agent.mode = AgentMode::Chase;
        let target = TargetView::at(Vec2::new(4.0, 0.0), grid.id_at(4, 0).unwrap());
        let mut r = rng();

        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, 1.0, &mut r);
        assert_eq!(agent.mode, AgentMode::Moving);
        let first_leg = agent.target_tile.unwrap();

        // Arrives at (1,0) and immediately re-commits the next leg.
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, 1.0, &mut r);
        assert_eq!(agent.mode, AgentMode::Moving);
        assert!(agent.pursuing);
        let second_leg = agent.target_tile.unwrap();
        assert_ne!(second_leg, first_leg, "stale target must be replaced");
        assert_eq!(agent.current_tile, first_leg);
    }

    #[test]
    fn pursuit_arrival_out_of_vision_reverts() {
        let grid = open_grid();
        let mut agent = agent_at(&grid, 0, 0, Behavior::RandomChase);
        agent.mode = AgentMode::Moving;
        agent.pursuing = true;
        agent.target_tile = Some(grid.id_at(1, 0).unwrap());

        // Target gone by the time the leg completes.
        machine::step(&mut agent, &grid, &ShortestPathPlanner, &distant_target(), 1.0, &mut rng());
        assert_eq!(agent.mode, AgentMode::Default);
        assert!(!agent.pursuing);
    }

    #[test]
    fn intercept_chase_without_reachable_area_falls_back() {
        // Target in vision but every tile near it (and the
        // only walkable tile at all) is the agent's own — planning yields
        // nothing and the agent must fall back to Default, not crash.
        let grid = TileGridBuilder::from_ascii(&[
            "###", //
            "#.#", //
            "###",
        ])
        .unwrap()
        .build();
        let mut agent = agent_at(&grid, 1, 1, Behavior::InterceptChase);
        agent.mode = AgentMode::Chase;
        let target = TargetView::at(agent.position, agent.current_tile);

        machine::step(&mut agent, &grid, &ShortestPathPlanner, &target, DT, &mut rng());
        assert_eq!(agent.mode, AgentMode::Default);
        assert!(agent.target_tile.is_none());
    }

    #[test]
    fn path_respects_configured_cap() {
        let grid = open_grid();
        let cfg = AgentConfig { path_cap: 4, ..AgentConfig::default() };
        let tile = grid.id_at(2, 2).unwrap();
        let mut agent = Agent::new(cfg).unwrap();
        agent.mode = AgentMode::Default;
        agent.current_tile = tile;
        agent.position = grid.pos(tile);

        machine::step(&mut agent, &grid, &RandomWalkPlanner, &distant_target(), DT, &mut rng());
        // One tile was dequeued into target_tile; at most cap-1 remain.
        assert!(agent.path.len() <= 3);
    }
}
