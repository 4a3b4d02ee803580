use seekship_common::{FrameInput, SimConfig};

use crate::boundary;
use crate::integrator;
use crate::projectile;
use crate::steering::{self, SeekOutcome};
use crate::world::{World, WorldEvent};

/// What happened during a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub fired: bool,
    pub seek: SeekOutcome,
    /// Projectiles removed after leaving the screen.
    pub pruned: usize,
}

/// Outcome of [`run_until_close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// True when a close intent ended the run, false when input ran out.
    pub closed: bool,
}

/// Advance the world by one frame and hand it back.
pub fn step(mut world: World, input: &FrameInput, config: &SimConfig) -> World {
    step_in_place(&mut world, input, config);
    world
}

/// Advance the world by one frame.
///
/// Order matters and is fixed: thrust, fire, cooldown decay, seek, friction,
/// wrap, projectile advance and cull, prune. The close intent is not looked
/// at here. Events are appended to the world's log; callers driving this
/// directly own draining it.
pub fn step_in_place(world: &mut World, input: &FrameInput, config: &SimConfig) -> StepReport {
    let tick = world.tick + 1;
    let _span = tracing::info_span!("sim_step", tick).entered();
    let delta = input.delta;
    let agent = &mut world.agent;

    agent.body.acceleration += integrator::thrust(agent.pose.forward, input.intents, agent.max_speed);

    let mut fired = false;
    if input.fire {
        if let Some(shot) = projectile::try_fire(agent, &config.projectile) {
            tracing::debug!(
                x = shot.position.x,
                y = shot.position.y,
                cooldown = agent.cooldown,
                "projectile fired"
            );
            world.event_log.push(WorldEvent::ProjectileFired {
                tick,
                position: shot.position,
                direction: shot.direction,
            });
            world.projectiles.push(shot);
            fired = true;
        }
    }
    agent.cooldown -= delta;

    let seek = steering::seek(
        &mut agent.pose,
        &mut agent.body,
        input.pointer,
        agent.rotation_speed,
        delta,
        config.arrival_radius,
    );

    agent.body.velocity = integrator::apply_friction(
        agent.body.velocity,
        config.friction,
        config.friction_mode,
        delta,
    );
    agent.pose.position = boundary::wrap(agent.pose.position, config.width, config.height);

    for shot in &mut world.projectiles {
        shot.advance(delta);
        shot.cull(config.width, config.height);
    }
    let pruned = projectile::prune(&mut world.projectiles);
    if pruned > 0 {
        tracing::trace!(pruned, remaining = world.projectiles.len(), "projectiles pruned");
        world.event_log.push(WorldEvent::ProjectilesPruned {
            tick,
            count: pruned,
        });
    }

    world.tick = tick;
    world.event_log.push(WorldEvent::Stepped { tick, delta });

    StepReport {
        fired,
        seek,
        pruned,
    }
}

/// Step the world once per input until a close intent arrives or input runs out.
///
/// The close intent is honoured at the frame boundary: a frame carrying it is
/// not simulated. `on_frame` sees the world after each simulated frame, with
/// that frame's events still in the log; the log is drained once it returns.
pub fn run_until_close<I, F>(
    mut world: World,
    config: &SimConfig,
    inputs: I,
    mut on_frame: F,
) -> (World, RunSummary)
where
    I: IntoIterator<Item = FrameInput>,
    F: FnMut(&World, &FrameInput, &StepReport),
{
    let mut summary = RunSummary {
        frames: 0,
        closed: false,
    };
    for input in inputs {
        if input.close {
            tracing::info!(tick = world.tick, "close intent received");
            summary.closed = true;
            break;
        }
        let report = step_in_place(&mut world, &input, config);
        on_frame(&world, &input, &report);
        world.event_log.clear();
        summary.frames += 1;
    }
    (world, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use seekship_common::MoveIntents;

    const DT: f32 = 1.0 / 144.0;

    fn aim_right(delta: f32) -> FrameInput {
        FrameInput {
            pointer: Vec2::new(1960.0, 540.0),
            ..FrameInput::idle(delta)
        }
    }

    #[test]
    fn step_increments_tick_and_logs() {
        let config = SimConfig::default();
        let world = step(World::new(&config), &aim_right(DT), &config);
        assert_eq!(world.tick(), 1);
        assert!(matches!(
            world.events().last(),
            Some(WorldEvent::Stepped { tick: 1, .. })
        ));
    }

    #[test]
    fn cooldown_decays_without_fire_intent() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        for _ in 0..10 {
            step_in_place(&mut world, &aim_right(0.1), &config);
        }
        assert!((world.agent().cooldown + 1.0).abs() < 1e-5);
    }

    #[test]
    fn fire_spawns_at_pre_step_position() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        world.agent_mut().cooldown = -1.0;
        let start = world.agent().pose.position;

        let input = FrameInput {
            fire: true,
            ..aim_right(0.0)
        };
        let report = step_in_place(&mut world, &input, &config);

        assert!(report.fired);
        assert_eq!(world.projectile_count(), 1);
        assert_eq!(world.projectiles()[0].position, start);
        assert!(matches!(
            world.events()[0],
            WorldEvent::ProjectileFired { tick: 1, .. }
        ));
    }

    #[test]
    fn thrust_moves_agent_along_forward() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        let input = FrameInput {
            intents: MoveIntents {
                forward: true,
                ..Default::default()
            },
            ..aim_right(DT)
        };
        step_in_place(&mut world, &input, &config);

        let agent = world.agent();
        let expected_velocity = 2000.0 * DT * 0.98;
        assert!((agent.body.velocity.x - expected_velocity).abs() < 1e-3);
        assert!(agent.pose.position.x > 960.0);
        assert_eq!(agent.body.acceleration, Vec2::ZERO);
    }

    #[test]
    fn agent_wraps_after_leaving_screen() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        world.agent_mut().pose.position = Vec2::new(1919.0, 540.0);
        world.agent_mut().body.velocity = Vec2::new(1000.0, 0.0);

        step_in_place(&mut world, &aim_right(0.01), &config);
        assert_eq!(world.agent().pose.position.x, 0.0);
    }

    #[test]
    fn run_stops_on_close_before_simulating() {
        let config = SimConfig::default();
        let mut inputs = vec![aim_right(DT); 3];
        inputs.push(FrameInput {
            close: true,
            ..aim_right(DT)
        });
        inputs.push(aim_right(DT));

        let mut seen = 0;
        let (world, summary) =
            run_until_close(World::new(&config), &config, inputs, |_, _, _| seen += 1);

        assert_eq!(summary, RunSummary { frames: 3, closed: true });
        assert_eq!(seen, 3);
        assert_eq!(world.tick(), 3);
    }

    #[test]
    fn run_hands_each_frame_its_events_then_drains() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        world.agent_mut().cooldown = -1.0;
        let firing = FrameInput {
            fire: true,
            ..aim_right(DT)
        };

        let mut fired_seen = 0;
        let mut longest_log = 0;
        let (world, summary) = run_until_close(
            world,
            &config,
            std::iter::repeat(firing).take(144 * 60),
            |world, _, report| {
                longest_log = longest_log.max(world.events().len());
                if report.fired {
                    assert!(matches!(
                        world.events()[0],
                        WorldEvent::ProjectileFired { .. }
                    ));
                    fired_seen += 1;
                }
            },
        );

        assert_eq!(summary.frames, 144 * 60);
        assert!(fired_seen > 0);
        // Fired, pruned and stepped at most.
        assert!(longest_log <= 3);
        assert!(world.events().is_empty());
    }

    #[test]
    fn run_ends_when_input_runs_out() {
        let config = SimConfig::default();
        let (world, summary) = run_until_close(
            World::new(&config),
            &config,
            std::iter::repeat(aim_right(DT)).take(5),
            |_, _, _| {},
        );
        assert!(!summary.closed);
        assert_eq!(summary.frames, 5);
        assert_eq!(world.tick(), 5);
    }
}
