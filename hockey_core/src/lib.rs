pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod timers;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use timers::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Advance the match by one frame.
///
/// `time.dt` is clamped to [`Params::MAX_DT`] and split into fixed micro-steps.
/// Events are cleared once at the start of the frame, so they report
/// everything that happened across all micro-steps.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    rink: &Rink,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    timers: &mut Timers,
    rng: &mut GameRng,
    keys: Keys,
) {
    events.clear();

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.clamp(0.0, Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Fire due timers (clock tick, puck relaunch)
        for (id, kind) in timers.advance(step_dt) {
            match kind {
                TimerKind::MatchTick => match_tick(world, state, timers, events),
                TimerKind::RelaunchPuck if state.relaunch == Some(id) => {
                    relaunch_puck(world, config, state, rng, events)
                }
                TimerKind::RelaunchPuck => {}
            }
        }

        if state.is_ended() {
            break;
        }

        // 2. Paddle intents
        apply_player_input(world, keys, config, state);
        drive_bot(world, rink, config, state);

        // 3. Integrate and keep everything on the ice
        move_bodies(world, &step_time);
        constrain_to_world(world, rink, events);

        // 4. Puck vs paddles
        resolve_paddle_contacts(world, config, state, events);

        // 5. Goals
        check_goals(world, rink, config, state, timers, events);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create the keyboard-controlled paddle
pub fn create_player(world: &mut World, rink: &Rink, config: &Config) -> Entity {
    let body = Body::rect(rink.paddle_spawn(Side::Player, config), config.paddle_size())
        .with_bounce(1.0)
        .with_drag(config.player_drag)
        .collide_world_bounds();
    world.spawn((body, PlayerPaddle))
}

/// Helper to create the scripted paddle
pub fn create_bot(world: &mut World, rink: &Rink, config: &Config) -> Entity {
    let body = Body::rect(rink.paddle_spawn(Side::Bot, config), config.paddle_size())
        .immovable()
        .collide_world_bounds();
    world.spawn((body, BotPaddle))
}

/// Helper to create the puck entity
pub fn create_puck(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> Entity {
    let body = Body::circle(pos, config.puck_radius)
        .with_bounce(1.0)
        .collide_world_bounds()
        .with_velocity(vel);
    world.spawn((body, Puck))
}

/// Helper to create a goal sensor
pub fn create_goal(world: &mut World, goal: &GoalArea) -> Entity {
    let body = Body::rect(goal.area.center(), goal.area.size()).immovable();
    world.spawn((body, GoalSensor { scorer: goal.scorer }))
}

/// Entities making up one match
#[derive(Debug, Clone, Copy)]
pub struct RinkEntities {
    pub player: Entity,
    pub bot: Entity,
    pub puck: Entity,
    pub goals: [Entity; 2],
}

/// Spawn both paddles, a resting puck at center ice and both goals
pub fn spawn_rink(world: &mut World, rink: &Rink, config: &Config) -> RinkEntities {
    let goals = [
        create_goal(world, &rink.goals[0]),
        create_goal(world, &rink.goals[1]),
    ];
    RinkEntities {
        player: create_player(world, rink, config),
        bot: create_bot(world, rink, config),
        puck: create_puck(world, config, rink.puck_spawn(), Vec2::ZERO),
        goals,
    }
}
