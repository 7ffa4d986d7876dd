use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::timers::{TimerKind, Timers};
use crate::{Body, Config, Events, GameRng, GoalSensor, MatchState, Puck, Rink};

/// Credit a goal when the puck overlaps a goal sensor.
///
/// Ignored while the match is over or the puck is parked waiting for its
/// relaunch. At most one goal counts per step.
pub fn check_goals(
    world: &mut World,
    rink: &Rink,
    config: &Config,
    state: &mut MatchState,
    timers: &mut Timers,
    events: &mut Events,
) {
    if state.is_ended() || state.relaunch_pending() {
        return;
    }

    let puck = world
        .query::<(&Body, &Puck)>()
        .iter()
        .next()
        .and_then(|(_e, (body, _))| body.radius().map(|r| (body.pos, r)));
    let Some((puck_pos, radius)) = puck else {
        return;
    };

    let scorer = world
        .query::<(&Body, &GoalSensor)>()
        .iter()
        .find(|(_e, (body, _))| body.bounds().intersects_circle(puck_pos, radius))
        .map(|(_e, (_, sensor))| sensor.scorer);
    let Some(scorer) = scorer else {
        return;
    };

    state.score.increment(scorer);
    state.puck_speed += config.puck_speed_increment;
    events.goal = Some(scorer);

    tracing::info!(
        ?scorer,
        player = state.score.player,
        bot = state.score.bot,
        puck_speed = state.puck_speed,
        "goal"
    );

    reset_puck(world, rink);
    state.relaunch = Some(timers.schedule_once(TimerKind::RelaunchPuck, config.relaunch_delay));
}

/// Park the puck at the center spot
pub fn reset_puck(world: &mut World, rink: &Rink) {
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &Puck)>() {
        body.pos = rink.puck_spawn();
        body.vel = Vec2::ZERO;
    }
}

/// Velocity for a relaunch: magnitude `speed`, within `max_angle_deg` of the
/// horizontal heading right, sent toward either goal at random.
pub fn relaunch_velocity(speed: f32, max_angle_deg: f32, rng: &mut GameRng) -> Vec2 {
    let max = max_angle_deg.to_radians();
    let angle = if max > 0.0 {
        rng.0.gen_range(-max..=max)
    } else {
        0.0
    };
    let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let vel = Vec2::from_angle(angle) * speed;
    Vec2::new(vel.x, vel.y * sign)
}

/// Put a parked puck back in play at the current puck speed
pub fn relaunch_puck(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    state.relaunch = None;
    if state.is_ended() {
        return;
    }

    let vel = relaunch_velocity(state.puck_speed, config.launch_angle_max_deg, rng);
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &Puck)>() {
        body.vel = vel;
    }
    events.puck_launched = true;

    tracing::debug!(vx = vel.x, vy = vel.y, "puck relaunched");
}

/// Opening serve: diagonal toward the player's goal
pub fn kickoff(world: &mut World, state: &MatchState, events: &mut Events) {
    let vel = Vec2::splat(state.puck_speed);
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &Puck)>() {
        body.vel = vel;
    }
    events.puck_launched = true;

    tracing::debug!(speed = state.puck_speed, "kickoff");
}
