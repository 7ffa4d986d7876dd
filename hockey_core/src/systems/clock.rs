use glam::Vec2;
use hecs::World;

use crate::timers::{TimerKind, Timers};
use crate::{Body, Events, MatchPhase, MatchState, Params};

/// Start the once-per-second countdown
pub fn start_clock(state: &mut MatchState, timers: &mut Timers) {
    state.clock = Some(timers.schedule_repeating(TimerKind::MatchTick, Params::CLOCK_INTERVAL));
}

/// One second of match time has elapsed
pub fn match_tick(
    world: &mut World,
    state: &mut MatchState,
    timers: &mut Timers,
    events: &mut Events,
) {
    if state.is_ended() {
        return;
    }

    state.time_left = state.time_left.saturating_sub(1);
    events.clock_ticked = true;

    if state.time_left == 0 {
        end_match(world, state, timers, events);
    }
}

/// Freeze the match and record its result. Only the first call has any effect.
pub fn end_match(
    world: &mut World,
    state: &mut MatchState,
    timers: &mut Timers,
    events: &mut Events,
) {
    if state.is_ended() {
        return;
    }

    let result = state.score.result();
    state.phase = MatchPhase::Ended(result);

    timers.cancel_all();
    state.clock = None;
    state.relaunch = None;

    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.vel = Vec2::ZERO;
    }

    events.match_ended = Some(result);

    tracing::info!(
        ?result,
        player = state.score.player,
        bot = state.score.bot,
        "match ended"
    );
}
