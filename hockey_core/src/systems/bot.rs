use glam::Vec2;
use hecs::World;

use crate::{Body, BotPaddle, Config, MatchState, Puck, Rink};

/// Horizontal velocity for the bot goalie.
///
/// While the puck is in the bot's half the bot chases where the puck will be
/// `bot_lookahead` seconds from now, holding still inside the dead-zone.
/// Otherwise it waits. A puck velocity that is not finite counts as zero.
pub fn bot_velocity_x(
    puck_pos: Vec2,
    puck_vel: Vec2,
    bot_x: f32,
    midline: f32,
    config: &Config,
) -> f32 {
    if puck_pos.y >= midline {
        return 0.0;
    }

    let vx = if puck_vel.x.is_finite() { puck_vel.x } else { 0.0 };
    let prediction = puck_pos.x + vx * config.bot_lookahead;

    if prediction < bot_x - config.bot_dead_zone {
        -config.bot_speed
    } else if prediction > bot_x + config.bot_dead_zone {
        config.bot_speed
    } else {
        0.0
    }
}

/// Steer the bot paddle toward the predicted puck position
pub fn drive_bot(world: &mut World, rink: &Rink, config: &Config, state: &MatchState) {
    if state.is_ended() {
        return;
    }

    let puck = world
        .query::<(&Body, &Puck)>()
        .iter()
        .next()
        .map(|(_e, (body, _))| (body.pos, body.vel));

    let Some((puck_pos, puck_vel)) = puck else {
        return;
    };

    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &BotPaddle)>() {
        body.vel = Vec2::new(
            bot_velocity_x(puck_pos, puck_vel, body.pos.x, rink.midline(), config),
            0.0,
        );
    }
}
