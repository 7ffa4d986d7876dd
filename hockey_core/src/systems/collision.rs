use glam::Vec2;
use hecs::World;

use crate::map::Aabb;
use crate::{Body, BotPaddle, Config, Events, MatchState, PlayerPaddle, Puck, Side};

/// Circle vs box contact, with the normal pointing from the box to the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

pub fn circle_rect_contact(center: Vec2, radius: f32, rect: Aabb) -> Option<Contact> {
    let closest = rect.closest_point(center);
    let offset = center - closest;
    let dist_sq = offset.length_squared();

    if dist_sq > 0.0 {
        if dist_sq >= radius * radius {
            return None;
        }
        let dist = dist_sq.sqrt();
        return Some(Contact {
            normal: offset / dist,
            depth: radius - dist,
        });
    }

    // Center is inside the box: leave through the nearest face
    let faces = [
        (center.x - rect.min.x, Vec2::NEG_X),
        (rect.max.x - center.x, Vec2::X),
        (center.y - rect.min.y, Vec2::NEG_Y),
        (rect.max.y - center.y, Vec2::Y),
    ];
    let (face_dist, normal) = faces
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::NEG_Y));

    Some(Contact {
        normal,
        depth: face_dist + radius,
    })
}

/// Reflect `vel` off a surface with the given normal if moving into it
pub fn reflect(vel: Vec2, normal: Vec2, bounce: f32) -> Vec2 {
    let approach = vel.dot(normal);
    if approach < 0.0 {
        vel - normal * approach * (1.0 + bounce)
    } else {
        vel
    }
}

/// Velocity given to the puck when the player strikes it: along the line
/// from paddle center to puck center, never slower than the hit floor.
pub fn player_strike(
    paddle_pos: Vec2,
    puck_pos: Vec2,
    puck_vel: Vec2,
    fallback_dir: Vec2,
    min_speed: f32,
) -> Vec2 {
    let dir = (puck_pos - paddle_pos).try_normalize().unwrap_or(fallback_dir);
    dir * puck_vel.length().max(min_speed)
}

/// Resolve puck contacts against both paddles.
///
/// The bot is an immovable wall for the puck. A player hit redirects the puck
/// away from the paddle center with the speed floor applied.
pub fn resolve_paddle_contacts(
    world: &mut World,
    config: &Config,
    state: &MatchState,
    events: &mut Events,
) {
    if state.is_ended() {
        return;
    }

    let mut paddles: Vec<(Side, Aabb, Vec2)> = Vec::with_capacity(2);
    for (_e, (body, _)) in world.query::<(&Body, &PlayerPaddle)>().iter() {
        paddles.push((Side::Player, body.bounds(), body.pos));
    }
    for (_e, (body, _)) in world.query::<(&Body, &BotPaddle)>().iter() {
        paddles.push((Side::Bot, body.bounds(), body.pos));
    }

    let min_speed = config.player_hit_speed(state.puck_speed);

    for (_entity, (puck, _)) in world.query_mut::<(&mut Body, &Puck)>() {
        let Some(radius) = puck.radius() else {
            tracing::warn!("puck body is not a circle, skipping paddle contacts");
            continue;
        };

        for &(side, bounds, paddle_pos) in &paddles {
            let Some(contact) = circle_rect_contact(puck.pos, radius, bounds) else {
                continue;
            };

            puck.pos += contact.normal * contact.depth;
            puck.vel = reflect(puck.vel, contact.normal, puck.bounce);

            if side == Side::Player {
                puck.vel = player_strike(paddle_pos, puck.pos, puck.vel, contact.normal, min_speed);
            }

            events.puck_hit_paddle = Some(side);
        }
    }
}
