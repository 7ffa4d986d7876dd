use glam::Vec2;
use hecs::World;

use crate::{Body, Events, Puck, Rink, Time};

/// Reduce each velocity component toward zero by `drag * dt`
pub fn apply_drag(vel: Vec2, drag: f32, dt: f32) -> Vec2 {
    if drag <= 0.0 {
        return vel;
    }
    let step = drag * dt;
    let damp = |v: f32| {
        if v - step > 0.0 {
            v - step
        } else if v + step < 0.0 {
            v + step
        } else {
            0.0
        }
    };
    Vec2::new(damp(vel.x), damp(vel.y))
}

/// Apply drag, then integrate positions
pub fn move_bodies(world: &mut World, time: &Time) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.vel = apply_drag(body.vel, body.drag, time.dt);
        body.pos += body.vel * time.dt;
    }
}

/// Clamp a body inside `bounds`, reflecting velocity scaled by its bounce.
/// Returns true if any edge was touched while moving into it.
pub fn clamp_to_bounds(body: &mut Body, width: f32, height: f32) -> bool {
    let half = body.shape.half_extents();
    let mut hit = false;

    if body.pos.x - half.x < 0.0 {
        body.pos.x = half.x;
        if body.vel.x < 0.0 {
            body.vel.x = -body.vel.x * body.bounce;
            hit = true;
        }
    } else if body.pos.x + half.x > width {
        body.pos.x = width - half.x;
        if body.vel.x > 0.0 {
            body.vel.x = -body.vel.x * body.bounce;
            hit = true;
        }
    }

    if body.pos.y - half.y < 0.0 {
        body.pos.y = half.y;
        if body.vel.y < 0.0 {
            body.vel.y = -body.vel.y * body.bounce;
            hit = true;
        }
    } else if body.pos.y + half.y > height {
        body.pos.y = height - half.y;
        if body.vel.y > 0.0 {
            body.vel.y = -body.vel.y * body.bounce;
            hit = true;
        }
    }

    hit
}

/// Keep bodies that collide with world bounds inside the rink
pub fn constrain_to_world(world: &mut World, rink: &Rink, events: &mut Events) {
    for (_entity, (body, puck)) in world.query_mut::<(&mut Body, Option<&Puck>)>() {
        if !body.collide_world_bounds {
            continue;
        }
        if clamp_to_bounds(body, rink.width, rink.height) && puck.is_some() {
            events.puck_hit_wall = true;
        }
    }
}
