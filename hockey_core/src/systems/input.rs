use glam::Vec2;
use hecs::World;

use crate::{Body, Config, Keys, MatchState, PlayerPaddle};

/// Velocity requested by the held keys. Left wins over right and up wins
/// over down; diagonals are not normalized.
pub fn player_velocity(keys: Keys, speed: f32) -> Vec2 {
    let mut vel = Vec2::ZERO;

    if keys.left {
        vel.x = -speed;
    } else if keys.right {
        vel.x = speed;
    }

    if keys.up {
        vel.y = -speed;
    } else if keys.down {
        vel.y = speed;
    }

    vel
}

/// Set the player paddle velocity from the keyboard state
pub fn apply_player_input(world: &mut World, keys: Keys, config: &Config, state: &MatchState) {
    if state.is_ended() {
        return;
    }

    let vel = player_velocity(keys, config.player_speed);
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &PlayerPaddle)>() {
        body.vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player, MatchPhase, MatchResult, Rink};

    fn keys(left: bool, right: bool, up: bool, down: bool) -> Keys {
        Keys {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn test_no_keys_stops_paddle() {
        assert_eq!(player_velocity(Keys::none(), 150.0), Vec2::ZERO);
    }

    #[test]
    fn test_single_directions() {
        assert_eq!(player_velocity(keys(true, false, false, false), 150.0), Vec2::new(-150.0, 0.0));
        assert_eq!(player_velocity(keys(false, true, false, false), 150.0), Vec2::new(150.0, 0.0));
        assert_eq!(player_velocity(keys(false, false, true, false), 150.0), Vec2::new(0.0, -150.0));
        assert_eq!(player_velocity(keys(false, false, false, true), 150.0), Vec2::new(0.0, 150.0));
    }

    #[test]
    fn test_opposite_keys_resolve_to_first_checked() {
        assert_eq!(player_velocity(keys(true, true, false, false), 150.0).x, -150.0);
        assert_eq!(player_velocity(keys(false, false, true, true), 150.0).y, -150.0);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let vel = player_velocity(keys(false, true, false, true), 150.0);
        assert_eq!(vel, Vec2::new(150.0, 150.0));
    }

    #[test]
    fn test_apply_sets_player_body_velocity() {
        let config = Config::new();
        let rink = Rink::new(&config);
        let mut world = World::new();
        let player = create_player(&mut world, &rink, &config);
        let state = MatchState::new(&config);

        apply_player_input(&mut world, keys(false, true, true, false), &config, &state);

        let body = world.get::<&Body>(player).unwrap();
        assert_eq!(body.vel, Vec2::new(150.0, -150.0));
    }

    #[test]
    fn test_ignored_after_match_end() {
        let config = Config::new();
        let rink = Rink::new(&config);
        let mut world = World::new();
        let player = create_player(&mut world, &rink, &config);
        let mut state = MatchState::new(&config);
        state.phase = MatchPhase::Ended(MatchResult::Draw);

        apply_player_input(&mut world, keys(true, false, false, false), &config, &state);

        let body = world.get::<&Body>(player).unwrap();
        assert_eq!(body.vel, Vec2::ZERO);
    }
}
