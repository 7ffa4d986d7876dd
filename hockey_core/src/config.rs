use glam::Vec2;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] default, so a JSON document only
/// needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_spawn_y: f32,
    pub bot_spawn_y: f32,
    pub player_speed: f32,
    pub player_drag: f32,
    pub bot_speed: f32,
    pub bot_lookahead: f32,
    pub bot_dead_zone: f32,
    pub puck_radius: f32,
    pub puck_speed_initial: f32,
    pub puck_speed_increment: f32,
    pub player_hit_speed_floor: f32,
    pub launch_angle_max_deg: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub match_duration: u32,
    pub relaunch_delay: f32,
    pub shake_duration: f32,
    pub shake_intensity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_spawn_y: Params::PLAYER_SPAWN_Y,
            bot_spawn_y: Params::BOT_SPAWN_Y,
            player_speed: Params::PLAYER_SPEED,
            player_drag: Params::PLAYER_DRAG,
            bot_speed: Params::BOT_SPEED,
            bot_lookahead: Params::BOT_LOOKAHEAD,
            bot_dead_zone: Params::BOT_DEAD_ZONE,
            puck_radius: Params::PUCK_RADIUS,
            puck_speed_initial: Params::PUCK_SPEED_INITIAL,
            puck_speed_increment: Params::PUCK_SPEED_INCREMENT,
            player_hit_speed_floor: Params::PLAYER_HIT_SPEED_FLOOR,
            launch_angle_max_deg: Params::LAUNCH_ANGLE_MAX_DEG,
            goal_width: Params::GOAL_WIDTH,
            goal_height: Params::GOAL_HEIGHT,
            match_duration: Params::MATCH_DURATION,
            relaunch_delay: Params::RELAUNCH_DELAY,
            shake_duration: Params::SHAKE_DURATION,
            shake_intensity: Params::SHAKE_INTENSITY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("bot_speed", self.bot_speed),
            ("puck_radius", self.puck_radius),
            ("puck_speed_initial", self.puck_speed_initial),
            ("goal_width", self.goal_width),
            ("goal_height", self.goal_height),
            ("relaunch_delay", self.relaunch_delay),
        ];
        for (field, value) in positive {
            // NaN fails this check too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("player_drag", self.player_drag),
            ("bot_lookahead", self.bot_lookahead),
            ("bot_dead_zone", self.bot_dead_zone),
            ("puck_speed_increment", self.puck_speed_increment),
            ("shake_duration", self.shake_duration),
            ("shake_intensity", self.shake_intensity),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        // Bounded so the border dash markings stay a finite list
        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if !(value <= Params::ARENA_MAX) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: Params::ARENA_MAX,
                });
            }
        }

        for (field, value) in [
            ("player_spawn_y", self.player_spawn_y),
            ("bot_spawn_y", self.bot_spawn_y),
        ] {
            if !(value >= 0.0 && value <= self.arena_height) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: self.arena_height,
                });
            }
        }

        if !(self.player_hit_speed_floor > 0.0 && self.player_hit_speed_floor <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "player_hit_speed_floor",
                value: self.player_hit_speed_floor,
                min: 0.0,
                max: 1.0,
            });
        }

        if !(self.launch_angle_max_deg >= 0.0 && self.launch_angle_max_deg <= 90.0) {
            return Err(ConfigError::OutOfRange {
                field: "launch_angle_max_deg",
                value: self.launch_angle_max_deg,
                min: 0.0,
                max: 90.0,
            });
        }

        if self.match_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        let fits = |w: f32, h: f32| w <= self.arena_width && h <= self.arena_height;
        if !fits(self.paddle_width, self.paddle_height) {
            return Err(self.does_not_fit("paddle"));
        }
        if !fits(self.goal_width, self.goal_height) {
            return Err(self.does_not_fit("goal"));
        }
        if !fits(self.puck_radius * 2.0, self.puck_radius * 2.0) {
            return Err(self.does_not_fit("puck"));
        }

        Ok(())
    }

    fn does_not_fit(&self, what: &'static str) -> ConfigError {
        ConfigError::DoesNotFit {
            what,
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Speed floor applied when the player strikes the puck
    pub fn player_hit_speed(&self, puck_speed: f32) -> f32 {
        puck_speed * self.player_hit_speed_floor
    }
}
