/// Game tuning parameters for the rink
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const ARENA_MAX: f32 = 10_000.0; // Largest accepted width or height

    // Paddles
    pub const PADDLE_WIDTH: f32 = 70.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 550.0;
    pub const BOT_SPAWN_Y: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 150.0;
    pub const PLAYER_DRAG: f32 = 1000.0;
    pub const BOT_SPEED: f32 = 100.0;
    pub const BOT_LOOKAHEAD: f32 = 0.1; // seconds of puck travel to predict
    pub const BOT_DEAD_ZONE: f32 = 5.0;

    // Puck
    pub const PUCK_RADIUS: f32 = 15.0;
    pub const PUCK_SPEED_INITIAL: f32 = 400.0;
    pub const PUCK_SPEED_INCREMENT: f32 = 10.0; // Added per goal
    pub const PLAYER_HIT_SPEED_FLOOR: f32 = 0.8; // Fraction of puck speed
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 45.0;

    // Goals
    pub const GOAL_WIDTH: f32 = 200.0;
    pub const GOAL_HEIGHT: f32 = 20.0;

    // Match
    pub const MATCH_DURATION: u32 = 60;
    pub const CLOCK_INTERVAL: f32 = 1.0;
    pub const RELAUNCH_DELAY: f32 = 1.0;

    // Cosmetics
    pub const SHAKE_DURATION: f32 = 0.2;
    pub const SHAKE_INTENSITY: f32 = 0.005;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
