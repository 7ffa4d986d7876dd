use crate::components::Side;
use crate::config::Config;
use crate::timers::TimerId;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Goals scored by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub bot: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Bot => self.bot += 1,
        }
    }

    pub fn result(&self) -> MatchResult {
        use std::cmp::Ordering;
        match self.player.cmp(&self.bot) {
            Ordering::Greater => MatchResult::PlayerWins,
            Ordering::Less => MatchResult::BotWins,
            Ordering::Equal => MatchResult::Draw,
        }
    }
}

/// Final outcome once the clock runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    PlayerWins,
    BotWins,
    Draw,
}

impl MatchResult {
    pub fn banner(&self) -> &'static str {
        match self {
            MatchResult::PlayerWins => "🏆 Player Wins!",
            MatchResult::BotWins => "🤖 Bot Wins!",
            MatchResult::Draw => "⚔️ It's a Draw!",
        }
    }
}

/// Match clock state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    /// Terminal until the session is reset
    Ended(MatchResult),
}

/// All mutable per-match state, owned by the session and passed to systems
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score: Score,
    pub puck_speed: f32,
    pub time_left: u32,
    pub phase: MatchPhase,
    /// Repeating one-second countdown timer
    pub clock: Option<TimerId>,
    /// Outstanding post-goal relaunch, if any
    pub relaunch: Option<TimerId>,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        Self {
            score: Score::new(),
            puck_speed: config.puck_speed_initial,
            time_left: config.match_duration,
            phase: MatchPhase::Running,
            clock: None,
            relaunch: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, MatchPhase::Ended(_))
    }

    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            MatchPhase::Ended(result) => Some(result),
            MatchPhase::Running => None,
        }
    }

    pub fn relaunch_pending(&self) -> bool {
        self.relaunch.is_some()
    }

    pub fn score_text(&self) -> String {
        format!("Player: {}  |  Bot: {}", self.score.player, self.score.bot)
    }

    pub fn timer_text(&self) -> String {
        format!("Time: {}", self.time_left)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn next_seed(&mut self) -> u64 {
        use rand::RngCore;
        self.0.next_u64()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub goal: Option<Side>,
    pub puck_hit_paddle: Option<Side>,
    pub puck_hit_wall: bool,
    pub puck_launched: bool,
    pub clock_ticked: bool,
    pub match_ended: Option<MatchResult>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// A goal was scored and the camera should shake
    pub fn wants_shake(&self) -> bool {
        self.goal.is_some()
    }

    /// Score, clock or result text may read differently after this frame
    pub fn hud_changed(&self) -> bool {
        self.goal.is_some() || self.clock_ticked || self.match_ended.is_some()
    }

    /// Puck contacts and launches, for feedback that is not part of the HUD
    pub fn puck_activity(&self) -> bool {
        self.puck_hit_paddle.is_some() || self.puck_hit_wall || self.puck_launched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Bot);
        assert_eq!(score.player, 2);
        assert_eq!(score.bot, 1);
    }

    #[test]
    fn test_result_classification() {
        for (player, bot) in [(1, 0), (5, 2), (10, 9)] {
            assert_eq!(Score { player, bot }.result(), MatchResult::PlayerWins);
            assert_eq!(
                Score {
                    player: bot,
                    bot: player
                }
                .result(),
                MatchResult::BotWins
            );
        }
        for n in [0, 3, 7] {
            assert_eq!(Score { player: n, bot: n }.result(), MatchResult::Draw);
        }
    }

    #[test]
    fn test_banners() {
        assert!(MatchResult::PlayerWins.banner().contains("Player Wins"));
        assert!(MatchResult::BotWins.banner().contains("Bot Wins"));
        assert!(MatchResult::Draw.banner().contains("Draw"));
    }

    #[test]
    fn test_match_state_initial() {
        let state = MatchState::new(&Config::new());
        assert_eq!(state.score, Score::new());
        assert_eq!(state.puck_speed, 400.0);
        assert_eq!(state.time_left, 60);
        assert_eq!(state.phase, MatchPhase::Running);
        assert!(!state.is_ended());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_hud_text() {
        let mut state = MatchState::new(&Config::new());
        assert_eq!(state.score_text(), "Player: 0  |  Bot: 0");
        assert_eq!(state.timer_text(), "Time: 60");

        state.score.increment(Side::Bot);
        state.time_left = 42;
        assert_eq!(state.score_text(), "Player: 0  |  Bot: 1");
        assert_eq!(state.timer_text(), "Time: 42");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.goal = Some(Side::Player);
        events.puck_hit_wall = true;
        events.match_ended = Some(MatchResult::Draw);
        assert!(events.wants_shake());

        events.clear();

        assert!(events.goal.is_none());
        assert!(!events.puck_hit_wall);
        assert!(events.match_ended.is_none());
        assert!(!events.wants_shake());
    }

    #[test]
    fn test_hud_changed_only_on_text_events() {
        let mut events = Events::new();
        events.puck_hit_wall = true;
        events.puck_hit_paddle = Some(Side::Player);
        assert!(!events.hud_changed());
        assert!(events.puck_activity());

        events.clear();
        events.clock_ticked = true;
        assert!(events.hud_changed());
        assert!(!events.puck_activity());

        events.clear();
        events.match_ended = Some(MatchResult::PlayerWins);
        assert!(events.hud_changed());
    }
}
