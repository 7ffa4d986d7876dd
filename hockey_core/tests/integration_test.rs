use glam::Vec2;
use hecs::World;
use hockey_core::systems::start_clock;
use hockey_core::*;

const DT: f32 = 1.0 / 60.0;

/// All simulation resources, driven through `step` directly
struct Harness {
    world: World,
    time: Time,
    rink: Rink,
    config: Config,
    state: MatchState,
    events: Events,
    timers: Timers,
    rng: GameRng,
    entities: RinkEntities,
}

impl Harness {
    /// Puck resting at center ice, clock armed, no kickoff
    fn new() -> Self {
        let config = Config::new();
        let rink = Rink::new(&config);
        let mut world = World::new();
        let entities = spawn_rink(&mut world, &rink, &config);
        let mut state = MatchState::new(&config);
        let mut timers = Timers::new();
        start_clock(&mut state, &mut timers);

        Self {
            world,
            time: Time::default(),
            rink,
            config,
            state,
            events: Events::new(),
            timers,
            rng: GameRng::new(42),
            entities,
        }
    }

    fn frame(&mut self, keys: Keys) {
        self.time.dt = DT;
        step(
            &mut self.world,
            &mut self.time,
            &self.rink,
            &self.config,
            &mut self.state,
            &mut self.events,
            &mut self.timers,
            &mut self.rng,
            keys,
        );
    }

    fn body(&self, entity: hecs::Entity) -> Body {
        *self.world.get::<&Body>(entity).unwrap()
    }

    fn place_puck(&mut self, pos: Vec2, vel: Vec2) {
        let mut body = self.world.get::<&mut Body>(self.entities.puck).unwrap();
        body.pos = pos;
        body.vel = vel;
    }
}

fn place_puck(session: &mut Session, pos: Vec2) {
    let puck = session.entities().puck;
    let mut body = session.world_mut().get::<&mut Body>(puck).unwrap();
    body.pos = pos;
    body.vel = Vec2::ZERO;
}

/// Drop the puck into a goal and wait until it is back in play
fn score_into(session: &mut Session, pos: Vec2) {
    place_puck(session, pos);
    let events = session.frame(DT, Keys::none());
    assert!(events.goal.is_some(), "puck at {pos:?} should score");
    for _ in 0..60 {
        session.frame(DT, Keys::none());
    }
    assert!(!session.state().relaunch_pending());
}

const TOP_GOAL: Vec2 = Vec2::new(320.0, 15.0);
const BOTTOM_GOAL: Vec2 = Vec2::new(320.0, 585.0);

#[test]
fn test_top_goal_scores_for_player_and_relaunches() {
    let mut h = Harness::new();
    h.place_puck(Vec2::new(480.0, 20.0), Vec2::new(0.0, -100.0));

    h.frame(Keys::none());

    assert_eq!(h.state.score, Score { player: 1, bot: 0 });
    assert_eq!(h.state.puck_speed, 410.0);
    assert_eq!(h.state.time_left, 60);
    assert_eq!(h.events.goal, Some(Side::Player));
    assert!(h.events.wants_shake());

    let puck = h.body(h.entities.puck);
    assert_eq!(puck.pos, Vec2::new(400.0, 300.0));
    assert_eq!(puck.vel, Vec2::ZERO);

    // Parked for the whole relaunch delay
    for _ in 0..59 {
        h.frame(Keys::none());
        let puck = h.body(h.entities.puck);
        assert_eq!(puck.vel, Vec2::ZERO, "puck must stay still until relaunch");
        assert_eq!(puck.pos, Vec2::new(400.0, 300.0));
    }

    h.frame(Keys::none());

    assert!(h.events.puck_launched);
    let puck = h.body(h.entities.puck);
    assert!((puck.speed() - 410.0).abs() < 0.01, "speed was {}", puck.speed());
    let angle = (puck.vel.y.abs() / puck.vel.x).atan().to_degrees();
    assert!(puck.vel.x > 0.0);
    assert!(angle <= 45.0 + 1e-3, "launch angle {angle} too steep");
}

#[test]
fn test_match_ends_with_player_win() {
    let mut h = Harness::new();
    h.state.score = Score { player: 2, bot: 1 };
    h.state.time_left = 1;

    for _ in 0..60 {
        h.frame(Keys {
            right: true,
            ..Keys::none()
        });
    }

    assert_eq!(h.state.time_left, 0);
    assert_eq!(h.state.result(), Some(MatchResult::PlayerWins));
    assert_eq!(h.events.match_ended, Some(MatchResult::PlayerWins));
    assert_eq!(h.state.result().map(|r| r.banner()), Some("🏆 Player Wins!"));
    assert!(h.timers.is_empty());

    for (_e, body) in h.world.query::<&Body>().iter() {
        assert_eq!(body.vel, Vec2::ZERO);
    }
}

#[test]
fn test_nothing_changes_after_match_end() {
    let mut h = Harness::new();
    h.state.time_left = 1;
    for _ in 0..60 {
        h.frame(Keys::none());
    }
    assert!(h.state.is_ended());

    h.place_puck(Vec2::new(400.0, 10.0), Vec2::new(0.0, -300.0));
    let player_before = h.body(h.entities.player);

    for _ in 0..180 {
        h.frame(Keys {
            left: true,
            up: true,
            ..Keys::none()
        });
        assert!(h.events.goal.is_none());
        assert!(h.events.match_ended.is_none(), "only one Ended transition");
        assert!(!h.events.clock_ticked);
    }

    assert_eq!(h.state.score, Score::new());
    assert_eq!(h.state.time_left, 0);
    assert_eq!(h.state.puck_speed, 400.0);
    assert_eq!(h.body(h.entities.player), player_before);
    assert_eq!(h.body(h.entities.puck).pos, Vec2::new(400.0, 10.0));
}

#[test]
fn test_clock_ticks_once_per_second() {
    let mut session = Session::new(Config::new(), 3);

    for _ in 0..59 {
        session.frame(DT, Keys::none());
    }
    assert_eq!(session.state().time_left, 60);

    let events = session.frame(DT, Keys::none());
    assert!(events.clock_ticked);
    assert_eq!(session.state().time_left, 59);
    assert_eq!(session.timer_text(), "Time: 59");

    for _ in 0..60 {
        session.frame(DT, Keys::none());
    }
    assert_eq!(session.state().time_left, 58);
}

#[test]
fn test_long_frame_is_clamped() {
    let mut session = Session::new(Config::new(), 3);

    session.frame(5.0, Keys::none());

    assert_eq!(session.state().time_left, 60);
    let puck = session.snapshot().unwrap().puck;
    assert!(puck.pos.distance(Vec2::new(400.0, 300.0)) <= 400.0 * 0.1 * 2.0_f32.sqrt() + 1.0);
}

#[test]
fn test_puck_speed_grows_per_goal_for_either_side() {
    let mut session = Session::new(Config::new(), 5);

    score_into(&mut session, TOP_GOAL);
    assert_eq!(session.state().puck_speed, 410.0);

    score_into(&mut session, BOTTOM_GOAL);
    assert_eq!(session.state().puck_speed, 420.0);

    score_into(&mut session, BOTTOM_GOAL);
    assert_eq!(session.state().puck_speed, 430.0);
    assert_eq!(session.state().score, Score { player: 1, bot: 2 });
}

#[test]
fn test_reset_after_three_all() {
    let mut session = Session::new(Config::new(), 9);
    for _ in 0..3 {
        score_into(&mut session, TOP_GOAL);
        score_into(&mut session, BOTTOM_GOAL);
    }
    assert_eq!(session.score_text(), "Player: 3  |  Bot: 3");
    assert_eq!(session.state().puck_speed, 460.0);

    session.reset();

    assert_eq!(session.state().score, Score::new());
    assert_eq!(session.state().puck_speed, 400.0);
    assert_eq!(session.state().time_left, 60);
    assert_eq!(session.state().phase, MatchPhase::Running);
    assert_eq!(session.banner(), None);
    assert_eq!(session.score_text(), "Player: 0  |  Bot: 0");
    assert!(session.has_expected_entities());

    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.puck.pos, Vec2::new(400.0, 300.0));
    assert_eq!(snapshot.puck.vel, Vec2::new(400.0, 400.0));
}

#[test]
fn test_reset_drops_pending_relaunch() {
    let mut session = Session::new(Config::new(), 11);
    place_puck(&mut session, TOP_GOAL);
    session.frame(DT, Keys::none());
    assert!(session.state().relaunch_pending());

    session.reset();

    assert!(!session.state().relaunch_pending());
    assert_eq!(session.timers().len(), 1, "only the fresh clock remains");
}

#[test]
fn test_full_match_has_single_end() {
    let mut session = Session::new(Config::new(), 21);
    let mut ended = 0;
    let mut last_time = session.state().time_left;

    for i in 0..(65 * 60) {
        let keys = Keys {
            left: (i / 90) % 2 == 0,
            right: (i / 90) % 2 == 1,
            up: (i / 200) % 2 == 0,
            down: (i / 200) % 2 == 1,
        };
        if session.frame(DT, keys).match_ended.is_some() {
            ended += 1;
        }

        let time_left = session.state().time_left;
        assert!(time_left <= last_time, "clock never runs backwards");
        last_time = time_left;

        let player = session.snapshot().unwrap().player;
        let half = player.shape.half_extents();
        assert!(player.pos.x >= half.x && player.pos.x <= 800.0 - half.x);
        assert!(player.pos.y >= half.y && player.pos.y <= 600.0 - half.y);
        assert!(session.has_expected_entities());
    }

    assert_eq!(ended, 1);
    assert_eq!(session.state().time_left, 0);
    let result = session.result().unwrap();
    assert_eq!(result, session.state().score.result());
    assert_eq!(session.banner(), Some(result.banner()));
}

#[test]
fn test_same_seed_same_match() {
    let mut a = Session::new(Config::new(), 77);
    let mut b = Session::new(Config::new(), 77);

    for i in 0..1200 {
        let keys = Keys {
            right: i % 120 < 60,
            ..Keys::none()
        };
        a.frame(DT, keys);
        b.frame(DT, keys);
    }

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.state().score, b.state().score);
}

#[test]
fn test_config_overrides_flow_into_session() {
    let config = Config::from_json(r#"{ "match_duration": 2, "puck_speed_initial": 300.0 }"#).unwrap();
    let mut session = Session::new(config, 1);
    assert_eq!(session.timer_text(), "Time: 2");
    assert_eq!(session.snapshot().unwrap().puck.vel, Vec2::new(300.0, 300.0));

    for _ in 0..120 {
        session.frame(DT, Keys::none());
    }
    assert!(session.state().is_ended());
}
