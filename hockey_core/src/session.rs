use hecs::World;

use crate::map::Aabb;
use crate::systems::{kickoff, start_clock};
use crate::timers::Timers;
use crate::{
    spawn_rink, step, Body, BotPaddle, Config, Events, GameRng, GoalSensor, Keys, MatchResult,
    MatchState, PlayerPaddle, Puck, Rink, RinkEntities, Time,
};

/// Body state needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player: Body,
    pub bot: Body,
    pub puck: Body,
    pub goals: [Aabb; 2],
}

/// One match: the ECS world plus every resource the systems need.
///
/// Reset throws the whole session away and builds a fresh one, so timers from
/// the previous match can never fire into the new one.
pub struct Session {
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

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let rink = Rink::new(&config);
        let mut world = World::new();
        let entities = spawn_rink(&mut world, &rink, &config);

        let mut state = MatchState::new(&config);
        let mut timers = Timers::new();
        let mut events = Events::new();

        start_clock(&mut state, &mut timers);
        kickoff(&mut world, &state, &mut events);

        Self {
            world,
            time: Time::default(),
            rink,
            config,
            state,
            events,
            timers,
            rng: GameRng::new(seed),
            entities,
        }
    }

    /// Advance by `dt` seconds of wall time with the given keys held
    pub fn frame(&mut self, dt: f32, keys: Keys) -> &Events {
        self.time.dt = dt;
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
        &self.events
    }

    /// Start a new match with the same configuration
    pub fn reset(&mut self) {
        let seed = self.rng.next_seed();
        let previous = self.state.score;
        *self = Self::new(self.config.clone(), seed);

        tracing::info!(
            player = previous.player,
            bot = previous.bot,
            "match reset"
        );
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        let body = |entity| self.world.get::<&Body>(entity).ok().map(|b| *b);
        Some(Snapshot {
            player: body(self.entities.player)?,
            bot: body(self.entities.bot)?,
            puck: body(self.entities.puck)?,
            goals: [
                body(self.entities.goals[0])?.bounds(),
                body(self.entities.goals[1])?.bounds(),
            ],
        })
    }

    pub fn score_text(&self) -> String {
        self.state.score_text()
    }

    pub fn timer_text(&self) -> String {
        self.state.timer_text()
    }

    /// Result banner, once the match has ended
    pub fn banner(&self) -> Option<&'static str> {
        self.state.result().map(|result| result.banner())
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.state.result()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rink(&self) -> &Rink {
        &self.rink
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn entities(&self) -> &RinkEntities {
        &self.entities
    }

    /// Exactly one of each paddle and the puck, and both goals
    pub fn has_expected_entities(&self) -> bool {
        self.world.query::<&PlayerPaddle>().iter().count() == 1
            && self.world.query::<&BotPaddle>().iter().count() == 1
            && self.world.query::<&Puck>().iter().count() == 1
            && self.world.query::<&GoalSensor>().iter().count() == 2
    }
}
