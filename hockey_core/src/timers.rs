//! Simulated-time timers
//!
//! Timers advance with the simulation step rather than wall-clock time, so
//! they pause with the game and are serialized with every other system.

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u32);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Once-per-second match countdown
    MatchTick,
    /// Put the puck back in play after a goal
    RelaunchPuck,
}

// Absorbs float error when summing fixed steps toward a whole interval
const FIRE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    remaining: f64,
    interval: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    next_id: u32,
    timers: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, kind: TimerKind, delay: f32) -> TimerId {
        self.insert(kind, delay as f64, None)
    }

    pub fn schedule_repeating(&mut self, kind: TimerKind, interval: f32) -> TimerId {
        let interval = interval as f64;
        self.insert(kind, interval, Some(interval))
    }

    fn insert(&mut self, kind: TimerKind, remaining: f64, interval: Option<f64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            remaining,
            interval,
        });
        id
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer by `dt` seconds and return what fired, in
    /// scheduling order. One-shot timers are removed once fired.
    pub fn advance(&mut self, dt: f32) -> Vec<(TimerId, TimerKind)> {
        let dt = dt as f64;
        let mut fired = Vec::new();

        self.timers.retain_mut(|timer| {
            timer.remaining -= dt;
            while timer.remaining <= FIRE_EPSILON {
                fired.push((timer.id, timer.kind));
                match timer.interval {
                    Some(interval) if interval > 0.0 => timer.remaining += interval,
                    _ => return false,
                }
            }
            true
        });

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 60.0;

    #[test]
    fn test_one_shot_fires_once_after_delay() {
        let mut timers = Timers::new();
        let id = timers.schedule_once(TimerKind::RelaunchPuck, 1.0);

        for _ in 0..59 {
            assert!(timers.advance(STEP).is_empty());
        }
        assert_eq!(timers.advance(STEP), vec![(id, TimerKind::RelaunchPuck)]);
        assert!(!timers.is_pending(id));
        assert!(timers.advance(STEP).is_empty());
    }

    #[test]
    fn test_repeating_fires_every_interval() {
        let mut timers = Timers::new();
        timers.schedule_repeating(TimerKind::MatchTick, 1.0);

        let mut ticks = 0;
        for _ in 0..(60 * 10) {
            ticks += timers.advance(STEP).len();
        }
        assert_eq!(ticks, 10);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_large_step_fires_repeating_multiple_times() {
        let mut timers = Timers::new();
        timers.schedule_repeating(TimerKind::MatchTick, 1.0);
        assert_eq!(timers.advance(3.5).len(), 3);
        assert_eq!(timers.advance(0.5).len(), 1);
    }

    #[test]
    fn test_cancel() {
        let mut timers = Timers::new();
        let relaunch = timers.schedule_once(TimerKind::RelaunchPuck, 1.0);
        let tick = timers.schedule_repeating(TimerKind::MatchTick, 1.0);

        assert!(timers.cancel(relaunch));
        assert!(!timers.cancel(relaunch), "second cancel is a no-op");

        let fired = timers.advance(1.0);
        assert_eq!(fired, vec![(tick, TimerKind::MatchTick)]);
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = Timers::new();
        timers.schedule_once(TimerKind::RelaunchPuck, 1.0);
        timers.schedule_repeating(TimerKind::MatchTick, 1.0);
        timers.cancel_all();
        assert!(timers.is_empty());
        assert!(timers.advance(5.0).is_empty());
    }

    #[test]
    fn test_fired_in_scheduling_order() {
        let mut timers = Timers::new();
        let a = timers.schedule_repeating(TimerKind::MatchTick, 1.0);
        let b = timers.schedule_once(TimerKind::RelaunchPuck, 1.0);
        assert_eq!(
            timers.advance(1.0),
            vec![(a, TimerKind::MatchTick), (b, TimerKind::RelaunchPuck)]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut timers = Timers::new();
        let a = timers.schedule_once(TimerKind::RelaunchPuck, 1.0);
        timers.advance(1.0);
        let b = timers.schedule_once(TimerKind::RelaunchPuck, 1.0);
        assert_ne!(a, b);
    }
}
