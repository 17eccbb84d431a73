//! Looping simulations driven by scripted micro-steps.
//!
//! Each topic implements [`Script`]: a toy data structure plus a fixed list
//! of actions, one per tick. [`ScriptedSimulation`] wraps a script with the
//! control surface every topic shares ([`Simulation`]): start, pause, reset,
//! speed and destroy, all on top of a single cancellable [`TickHandle`].

use std::collections::VecDeque;
use std::time::Duration;

use tracing::trace;

use crate::playback::PlaybackSpeed;
use crate::scene::Scene;
use crate::schedule::TickHandle;

/// Log line appended when a script wraps around to its initial snapshot.
pub const LOOP_RESTART: &str = "— Loop restart —";

/// Shortest gap allowed between two ticks.
const MIN_TICK_GAP: Duration = Duration::from_millis(1);

/// Human-readable action log, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ActivityLog {
    /// Lines kept when no capacity is configured.
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A log keeping at most `capacity` lines (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Prepend a line, dropping the oldest once full.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.capacity);
    }

    /// Drop every line. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change the capacity, truncating the oldest lines if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    /// Most recent line.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Lines, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

/// A topic's toy state and its scripted action list.
pub trait Script: Send + 'static {
    /// Perform one micro-step, logging what happened.
    ///
    /// Returns the delay (at 1x speed) before the next step. When the action
    /// list is exhausted the script restores its initial snapshot itself.
    fn step(&mut self, log: &mut ActivityLog) -> Duration;

    /// Restore the initial snapshot.
    fn rewind(&mut self);

    /// Frame for the current state.
    fn scene(&self) -> Scene;
}

/// Control surface of a live simulation.
///
/// Time is virtual: callers pass the current session time in. All
/// cancellation is synchronous.
pub trait Simulation: Send {
    /// Begin ticking. Runs the first tick at `now`; a no-op while a tick is
    /// already scheduled or after `destroy`.
    fn start(&mut self, now: Duration);

    /// Cancel the pending tick, keeping the current state.
    fn pause(&mut self);

    /// Cancel the pending tick, restore the initial snapshot and clear the log.
    fn reset(&mut self);

    /// Speed used for ticks scheduled from now on.
    fn set_speed(&mut self, speed: PlaybackSpeed);

    /// Cancel everything for good. Later calls are no-ops.
    fn destroy(&mut self);

    /// Fire every tick due at or before `now`. Returns how many fired.
    fn advance_to(&mut self, now: Duration) -> usize;

    /// Deadline of the pending tick.
    fn next_due(&self) -> Option<Duration>;

    fn is_running(&self) -> bool;

    fn is_destroyed(&self) -> bool;

    fn speed(&self) -> PlaybackSpeed;

    /// Ticks executed since creation or the last reset.
    fn ticks(&self) -> u64;

    fn scene(&self) -> Scene;

    fn log(&self) -> &ActivityLog;

    fn set_log_capacity(&mut self, capacity: usize);
}

/// Generic [`Simulation`] over any [`Script`].
#[derive(Debug)]
pub struct ScriptedSimulation<S> {
    script: S,
    timer: TickHandle,
    speed: PlaybackSpeed,
    log: ActivityLog,
    ticks: u64,
    destroyed: bool,
}

impl<S: Script> ScriptedSimulation<S> {
    pub fn new(script: S) -> Self {
        Self {
            script,
            timer: TickHandle::new(),
            speed: PlaybackSpeed::Normal,
            log: ActivityLog::new(),
            ticks: 0,
            destroyed: false,
        }
    }

    /// Box a fresh simulation, ready to hand out from a topic factory.
    pub fn boxed(script: S) -> Box<dyn Simulation> {
        Box::new(Self::new(script))
    }

    /// The underlying script, for inspecting toy state.
    pub fn script(&self) -> &S {
        &self.script
    }

    fn fire(&mut self, at: Duration) {
        let base = self.script.step(&mut self.log);
        self.ticks += 1;
        let gap = self.speed.scale(base).max(MIN_TICK_GAP);
        self.timer.schedule(at + gap);
        trace!(tick = self.ticks, ?at, ?gap, "simulation tick");
    }
}

impl<S: Script> Simulation for ScriptedSimulation<S> {
    fn start(&mut self, now: Duration) {
        if self.destroyed || self.timer.is_pending() {
            return;
        }
        self.fire(now);
    }

    fn pause(&mut self) {
        self.timer.cancel();
    }

    fn reset(&mut self) {
        if self.destroyed {
            return;
        }
        self.timer.cancel();
        self.script.rewind();
        self.log.clear();
        self.ticks = 0;
    }

    fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    fn destroy(&mut self) {
        self.timer.cancel();
        self.destroyed = true;
    }

    fn advance_to(&mut self, now: Duration) -> usize {
        if self.destroyed {
            return 0;
        }
        let mut fired = 0;
        while let Some(due) = self.timer.take_due(now) {
            self.fire(due);
            fired += 1;
        }
        fired
    }

    fn next_due(&self) -> Option<Duration> {
        self.timer.due()
    }

    fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn scene(&self) -> Scene {
        self.script.scene()
    }

    fn log(&self) -> &ActivityLog {
        &self.log
    }

    fn set_log_capacity(&mut self, capacity: usize) {
        self.log.set_capacity(capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CounterScript;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn log_is_most_recent_first_and_bounded() {
        let mut log = ActivityLog::with_capacity(3);
        for i in 1..=5 {
            log.push(format!("line {i}"));
        }
        assert_eq!(log.to_vec(), vec!["line 5", "line 4", "line 3"]);
        assert_eq!(log.latest(), Some("line 5"));
    }

    #[test]
    fn start_runs_first_tick_immediately() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));

        assert_eq!(sim.script().count, 1);
        assert_eq!(sim.next_due(), Some(ms(1000)));
        assert!(sim.is_running());
    }

    #[test]
    fn start_twice_keeps_one_chain() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));
        let due = sim.next_due();
        sim.start(ms(10));

        assert_eq!(sim.ticks(), 1);
        assert_eq!(sim.next_due(), due);
    }

    #[test]
    fn advance_fires_ticks_in_sequence() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));

        assert_eq!(sim.advance_to(ms(999)), 0);
        assert_eq!(sim.advance_to(ms(1000)), 1);
        assert_eq!(sim.advance_to(ms(3500)), 2);
        assert_eq!(sim.ticks(), 4);
        assert_eq!(sim.next_due(), Some(ms(4000)));
    }

    #[test]
    fn pause_keeps_state() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));
        sim.advance_to(ms(1000));
        sim.pause();

        assert!(!sim.is_running());
        assert_eq!(sim.advance_to(ms(60_000)), 0);
        assert_eq!(sim.script().count, 2);

        sim.start(ms(60_000));
        assert_eq!(sim.script().count, 3);
    }

    #[test]
    fn reset_restores_snapshot_and_clears_log() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));
        sim.advance_to(ms(2000));
        sim.reset();

        assert_eq!(sim.script().count, 0);
        assert!(sim.log().is_empty());
        assert!(!sim.is_running());
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn speed_applies_to_future_ticks_only() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));
        sim.set_speed(PlaybackSpeed::Double);

        // The queued tick keeps its deadline.
        assert_eq!(sim.next_due(), Some(ms(1000)));
        sim.advance_to(ms(1000));
        assert_eq!(sim.next_due(), Some(ms(1500)));
    }

    #[test]
    fn destroy_stops_everything() {
        let mut sim = ScriptedSimulation::new(CounterScript::default());
        sim.start(ms(0));
        sim.destroy();

        let log_len = sim.log().len();
        assert_eq!(sim.advance_to(ms(1_000_000)), 0);
        sim.start(ms(1_000_000));
        sim.reset();
        assert_eq!(sim.script().count, 1);
        assert_eq!(sim.log().len(), log_len);
        assert!(sim.next_due().is_none());
    }
}
