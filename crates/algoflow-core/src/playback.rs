//! Playback engine for one topic view.
//!
//! The engine owns the view's [`Canvas`] and drives exactly one mode at a
//! time: paging through the narrative steps, or running the topic's looping
//! simulation. Switching modes releases the previous mode before the canvas
//! is cleared for the next one.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::scene::{Canvas, Mount, Scene};
use crate::simulation::{ActivityLog, Simulation};
use crate::topic::{Step, TopicDescriptor, TopicId};

/// Speed multiplier offered by the simulation speed selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    /// 0.5x speed
    Half,
    /// Normal speed (1x)
    Normal,
    /// 1.5x speed
    OneAndHalf,
    /// 2x speed
    Double,
}

impl PlaybackSpeed {
    /// Every selectable speed, slowest first.
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndHalf,
        PlaybackSpeed::Double,
    ];

    /// Get the speed multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndHalf => 1.5,
            PlaybackSpeed::Double => 2.0,
        }
    }

    /// Delay between ticks at this speed, given the delay at 1x.
    pub fn scale(&self, base: Duration) -> Duration {
        base.div_f64(self.multiplier())
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        PlaybackSpeed::Normal
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = Error;

    fn try_from(multiplier: f64) -> Result<Self, Self::Error> {
        PlaybackSpeed::ALL
            .into_iter()
            .find(|s| (s.multiplier() - multiplier).abs() < f64::EPSILON)
            .ok_or(Error::UnsupportedSpeed(multiplier))
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.multiplier()
    }
}

/// Presentation mode of a topic view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Manually paged narrative steps.
    Steps,
    /// Autonomous looping simulation.
    Simulation,
}

/// Playback controller for a single topic view.
pub struct PlaybackEngine {
    topic: Arc<TopicDescriptor>,
    step_index: usize,
    mode: Mode,
    simulation: Option<Box<dyn Simulation>>,
    canvas: Canvas,
    log_capacity: usize,
    torn_down: bool,
}

impl PlaybackEngine {
    /// Enter a topic: steps mode at the first step.
    pub fn enter(topic: Arc<TopicDescriptor>) -> Self {
        Self::enter_with_log_capacity(topic, ActivityLog::DEFAULT_CAPACITY)
    }

    /// Enter a topic, keeping at most `log_capacity` simulation log lines.
    pub fn enter_with_log_capacity(topic: Arc<TopicDescriptor>, log_capacity: usize) -> Self {
        debug!(topic = %topic.id, steps = topic.step_count(), "enter topic view");
        let mut engine = Self {
            topic,
            step_index: 0,
            mode: Mode::Steps,
            simulation: None,
            canvas: Canvas::new(),
            log_capacity,
            torn_down: false,
        };
        engine.render_step();
        engine
    }

    /// Descriptor this engine plays.
    pub fn topic(&self) -> &Arc<TopicDescriptor> {
        &self.topic
    }

    /// Id of the played topic.
    pub fn topic_id(&self) -> &TopicId {
        &self.topic.id
    }

    /// Current presentation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Zero-based index of the current step. Kept across mode switches.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Number of narrative steps.
    pub fn step_count(&self) -> usize {
        self.topic.step_count()
    }

    /// The step at `step_index`.
    pub fn current_step(&self) -> &Step {
        &self.topic.steps[self.step_index]
    }

    /// False on the first step.
    pub fn can_previous(&self) -> bool {
        self.step_index > 0
    }

    /// False on the last step.
    pub fn can_next(&self) -> bool {
        self.step_index + 1 < self.step_count()
    }

    /// Advance one step, stopping at the last.
    pub fn next(&mut self) -> usize {
        self.jump_to(self.step_index.saturating_add(1))
    }

    /// Go back one step, stopping at the first.
    pub fn previous(&mut self) -> usize {
        self.jump_to(self.step_index.saturating_sub(1))
    }

    /// Jump to `index`, clamped to the valid range.
    ///
    /// Only meaningful in steps mode; the simulation owns the canvas otherwise.
    pub fn jump_to(&mut self, index: usize) -> usize {
        if self.torn_down || self.mode != Mode::Steps {
            return self.step_index;
        }
        let last = self.step_count().saturating_sub(1);
        self.step_index = index.min(last);
        self.render_step();
        self.step_index
    }

    /// Switch presentation mode.
    ///
    /// Entering simulation mode always builds a fresh, paused simulation;
    /// entering steps mode re-renders the preserved step.
    pub fn switch_to(&mut self, mode: Mode) {
        if self.torn_down {
            return;
        }
        self.release_simulation();
        self.mode = mode;
        debug!(topic = %self.topic.id, ?mode, step = self.step_index, "switch mode");

        match mode {
            Mode::Steps => self.render_step(),
            Mode::Simulation => {
                let mut simulation = self.topic.create_simulation();
                simulation.set_log_capacity(self.log_capacity);
                self.simulation = Some(simulation);
                self.render_simulation();
            }
        }
    }

    /// Start the simulation. Idempotent while running.
    pub fn start(&mut self, now: Duration) {
        if let Some(sim) = self.simulation.as_mut() {
            let before = sim.ticks();
            sim.start(now);
            if sim.ticks() != before {
                self.render_simulation();
            }
        }
    }

    /// Pause the simulation, keeping its state.
    pub fn pause(&mut self) {
        if let Some(sim) = self.simulation.as_mut() {
            sim.pause();
        }
    }

    /// Stop the simulation and restore its initial snapshot.
    pub fn reset(&mut self) {
        if let Some(sim) = self.simulation.as_mut() {
            sim.reset();
            self.render_simulation();
        }
    }

    /// Change the delay for ticks scheduled from now on.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        if let Some(sim) = self.simulation.as_mut() {
            sim.set_speed(speed);
        }
    }

    /// Fire due simulation ticks and re-render. Returns ticks fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let fired = match self.simulation.as_mut() {
            Some(sim) => sim.advance_to(now),
            None => 0,
        };
        if fired > 0 {
            self.render_simulation();
        }
        fired
    }

    /// When the next simulation tick is due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.simulation.as_ref().and_then(|s| s.next_due())
    }

    /// Whether a simulation exists and is running.
    pub fn is_playing(&self) -> bool {
        self.simulation.as_ref().is_some_and(|s| s.is_running())
    }

    /// Speed of the simulation, or the default when in steps mode.
    pub fn speed(&self) -> PlaybackSpeed {
        self.simulation
            .as_ref()
            .map(|s| s.speed())
            .unwrap_or_default()
    }

    /// The simulation, present only in simulation mode.
    pub fn simulation(&self) -> Option<&dyn Simulation> {
        self.simulation.as_deref()
    }

    /// Mount holding the visible frame.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Release the view: cancel any pending tick and clear the canvas.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.release_simulation();
        self.canvas.clear();
        self.torn_down = true;
        debug!(topic = %self.topic.id, "tear down topic view");
    }

    /// Whether `teardown` has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Snapshot for the client.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }

    fn release_simulation(&mut self) {
        if let Some(mut sim) = self.simulation.take() {
            sim.destroy();
        }
    }

    fn render_step(&mut self) {
        self.canvas.clear();
        self.topic.steps[self.step_index].render(&mut self.canvas);
    }

    fn render_simulation(&mut self) {
        if let Some(sim) = self.simulation.as_ref() {
            self.canvas.clear();
            self.canvas.present(sim.scene());
        }
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Playback status for sending to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackStatus {
    pub topic_id: TopicId,
    pub mode: Mode,
    pub step_index: usize,
    pub step_count: usize,
    pub step_title: String,
    pub step_description: String,
    pub can_previous: bool,
    pub can_next: bool,
    pub is_playing: bool,
    pub speed: PlaybackSpeed,
    pub scene: Option<Scene>,
    pub log: Vec<String>,
}

impl From<&PlaybackEngine> for PlaybackStatus {
    fn from(engine: &PlaybackEngine) -> Self {
        let step = engine.current_step();
        Self {
            topic_id: engine.topic.id.clone(),
            mode: engine.mode,
            step_index: engine.step_index,
            step_count: engine.step_count(),
            step_title: step.title.clone(),
            step_description: step.description.clone(),
            can_previous: engine.can_previous(),
            can_next: engine.can_next(),
            is_playing: engine.is_playing(),
            speed: engine.speed(),
            scene: engine.canvas.scene().cloned(),
            log: engine
                .simulation
                .as_ref()
                .map(|s| s.log().to_vec())
                .unwrap_or_default(),
        }
    }
}
