//! Navigation controller: the single source of truth for what is shown.
//!
//! The controller owns the current [`ViewState`] and mirrors every
//! transition into a [`History`]. Whether a transition writes history, and
//! how, depends only on the [`NavigationSource`] passed in.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::history::{History, HistoryEntry, HistoryWrite, NavigationState};
use crate::playback::{PlaybackEngine, PlaybackStatus};
use crate::registry::{LandingView, TopicRegistry};
use crate::simulation::ActivityLog;
use crate::topic::{TopicDetails, TopicId};

/// Document title while the landing view is shown.
pub const LANDING_TITLE: &str = "AlgoFlow — Interactive Data Structure & Algorithm Visualizer";

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    /// Resolving the first view from the URL.
    InitialLoad,
    /// A click in the application.
    User,
    /// Replaying an entry the browser popped.
    HistoryReplay,
}

impl NavigationSource {
    /// History write this source performs, if any.
    pub fn history_write(&self) -> Option<HistoryWrite> {
        match self {
            NavigationSource::InitialLoad => Some(HistoryWrite::Replace),
            NavigationSource::User => Some(HistoryWrite::Push),
            NavigationSource::HistoryReplay => None,
        }
    }
}

/// The view currently owned by the controller.
pub enum ViewState {
    /// Nothing rendered yet.
    Unloaded,
    Landing,
    Topic(PlaybackEngine),
}

impl ViewState {
    /// Topic shown, or `None` outside a topic view.
    pub fn topic_id(&self) -> Option<&TopicId> {
        match self {
            ViewState::Topic(engine) => Some(engine.topic_id()),
            _ => None,
        }
    }

    /// Whether the landing page is shown.
    pub fn is_landing(&self) -> bool {
        matches!(self, ViewState::Landing)
    }
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Unloaded => f.write_str("Unloaded"),
            ViewState::Landing => f.write_str("Landing"),
            ViewState::Topic(engine) => f.debug_tuple("Topic").field(engine.topic_id()).finish(),
        }
    }
}

/// A complete frame of the application for the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Frame {
    Unloaded,
    Landing {
        title: String,
        landing: LandingView,
    },
    Topic {
        title: String,
        topic: TopicDetails,
        playback: PlaybackStatus,
    },
}

/// Keeps the rendered view and the history stack in agreement.
pub struct NavigationController<H> {
    registry: Arc<TopicRegistry>,
    history: H,
    view: ViewState,
    page_title: String,
    landing_renders: u64,
    log_capacity: usize,
}

impl<H: History> NavigationController<H> {
    /// A controller in the unloaded state; call `initial_load` to show the first view.
    pub fn new(registry: Arc<TopicRegistry>, history: H) -> Self {
        Self {
            registry,
            history,
            view: ViewState::Unloaded,
            page_title: LANDING_TITLE.to_string(),
            landing_renders: 0,
            log_capacity: ActivityLog::DEFAULT_CAPACITY,
        }
    }

    /// Activity log lines kept by simulations created from now on.
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Resolve the first view from the URL fragment.
    pub fn initial_load(&mut self, fragment: Option<&str>) {
        match fragment.and_then(TopicId::from_fragment) {
            Some(id) => {
                self.select_topic(&id, NavigationSource::InitialLoad);
            }
            None => self.show_landing(NavigationSource::InitialLoad),
        }
    }

    /// Tear down the current view and show the landing page.
    pub fn show_landing(&mut self, source: NavigationSource) {
        self.leave_view();
        self.record(source, NavigationState::landing());
        self.page_title = LANDING_TITLE.to_string();
        self.view = ViewState::Landing;
        self.landing_renders += 1;
        debug!(?source, "show landing");
    }

    /// Open topic `id`. Returns whether the topic is now shown.
    ///
    /// An unknown id is ignored for user clicks and falls back to the
    /// landing view otherwise.
    pub fn select_topic(&mut self, id: &TopicId, source: NavigationSource) -> bool {
        let Some(topic) = self.registry.get(id).cloned() else {
            debug!(topic = %id, ?source, "unknown topic");
            if source != NavigationSource::User {
                self.show_landing(source);
            }
            return false;
        };

        self.leave_view();
        self.record(source, NavigationState::topic(id.clone()));
        self.page_title = topic.page_title();
        self.view = ViewState::Topic(PlaybackEngine::enter_with_log_capacity(
            topic,
            self.log_capacity,
        ));
        debug!(topic = %id, ?source, "select topic");
        true
    }

    /// React to the browser popping a history entry. Never writes history.
    pub fn pop_state(&mut self, state: Option<NavigationState>) {
        match state.and_then(|s| s.topic_id) {
            Some(id) => {
                self.select_topic(&id, NavigationSource::HistoryReplay);
            }
            None => self.show_landing(NavigationSource::HistoryReplay),
        }
    }

    /// The active view.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Id of the topic being shown, if any.
    pub fn current_topic(&self) -> Option<&TopicId> {
        self.view.topic_id()
    }

    /// Document title for the active view.
    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    /// Times the landing view has been rendered.
    pub fn landing_renders(&self) -> u64 {
        self.landing_renders
    }

    /// Topics this controller can navigate to.
    pub fn registry(&self) -> &Arc<TopicRegistry> {
        &self.registry
    }

    /// The history writes go to.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history, e.g. to drain a client outbox.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Engine of the active topic view.
    pub fn playback(&self) -> Option<&PlaybackEngine> {
        match &self.view {
            ViewState::Topic(engine) => Some(engine),
            _ => None,
        }
    }

    /// Mutable engine of the active topic view.
    pub fn playback_mut(&mut self) -> Option<&mut PlaybackEngine> {
        match &mut self.view {
            ViewState::Topic(engine) => Some(engine),
            _ => None,
        }
    }

    /// Fire due simulation ticks of the active view.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        self.playback_mut().map_or(0, |engine| engine.advance_to(now))
    }

    /// When the active view next needs `advance_to`.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.playback().and_then(PlaybackEngine::next_deadline)
    }

    /// Snapshot of everything the client draws.
    pub fn frame(&self) -> Frame {
        match &self.view {
            ViewState::Unloaded => Frame::Unloaded,
            ViewState::Landing => Frame::Landing {
                title: self.page_title.clone(),
                landing: self.registry.landing(),
            },
            ViewState::Topic(engine) => Frame::Topic {
                title: self.page_title.clone(),
                topic: TopicDetails::from(engine.topic().as_ref()),
                playback: engine.status(),
            },
        }
    }

    fn leave_view(&mut self) {
        if let ViewState::Topic(engine) = &mut self.view {
            engine.teardown();
        }
        self.view = ViewState::Unloaded;
    }

    fn record(&mut self, source: NavigationSource, state: NavigationState) {
        if let Some(kind) = source.history_write() {
            let entry = HistoryEntry::from(state);
            debug!(?kind, url = %entry.url, "history write");
            self.history.write(kind, entry);
        }
    }
}

impl<H> fmt::Debug for NavigationController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("view", &self.view)
            .field("page_title", &self.page_title)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::playback::Mode;
    use crate::testing::counter_topic;

    fn controller() -> NavigationController<MemoryHistory> {
        let mut registry = TopicRegistry::new();
        registry.register(counter_topic("stack", 3)).unwrap();
        registry.register(counter_topic("bfs", 4)).unwrap();
        NavigationController::new(Arc::new(registry), MemoryHistory::new())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn initial_fragment_opens_topic_with_replace() {
        let mut nav = controller();
        nav.initial_load(Some("#bfs"));

        assert_eq!(nav.current_topic(), Some(&TopicId::new("bfs")));
        assert_eq!(nav.landing_renders(), 0);
        assert_eq!(nav.history().writes().len(), 1);
        assert_eq!(nav.history().writes()[0].0, HistoryWrite::Replace);
        assert_eq!(nav.history().writes()[0].1.url, "#bfs");
        assert_eq!(nav.page_title(), "bfs — AlgoFlow | Algorithm Visualizer");
        assert_eq!(nav.history_mut().back(), None);
    }

    #[test]
    fn missing_or_unknown_fragment_shows_landing() {
        for fragment in [None, Some(""), Some("#nope")] {
            let mut nav = controller();
            nav.initial_load(fragment);

            assert!(nav.view().is_landing());
            assert_eq!(nav.landing_renders(), 1);
            assert_eq!(nav.history().writes().len(), 1);
            assert_eq!(nav.history().writes()[0].0, HistoryWrite::Replace);
            assert_eq!(nav.history().current().unwrap().url, "/");
            assert_eq!(nav.page_title(), LANDING_TITLE);
        }
    }

    #[test]
    fn user_navigation_pushes_exactly_once() {
        let mut nav = controller();
        nav.initial_load(None);

        assert!(nav.select_topic(&"stack".into(), NavigationSource::User));
        assert_eq!(nav.history().writes().len(), 2);
        nav.show_landing(NavigationSource::User);
        assert_eq!(nav.history().writes().len(), 3);

        let kinds: Vec<_> = nav.history().writes().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![HistoryWrite::Replace, HistoryWrite::Push, HistoryWrite::Push]);
    }

    #[test]
    fn unknown_user_selection_is_ignored() {
        let mut nav = controller();
        nav.initial_load(Some("stack"));
        nav.playback_mut().unwrap().next();

        assert!(!nav.select_topic(&"nope".into(), NavigationSource::User));
        assert_eq!(nav.current_topic(), Some(&TopicId::new("stack")));
        assert_eq!(nav.playback().unwrap().step_index(), 1);
        assert_eq!(nav.history().writes().len(), 1);
    }

    #[test]
    fn pop_state_replays_without_writing() {
        let mut nav = controller();
        nav.initial_load(None);
        nav.select_topic(&"stack".into(), NavigationSource::User);
        nav.select_topic(&"bfs".into(), NavigationSource::User);
        let writes = nav.history().writes().len();

        let state = nav.history_mut().back();
        nav.pop_state(state);
        assert_eq!(nav.current_topic(), Some(&TopicId::new("stack")));

        let state = nav.history_mut().back();
        nav.pop_state(state);
        assert!(nav.view().is_landing());

        assert_eq!(nav.history().writes().len(), writes);
    }

    #[test]
    fn unknown_popped_topic_falls_back_to_landing() {
        let mut nav = controller();
        nav.initial_load(Some("stack"));
        nav.pop_state(Some(NavigationState::topic("gone".into())));

        assert!(nav.view().is_landing());
        assert_eq!(nav.history().writes().len(), 1);
    }

    #[test]
    fn leaving_a_topic_cancels_its_simulation() {
        let mut nav = controller();
        nav.initial_load(Some("stack"));
        let engine = nav.playback_mut().unwrap();
        engine.switch_to(Mode::Simulation);
        engine.start(ms(0));
        assert!(nav.next_deadline().is_some());

        nav.select_topic(&"bfs".into(), NavigationSource::User);
        assert!(nav.next_deadline().is_none());
        assert_eq!(nav.advance_to(ms(1_000_000)), 0);
        assert_eq!(nav.playback().unwrap().mode(), Mode::Steps);
    }

    #[test]
    fn frames_follow_the_view() {
        let mut nav = controller();
        assert_eq!(nav.frame(), Frame::Unloaded);

        nav.initial_load(None);
        match nav.frame() {
            Frame::Landing { title, landing } => {
                assert_eq!(title, LANDING_TITLE);
                assert_eq!(landing.topic_count(), 2);
            }
            other => panic!("expected landing frame, got {other:?}"),
        }

        nav.select_topic(&"bfs".into(), NavigationSource::User);
        match nav.frame() {
            Frame::Topic { topic, playback, .. } => {
                assert_eq!(topic.steps.len(), 4);
                assert_eq!(playback.step_index, 0);
                assert_eq!(playback.mode, Mode::Steps);
            }
            other => panic!("expected topic frame, got {other:?}"),
        }
    }
}
