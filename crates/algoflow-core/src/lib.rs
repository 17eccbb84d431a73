//! # AlgoFlow Core
//!
//! Navigation and playback kernel of the AlgoFlow visualizer.
//!
//! - [`NavigationController`] owns the current view and keeps it in step with
//!   a [`History`] stack.
//! - [`PlaybackEngine`] drives one topic view in either steps mode or
//!   simulation mode.
//! - [`Simulation`] is the control surface of a looping topic simulation,
//!   driven on a virtual clock through a single cancellable tick.
//!
//! Topic content is registered into a [`TopicRegistry`] before navigation
//! begins.

pub mod error;
pub mod history;
pub mod navigation;
pub mod playback;
pub mod registry;
pub mod scene;
pub mod schedule;
pub mod simulation;
pub mod topic;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use history::{History, HistoryEntry, HistoryWrite, MemoryHistory, NavigationState};
pub use navigation::{Frame, NavigationController, NavigationSource, ViewState, LANDING_TITLE};
pub use playback::{Mode, PlaybackEngine, PlaybackSpeed, PlaybackStatus};
pub use registry::{LandingView, TopicCard, TopicRegistry};
pub use scene::{Canvas, Mount, Scene, Visual};
pub use schedule::TickHandle;
pub use simulation::{ActivityLog, Script, ScriptedSimulation, Simulation, LOOP_RESTART};
pub use topic::{
    Category, Complexity, SimulationFactory, Step, StepSummary, TopicDescriptor, TopicDetails,
    TopicId, TopicInfo,
};
