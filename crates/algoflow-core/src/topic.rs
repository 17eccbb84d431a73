//! Topic descriptors: metadata, narrative steps and a simulation factory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scene::{Mount, Scene};
use crate::simulation::Simulation;

/// Identifier of a topic, also used as its URL fragment (`#bfs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a URL fragment, with or without the leading `#`.
    ///
    /// Returns `None` for an empty fragment.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    /// The fragment form used in history entries.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TopicId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Landing page grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DataStructure,
    Algorithm,
}

impl Category {
    /// Badge label shown on cards and the details panel.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DataStructure => "Data Structure",
            Category::Algorithm => "Algorithm",
        }
    }
}

/// A complexity annotation such as `O(log n)` with a short explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub notation: String,
    pub note: String,
}

impl Complexity {
    pub fn new(notation: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            note: note.into(),
        }
    }
}

/// Display metadata for a topic; feeds the details panel and landing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInfo {
    pub title: String,
    pub subtitle: String,
    pub category: Category,
    /// Material symbol name for the nav entry.
    pub icon: String,
    pub time: Complexity,
    pub space: Complexity,
}

/// One narrative frame of a topic walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
    scene: Scene,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>, scene: Scene) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            scene,
        }
    }

    /// Draw this step into `mount`. Rendering the same step twice yields the
    /// same frame.
    pub fn render(&self, mount: &mut dyn Mount) {
        mount.present(self.scene.clone());
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

/// Builds a fresh simulation handle for a topic.
pub type SimulationFactory = fn() -> Box<dyn Simulation>;

/// Everything the engine needs to show one topic.
pub struct TopicDescriptor {
    pub id: TopicId,
    pub info: TopicInfo,
    pub steps: Vec<Step>,
    factory: SimulationFactory,
}

impl TopicDescriptor {
    pub fn new(id: TopicId, info: TopicInfo, steps: Vec<Step>, factory: SimulationFactory) -> Self {
        Self {
            id,
            info,
            steps,
            factory,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Instantiate a new, paused simulation for this topic.
    pub fn create_simulation(&self) -> Box<dyn Simulation> {
        (self.factory)()
    }

    /// Title written to the document while this topic is open.
    pub fn page_title(&self) -> String {
        format!("{} — AlgoFlow | Algorithm Visualizer", self.info.title)
    }
}

impl fmt::Debug for TopicDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicDescriptor")
            .field("id", &self.id)
            .field("title", &self.info.title)
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// One entry of the step selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSummary {
    pub index: usize,
    pub title: String,
    pub description: String,
}

/// Read-only details panel for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetails {
    pub id: TopicId,
    pub kind: &'static str,
    #[serde(flatten)]
    pub info: TopicInfo,
    pub steps: Vec<StepSummary>,
}

impl From<&TopicDescriptor> for TopicDetails {
    fn from(topic: &TopicDescriptor) -> Self {
        Self {
            id: topic.id.clone(),
            kind: topic.info.category.label(),
            info: topic.info.clone(),
            steps: topic
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| StepSummary {
                    index,
                    title: step.title.clone(),
                    description: step.description.clone(),
                })
                .collect(),
        }
    }
}
