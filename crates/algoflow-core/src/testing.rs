//! Minimal topic content for unit tests.

use std::time::Duration;

use crate::scene::{Scene, Visual};
use crate::simulation::{ActivityLog, Script, ScriptedSimulation, Simulation, LOOP_RESTART};
use crate::topic::{Category, Complexity, Step, TopicDescriptor, TopicId, TopicInfo};

/// Counts up once per second and wraps after five steps.
#[derive(Debug, Default)]
pub struct CounterScript {
    pub count: i64,
}

impl CounterScript {
    const WRAP_AT: i64 = 5;
}

impl Script for CounterScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        self.count += 1;
        log.push(format!("Count {}", self.count));
        if self.count >= Self::WRAP_AT {
            self.rewind();
            log.push(LOOP_RESTART);
        }
        Duration::from_millis(1000)
    }

    fn rewind(&mut self) {
        self.count = 0;
    }

    fn scene(&self) -> Scene {
        Scene::new(
            Visual::Stack {
                items: (1..=self.count).collect(),
                marker: None,
            },
            format!("count = {}", self.count),
        )
    }
}

fn counter_simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(CounterScript::default())
}

pub fn counter_topic(id: &str, steps: usize) -> TopicDescriptor {
    counter_topic_in(id, steps, Category::DataStructure)
}

/// A topic titled after its id with `steps` numbered steps.
pub fn counter_topic_in(id: &str, steps: usize, category: Category) -> TopicDescriptor {
    let info = TopicInfo {
        title: id.to_string(),
        subtitle: format!("{id} subtitle"),
        category,
        icon: "tag".to_string(),
        time: Complexity::new("O(1)", "constant"),
        space: Complexity::new("O(n)", "linear"),
    };
    let steps = (0..steps)
        .map(|i| {
            Step::new(
                format!("Step {}", i + 1),
                format!("Description {}", i + 1),
                Scene::new(
                    Visual::Array {
                        items: vec![i as i64],
                        highlight: Some(0),
                        marker: None,
                    },
                    format!("step {i}"),
                ),
            )
        })
        .collect();
    TopicDescriptor::new(TopicId::new(id), info, steps, counter_simulation)
}
