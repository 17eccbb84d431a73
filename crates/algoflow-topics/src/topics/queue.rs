//! Queue (FIFO).

use std::collections::VecDeque;
use std::time::Duration;

use algoflow_core::scene::Marker;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{info, Cursor};

const TICK: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
enum Action {
    Enqueue(&'static str),
    Dequeue,
}

const ACTIONS: [Action; 10] = [
    Action::Enqueue("A"),
    Action::Enqueue("B"),
    Action::Enqueue("C"),
    Action::Enqueue("D"),
    Action::Dequeue,
    Action::Dequeue,
    Action::Enqueue("E"),
    Action::Dequeue,
    Action::Dequeue,
    Action::Dequeue,
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("queue"),
        info(
            "Queue (FIFO)",
            "Linear data structure",
            Category::DataStructure,
            "queue",
            ("O(1)", "Enqueue/Dequeue operations"),
            ("O(n)", "Total elements stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(items: &[&str], marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::Queue {
            items: items.iter().map(|s| s.to_string()).collect(),
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Empty Queue",
            "A queue is a First-In, First-Out (FIFO) data structure. Like a line at a store, the first person in line is served first. We start with an empty queue.",
            frame(&[], None, "Empty queue — ready for operations"),
        ),
        Step::new(
            "Enqueue A",
            "The Enqueue operation adds an element to the rear (back) of the queue. We add element \"A\". It is both the front and rear.",
            frame(&["A"], Some(Marker::Inserted { index: 0 }), "Enqueue(A) → A is front and rear"),
        ),
        Step::new(
            "Enqueue B",
            "We enqueue \"B\". It goes to the rear. \"A\" is still at the front. Elements are always added at the rear.",
            frame(&["A", "B"], Some(Marker::Inserted { index: 1 }), "Enqueue(B) → B is now the rear"),
        ),
        Step::new(
            "Enqueue C",
            "We enqueue \"C\". The queue now has 3 elements: A (front), B, C (rear).",
            frame(&["A", "B", "C"], Some(Marker::Inserted { index: 2 }), "Enqueue(C) → C is now the rear"),
        ),
        Step::new(
            "Dequeue → A",
            "The Dequeue operation removes the front element. Since \"A\" was enqueued first, it is removed first (FIFO). \"B\" becomes the new front.",
            frame(
                &["B", "C"],
                Some(Marker::Removed { value: "A".into() }),
                "Dequeue() → returned A, B is now front",
            ),
        ),
        Step::new(
            "Dequeue → B",
            "We dequeue again. \"B\" is removed from the front. Only \"C\" remains, which is both front and rear.",
            frame(
                &["C"],
                Some(Marker::Removed { value: "B".into() }),
                "Dequeue() → returned B, C is now front",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(QueueScript::default())
}

/// Enqueues and dequeues letters, then starts over empty.
#[derive(Debug, Default)]
pub struct QueueScript {
    items: VecDeque<&'static str>,
    cursor: Cursor,
}

impl QueueScript {
    pub fn front(&self) -> Option<&str> {
        self.items.front().copied()
    }

    pub fn rear(&self) -> Option<&str> {
        self.items.back().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Script for QueueScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        match ACTIONS[self.cursor.get()] {
            Action::Enqueue(v) => {
                self.items.push_back(v);
                log.push(format!("Enqueue({v})"));
            }
            Action::Dequeue => {
                if let Some(v) = self.items.pop_front() {
                    log.push(format!("Dequeue() → {v}"));
                }
            }
        }
        if self.cursor.advance(ACTIONS.len()) {
            self.items.clear();
            log.push(LOOP_RESTART);
        }
        TICK
    }

    fn rewind(&mut self) {
        self.items.clear();
        self.cursor.rewind();
    }

    fn scene(&self) -> Scene {
        let items: Vec<&str> = self.items.iter().copied().collect();
        let caption = match (self.front(), self.rear()) {
            (Some(front), Some(rear)) => format!("Front: {front} · Rear: {rear} · Size: {}", self.len()),
            _ => "Empty".to_string(),
        };
        frame(&items, None, &caption)
    }
}
