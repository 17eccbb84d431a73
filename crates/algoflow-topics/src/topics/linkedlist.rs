//! Singly linked list.

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
    InsertHead(&'static str),
    InsertTail(&'static str),
    DeleteHead,
    Traverse,
}

const ACTIONS: [Action; 12] = [
    Action::InsertHead("A"),
    Action::InsertTail("B"),
    Action::InsertTail("C"),
    Action::InsertHead("D"),
    Action::Traverse,
    Action::DeleteHead,
    Action::DeleteHead,
    Action::InsertHead("E"),
    Action::Traverse,
    Action::DeleteHead,
    Action::DeleteHead,
    Action::DeleteHead,
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("linkedlist"),
        info(
            "Linked List",
            "Dynamic data structure",
            Category::DataStructure,
            "link",
            ("O(1) / O(n)", "Insert/Delete O(1), Search O(n)"),
            ("O(n)", "Total nodes stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(nodes: &[&str], highlight: Option<usize>, marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::LinkedList {
            nodes: nodes.iter().map(|s| s.to_string()).collect(),
            highlight,
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Empty List",
            "A linked list is a linear data structure where each node contains data and a pointer (reference) to the next node. We start with an empty list: the Head pointer is null.",
            frame(&[], None, None, "Head → null"),
        ),
        Step::new(
            "Insert Node A",
            "We insert node \"A\" at the head. The Head pointer now points to A, and A points to null. This is our first node.",
            frame(&["A"], Some(0), Some(Marker::Inserted { index: 0 }), "Head → [A] → null"),
        ),
        Step::new(
            "Insert Node B at Tail",
            "We insert \"B\" at the tail. Node A's next pointer is updated to point to B. B points to null.",
            frame(&["A", "B"], Some(1), Some(Marker::Inserted { index: 1 }), "Head → [A] → [B] → null"),
        ),
        Step::new(
            "Insert Node C at Head",
            "We insert \"C\" at the head. C's next pointer is set to A (the old head). The Head pointer is updated to C.",
            frame(
                &["C", "A", "B"],
                Some(0),
                Some(Marker::Inserted { index: 0 }),
                "Head → [C] → [A] → [B] → null",
            ),
        ),
        Step::new(
            "Delete Node A",
            "To delete A, we update C's next pointer to skip A and point directly to B. Node A is removed from the chain.",
            frame(
                &["C", "B"],
                None,
                Some(Marker::Removed { value: "A".into() }),
                "Head → [C] → [B] → null (A removed)",
            ),
        ),
        Step::new(
            "Traverse",
            "Traversal visits each node from Head to the end. We start at C, follow the pointer to B, then reach null. Traversal is O(n).",
            frame(&["C", "B"], Some(0), Some(Marker::Focused { index: 0 }), "Traversing: C → B → null"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(LinkedListScript::default())
}

/// Inserts at both ends, deletes from the head and walks the list.
#[derive(Debug, Default)]
pub struct LinkedListScript {
    nodes: VecDeque<&'static str>,
    highlight: Option<usize>,
    cursor: Cursor,
}

impl LinkedListScript {
    /// Node values from head to tail.
    pub fn nodes(&self) -> Vec<&str> {
        self.nodes.iter().copied().collect()
    }
}

impl Script for LinkedListScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        self.highlight = None;
        match ACTIONS[self.cursor.get()] {
            Action::InsertHead(v) => {
                self.nodes.push_front(v);
                self.highlight = Some(0);
                log.push(format!("Insert \"{v}\" at head"));
            }
            Action::InsertTail(v) => {
                self.nodes.push_back(v);
                self.highlight = Some(self.nodes.len() - 1);
                log.push(format!("Insert \"{v}\" at tail"));
            }
            Action::DeleteHead => {
                if let Some(v) = self.nodes.pop_front() {
                    log.push(format!("Delete head \"{v}\""));
                }
            }
            Action::Traverse => {
                self.highlight = Some(0);
                log.push("Traversing list...");
            }
        }
        if self.cursor.advance(ACTIONS.len()) {
            self.rewind();
            log.push(LOOP_RESTART);
        }
        TICK
    }

    fn rewind(&mut self) {
        self.nodes.clear();
        self.highlight = None;
        self.cursor.rewind();
    }

    fn scene(&self) -> Scene {
        let nodes = self.nodes();
        let mut caption = String::from("Head");
        for node in &nodes {
            caption.push_str(&format!(" → [{node}]"));
        }
        caption.push_str(" → null");
        frame(&nodes, self.highlight, None, &caption)
    }
}
