//! Stack (LIFO).

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
    Push(i64),
    Pop,
}

const ACTIONS: [Action; 10] = [
    Action::Push(42),
    Action::Push(18),
    Action::Push(95),
    Action::Push(7),
    Action::Pop,
    Action::Pop,
    Action::Push(63),
    Action::Pop,
    Action::Pop,
    Action::Pop,
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("stack"),
        info(
            "Stack (LIFO)",
            "Linear data structure",
            Category::DataStructure,
            "layers",
            ("O(1)", "Push/Pop operations"),
            ("O(n)", "Total elements stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(items: &[i64], marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::Stack {
            items: items.to_vec(),
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Empty Stack",
            "A stack is a Last-In, First-Out (LIFO) data structure. Think of a stack of plates: you can only add or remove from the top. We start with an empty stack.",
            frame(&[], None, "Empty stack — ready for operations"),
        ),
        Step::new(
            "Push 42",
            "The Push operation adds an element to the top of the stack. We push the value 42 onto the stack. It becomes the first and only element.",
            frame(&[42], Some(Marker::Inserted { index: 0 }), "Push(42) → 42 is now the top"),
        ),
        Step::new(
            "Push 18",
            "We push another value, 18, onto the stack. It goes on top of 42. Now 18 is the new top element.",
            frame(&[42, 18], Some(Marker::Inserted { index: 1 }), "Push(18) → 18 is now the top"),
        ),
        Step::new(
            "Push 95",
            "We push 95 onto the stack. The stack now has 3 elements, with 95 at the top. Remember: the last element pushed is always on top.",
            frame(&[42, 18, 95], Some(Marker::Inserted { index: 2 }), "Push(95) → 95 is now the top"),
        ),
        Step::new(
            "Pop → 95",
            "The Pop operation removes the top element. Since 95 was pushed last, it is removed first (LIFO). The stack now has 2 elements with 18 on top.",
            frame(
                &[42, 18],
                Some(Marker::Removed { value: "95".into() }),
                "Pop() → returned 95, 18 is now the top",
            ),
        ),
        Step::new(
            "Peek → 18",
            "Peek lets us look at the top element without removing it. The top element is 18. The stack remains unchanged.",
            frame(&[42, 18], Some(Marker::Focused { index: 1 }), "Peek() → top element is 18"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(StackScript::default())
}

/// Pushes and pops a fixed sequence of values, then starts over empty.
#[derive(Debug, Default)]
pub struct StackScript {
    items: Vec<i64>,
    cursor: Cursor,
}

impl StackScript {
    /// Values bottom to top.
    pub fn items(&self) -> &[i64] {
        &self.items
    }
}

impl Script for StackScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        match ACTIONS[self.cursor.get()] {
            Action::Push(v) => {
                self.items.push(v);
                log.push(format!("Push({v})"));
            }
            Action::Pop => {
                if let Some(v) = self.items.pop() {
                    log.push(format!("Pop() → {v}"));
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
        let marker = self.items.len().checked_sub(1).map(|index| Marker::Focused { index });
        let caption = match self.items.last() {
            Some(top) => format!("Top: {top} · Size: {}", self.items.len()),
            None => "Empty".to_string(),
        };
        frame(&self.items, marker, &caption)
    }
}
