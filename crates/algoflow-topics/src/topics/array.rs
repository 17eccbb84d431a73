//! Array.

use std::time::Duration;

use algoflow_core::scene::Marker;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{info, Cursor};

const TICK: Duration = Duration::from_millis(1200);
const INITIAL: [i64; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy)]
enum Action {
    Access(usize),
    Insert(usize, i64),
    Delete(usize),
}

const ACTIONS: [Action; 8] = [
    Action::Access(2),
    Action::Access(4),
    Action::Insert(1, 15),
    Action::Access(3),
    Action::Delete(1),
    Action::Insert(0, 5),
    Action::Delete(0),
    Action::Access(0),
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("array"),
        info(
            "Array",
            "Indexed data structure",
            Category::DataStructure,
            "view_column",
            ("O(1) / O(n)", "Access O(1), Insert/Delete O(n)"),
            ("O(n)", "Total elements stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(items: &[i64], highlight: Option<usize>, marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::Array {
            items: items.to_vec(),
            highlight,
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Initial Array",
            "An array stores elements in contiguous memory locations. Each element is accessed by its index (0-based). Here we have an array of 5 elements.",
            frame(&INITIAL, None, None, "Array with 5 elements, indices 0–4"),
        ),
        Step::new(
            "Access Index 2",
            "Accessing an element by index is O(1), direct access. We access index 2, which contains the value 30.",
            frame(&INITIAL, Some(2), Some(Marker::Focused { index: 2 }), "arr[2] → 30 (constant time access)"),
        ),
        Step::new(
            "Insert 25 at Index 2",
            "Inserting at a specific position requires shifting all subsequent elements to the right. This takes O(n) time in the worst case.",
            frame(
                &[10, 20, 25, 30, 40, 50],
                Some(2),
                Some(Marker::Inserted { index: 2 }),
                "Insert 25 at index 2 → shift elements right",
            ),
        ),
        Step::new(
            "Result After Insert",
            "After insertion, the array now has 6 elements. The value 25 is at index 2, and all subsequent elements shifted right by one position.",
            frame(&[10, 20, 25, 30, 40, 50], None, None, "Array after insertion — 6 elements"),
        ),
        Step::new(
            "Delete at Index 3",
            "Deleting at a specific position requires shifting all subsequent elements to the left. We remove the element at index 3 (value 30).",
            frame(
                &[10, 20, 25, 40, 50],
                Some(3),
                Some(Marker::Removed { value: "30".into() }),
                "Delete index 3 (was 30) → shift elements left",
            ),
        ),
        Step::new(
            "Final Array",
            "After deletion, the array has 5 elements again. The gap left by 30 is filled by shifting 40 and 50 to the left.",
            frame(&[10, 20, 25, 40, 50], None, None, "Final array — 5 elements"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(ArrayScript::default())
}

/// Accesses, inserts and deletes at fixed indices of a five-element array.
#[derive(Debug)]
pub struct ArrayScript {
    items: Vec<i64>,
    highlight: Option<usize>,
    cursor: Cursor,
}

impl Default for ArrayScript {
    fn default() -> Self {
        Self {
            items: INITIAL.to_vec(),
            highlight: None,
            cursor: Cursor::default(),
        }
    }
}

impl ArrayScript {
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }
}

impl Script for ArrayScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        match ACTIONS[self.cursor.get()] {
            Action::Access(i) => {
                if let Some(v) = self.items.get(i) {
                    self.highlight = Some(i);
                    log.push(format!("Access arr[{i}] → {v}"));
                }
            }
            Action::Insert(i, v) => {
                let i = i.min(self.items.len());
                self.items.insert(i, v);
                self.highlight = Some(i);
                log.push(format!("Insert {v} at index {i}"));
            }
            Action::Delete(i) => {
                if i < self.items.len() {
                    let v = self.items.remove(i);
                    self.highlight = None;
                    log.push(format!("Delete arr[{i}] → {v}"));
                }
            }
        }
        if self.cursor.advance(ACTIONS.len()) {
            self.rewind();
            log.push(LOOP_RESTART);
        }
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let caption = match self.highlight.and_then(|i| self.items.get(i).map(|v| (i, v))) {
            Some((i, v)) => format!("arr[{i}] = {v}"),
            None => format!("Length: {}", self.items.len()),
        };
        frame(&self.items, self.highlight, None, &caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: usize) -> (ArrayScript, ActivityLog) {
        let mut script = ArrayScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..ticks {
            script.step(&mut log);
        }
        (script, log)
    }

    #[test]
    fn access_highlights_without_mutation() {
        let (script, log) = run(2);
        assert_eq!(script.items(), &INITIAL);
        assert_eq!(script.highlight(), Some(4));
        assert_eq!(log.latest(), Some("Access arr[4] → 50"));
    }

    #[test]
    fn insert_and_delete_shift_elements() {
        let (script, _) = run(3);
        assert_eq!(script.items(), &[10, 15, 20, 30, 40, 50]);

        let (script, log) = run(5);
        assert_eq!(script.items(), &[10, 20, 30, 40, 50]);
        assert_eq!(log.latest(), Some("Delete arr[1] → 15"));
        assert_eq!(script.highlight(), None);
    }

    #[test]
    fn restart_restores_initial_array() {
        let (script, log) = run(ACTIONS.len());
        assert_eq!(script.items(), &INITIAL);
        assert_eq!(log.latest(), Some(LOOP_RESTART));
        assert_eq!(log.iter().nth(1), Some("Access arr[0] → 10"));
    }
}
