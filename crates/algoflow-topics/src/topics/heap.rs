//! Binary min-heap.

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
    Insert(i64),
    ExtractMin,
}

const ACTIONS: [Action; 12] = [
    Action::Insert(10),
    Action::Insert(5),
    Action::Insert(8),
    Action::Insert(15),
    Action::Insert(3),
    Action::Insert(12),
    Action::ExtractMin,
    Action::ExtractMin,
    Action::ExtractMin,
    Action::ExtractMin,
    Action::ExtractMin,
    Action::ExtractMin,
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("heap"),
        info(
            "Heap / Priority Queue",
            "Tree-based data structure",
            Category::DataStructure,
            "filter_alt",
            ("O(log n)", "Insert / Extract operations"),
            ("O(n)", "Total elements stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(items: &[i64], highlight: Option<usize>, marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::Heap {
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
            "Empty Min-Heap",
            "A Min-Heap is a complete binary tree where every parent node is smaller than or equal to its children. The smallest element is always at the root. Used to implement Priority Queues.",
            frame(&[], None, None, "Empty min-heap — root is always the minimum"),
        ),
        Step::new(
            "Insert 10",
            "We insert 10 into the heap. Since it's the first element, it becomes the root. Array representation: [10].",
            frame(&[10], Some(0), Some(Marker::Inserted { index: 0 }), "Insert 10 → becomes root"),
        ),
        Step::new(
            "Insert 5 → Bubble Up",
            "We insert 5. It initially goes to the next available position (left child of 10). Since 5 < 10, it \"bubbles up\": we swap 5 and 10. Now 5 is the root.",
            frame(
                &[5, 10],
                Some(0),
                Some(Marker::Swapped { from: 1, to: 0 }),
                "Insert 5 → bubble up! 5 < 10, swap → 5 is root",
            ),
        ),
        Step::new(
            "Insert 8, 15, 3",
            "We insert 8 (right child of 10, no bubble needed), then 15 (left child of 10, no bubble), then 3. 3 bubbles up from position 5 → 2 → 0, becoming the new root.",
            frame(
                &[3, 10, 5, 15, 8],
                Some(0),
                Some(Marker::Inserted { index: 0 }),
                "After inserting 8, 15, 3 → 3 bubbles to root",
            ),
        ),
        Step::new(
            "Extract Min → 3",
            "Extract-Min removes the root (3). We replace the root with the last element (8), then \"bubble down\": 8 swaps with the smaller child until heap property is restored.",
            frame(
                &[5, 10, 8, 15],
                Some(0),
                Some(Marker::Removed { value: "3".into() }),
                "Extract 3 → replace with 8 → bubble down → 5 is root",
            ),
        ),
        Step::new(
            "Heap Property",
            "The heap maintains its property: parent ≤ children at every level. This guarantees O(log n) insert and extract, making it perfect for priority queues, Dijkstra's algorithm, and scheduling.",
            frame(&[5, 10, 8, 15], None, Some(Marker::Settled), "Min-Heap: parent ≤ children at every node"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(HeapScript::default())
}

/// Array-backed min-heap fed six inserts and six extractions.
#[derive(Debug, Default)]
pub struct HeapScript {
    items: Vec<i64>,
    highlight: Option<usize>,
    extracted: Option<i64>,
    cursor: Cursor,
}

impl HeapScript {
    /// Heap in array order.
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.first().copied()
    }

    fn bubble_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[parent] <= self.items[i] {
                break;
            }
            self.items.swap(parent, i);
            i = parent;
        }
        i
    }

    fn bubble_down(&mut self, mut i: usize) -> usize {
        let n = self.items.len();
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < n && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < n && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == i {
                return i;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }

    fn extract_min(&mut self) -> Option<i64> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        self.highlight = if self.items.is_empty() {
            None
        } else {
            Some(self.bubble_down(0))
        };
        Some(min)
    }
}

impl Script for HeapScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        self.extracted = None;
        match ACTIONS[self.cursor.get()] {
            Action::Insert(v) => {
                self.items.push(v);
                self.highlight = Some(self.bubble_up(self.items.len() - 1));
                log.push(format!("Insert {v}"));
            }
            Action::ExtractMin => {
                if let Some(v) = self.extract_min() {
                    self.extracted = Some(v);
                    log.push(format!("Extract min → {v}"));
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
        let marker = self.extracted.map(|v| Marker::Removed { value: v.to_string() });
        frame(&self.items, self.highlight, marker, &format!("Heap size: {}", self.items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: usize) -> (HeapScript, ActivityLog) {
        let mut script = HeapScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..ticks {
            script.step(&mut log);
        }
        (script, log)
    }

    fn is_min_heap(items: &[i64]) -> bool {
        (1..items.len()).all(|i| items[(i - 1) / 2] <= items[i])
    }

    #[test]
    fn inserts_keep_heap_order() {
        for ticks in 1..=6 {
            let (script, _) = run(ticks);
            assert!(is_min_heap(script.items()), "{:?}", script.items());
        }
        let (script, _) = run(6);
        assert_eq!(script.peek(), Some(3));
        assert_eq!(script.items().len(), 6);
    }

    #[test]
    fn extractions_come_out_sorted() {
        let (_, log) = run(ACTIONS.len());
        let mut extracted: Vec<_> = log
            .iter()
            .filter_map(|l| l.strip_prefix("Extract min → "))
            .map(|v| v.parse::<i64>().unwrap())
            .collect();
        extracted.reverse();
        assert_eq!(extracted, vec![3, 5, 8, 10, 12, 15]);
        assert_eq!(log.latest(), Some(LOOP_RESTART));
    }

    #[test]
    fn insert_three_bubbles_to_root() {
        let (script, _) = run(5);
        assert_eq!(script.items(), &[3, 5, 8, 15, 10]);
        assert_eq!(script.highlight, Some(0));
    }
}
