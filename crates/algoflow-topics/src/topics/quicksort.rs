//! Quick sort, replayed as partition snapshots.

use std::time::Duration;

use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const SNAPSHOT: Duration = Duration::from_millis(1500);
const DONE_PAUSE: Duration = Duration::from_millis(2000);
const AFTER_RESTART: Duration = Duration::from_millis(1200);

struct Snapshot {
    values: [i64; 8],
    pivot: Option<usize>,
    sorted: &'static [usize],
    message: &'static str,
}

static SNAPSHOTS: [Snapshot; 4] = [
    Snapshot {
        values: [6, 3, 8, 1, 5, 2, 7, 4],
        pivot: Some(7),
        sorted: &[],
        message: "Start: pivot=4",
    },
    Snapshot {
        values: [3, 1, 2, 4, 8, 5, 7, 6],
        pivot: Some(3),
        sorted: &[3],
        message: "Partitioned around 4",
    },
    Snapshot {
        values: [1, 2, 3, 4, 8, 5, 7, 6],
        pivot: None,
        sorted: &[0, 1, 2, 3],
        message: "Left sorted",
    },
    Snapshot {
        values: [1, 2, 3, 4, 5, 6, 7, 8],
        pivot: None,
        sorted: &[0, 1, 2, 3, 4, 5, 6, 7],
        message: "Fully sorted!",
    },
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("quicksort"),
        info(
            "Quick Sort",
            "Divide-and-conquer sorting",
            Category::Algorithm,
            "sort",
            ("O(n log n)", "Average case (worst O(n²))"),
            ("O(log n)", "Recursion stack"),
        ),
        steps(),
        simulation,
    )
}

fn partition(
    values: &[i64],
    pivot: Option<usize>,
    low: &[usize],
    high: &[usize],
    sorted: &[usize],
    caption: &str,
) -> Scene {
    Scene::new(
        Visual::Partition {
            values: values.to_vec(),
            pivot,
            low: low.to_vec(),
            high: high.to_vec(),
            sorted: sorted.to_vec(),
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    let all: Vec<usize> = (0..8).collect();
    vec![
        Step::new(
            "Initial Array",
            "Quick Sort selects a \"pivot\" element, then partitions the array so all elements smaller than the pivot go left, and all larger go right. We start with [6, 3, 8, 1, 5, 2, 7, 4].",
            partition(&[6, 3, 8, 1, 5, 2, 7, 4], None, &[], &[], &[], "Unsorted array — choose a pivot"),
        ),
        Step::new(
            "Choose Pivot = 4",
            "We select the last element (4) as the pivot. Now we partition: scan from left, placing elements < 4 on the left side and elements ≥ 4 on the right.",
            partition(&[6, 3, 8, 1, 5, 2, 7, 4], Some(7), &[], &[], &[], "Pivot = 4 (last element)"),
        ),
        Step::new(
            "Partition Result",
            "After partitioning: [3, 1, 2] are less than 4, [6, 8, 5, 7] are greater. 4 is now in its final sorted position (index 3).",
            partition(
                &[3, 1, 2, 4, 6, 8, 5, 7],
                Some(3),
                &[0, 1, 2],
                &[4, 5, 6, 7],
                &[],
                "Partitioned! 4 is in final position",
            ),
        ),
        Step::new(
            "Recurse Left [3,1,2]",
            "Now we recursively Quick Sort the left partition [3, 1, 2]. Pivot = 2. After partition: [1] | 2 | [3]. Both 1 and 2 are in final positions.",
            partition(&[1, 2, 3, 4, 6, 8, 5, 7], None, &[], &[], &[0, 1, 2, 3], "Left side sorted: [1, 2, 3, 4]"),
        ),
        Step::new(
            "Recurse Right [6,8,5,7]",
            "Now sort the right partition [6, 8, 5, 7]. Pivot = 7. After partition: [6, 5] | 7 | [8]. Continue recursing on [6, 5].",
            partition(&[1, 2, 3, 4, 5, 6, 7, 8], None, &[], &[], &all, "Fully sorted: [1, 2, 3, 4, 5, 6, 7, 8]"),
        ),
        Step::new(
            "Quick Sort Complete",
            "Quick Sort is complete! Average O(n log n) with small constant factor, making it one of the fastest sorting algorithms in practice. The key insight: each partition places one element in its final position.",
            partition(&[1, 2, 3, 4, 5, 6, 7, 8], None, &[], &[], &all, "✓ Sorted! Average O(n log n)"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(QuickSortScript::default())
}

/// Replays four partition snapshots, pausing on the sorted result.
#[derive(Debug, Default)]
pub struct QuickSortScript {
    shown: usize,
    next: usize,
    awaiting_restart: bool,
}

impl QuickSortScript {
    pub fn values(&self) -> &[i64] {
        &SNAPSHOTS[self.shown].values
    }
}

impl Script for QuickSortScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        self.shown = self.next;
        log.push(SNAPSHOTS[self.shown].message);
        self.next += 1;
        if self.next >= SNAPSHOTS.len() {
            self.awaiting_restart = true;
            DONE_PAUSE
        } else {
            SNAPSHOT
        }
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let s = &SNAPSHOTS[self.shown];
        // Around the pivot, split the unsorted indices by value.
        let (low, high): (Vec<usize>, Vec<usize>) = match s.pivot {
            Some(p) => {
                let pivot = s.values[p];
                let unsorted = (0..s.values.len()).filter(|&i| i != p && !s.sorted.contains(&i));
                unsorted.partition(|&i| s.values[i] < pivot)
            }
            None => (Vec::new(), Vec::new()),
        };
        partition(&s.values, s.pivot, &low, &high, s.sorted, s.message)
    }
}
