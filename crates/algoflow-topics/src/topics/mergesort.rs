//! Merge sort, replayed as a fixed series of split and merge stages.

use std::time::Duration;

use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const STAGE: Duration = Duration::from_millis(1500);
const DONE_PAUSE: Duration = Duration::from_millis(2000);
const AFTER_RESTART: Duration = Duration::from_millis(1200);

struct Stage {
    groups: &'static [&'static [i64]],
    level: u8,
    message: &'static str,
}

static STAGES: [Stage; 7] = [
    Stage { groups: &[&[38, 27, 43, 3, 9, 82, 10]], level: 0, message: "Start" },
    Stage { groups: &[&[38, 27, 43], &[3, 9, 82, 10]], level: 1, message: "Split into halves" },
    Stage { groups: &[&[38], &[27, 43], &[3, 9], &[82, 10]], level: 2, message: "Split further" },
    Stage {
        groups: &[&[38], &[27], &[43], &[3], &[9], &[82], &[10]],
        level: 3,
        message: "Base case reached",
    },
    Stage { groups: &[&[38], &[27, 43], &[3, 9], &[10, 82]], level: 2, message: "Merge pairs" },
    Stage { groups: &[&[27, 38, 43], &[3, 9, 10, 82]], level: 1, message: "Merge sub-arrays" },
    Stage { groups: &[&[3, 9, 10, 27, 38, 43, 82]], level: 0, message: "Final merge — sorted!" },
];

/// Stages before this index split; from it on they merge.
const FIRST_MERGE: usize = 4;

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("mergesort"),
        info(
            "Merge Sort",
            "Divide-and-conquer sorting",
            Category::Algorithm,
            "call_merge",
            ("O(n log n)", "All cases"),
            ("O(n)", "Auxiliary arrays"),
        ),
        steps(),
        simulation,
    )
}

fn groups(groups: &[&[i64]], level: u8, merging: bool, done: bool, caption: &str) -> Scene {
    Scene::new(
        Visual::MergeGroups {
            groups: groups.iter().map(|g| g.to_vec()).collect(),
            level,
            merging,
            done,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Initial Array",
            "Merge Sort uses a divide-and-conquer strategy: recursively split the array in half, sort each half, then merge them back together.",
            groups(&[&[38, 27, 43, 3, 9, 82, 10]], 0, false, false, "Start: [38, 27, 43, 3, 9, 82, 10]"),
        ),
        Step::new(
            "Step 1: First Split",
            "We split the array into two halves: [38, 27, 43] and [3, 9, 82, 10]. Each half will be sorted independently.",
            groups(&[&[38, 27, 43], &[3, 9, 82, 10]], 1, false, false, "Split into two halves"),
        ),
        Step::new(
            "Step 2: Split Further",
            "We continue splitting. [38, 27, 43] → [38] and [27, 43]. [3, 9, 82, 10] → [3, 9] and [82, 10]. Single elements are already sorted.",
            groups(
                &[&[38], &[27, 43], &[3, 9], &[82, 10]],
                2,
                false,
                false,
                "Continue splitting into smaller pieces",
            ),
        ),
        Step::new(
            "Step 3: Split to Singles",
            "Keep splitting until every sub-array has at most one element. Single elements are trivially sorted; this is the base case.",
            groups(
                &[&[38], &[27], &[43], &[3], &[9], &[82], &[10]],
                3,
                false,
                false,
                "Base case: single elements are sorted",
            ),
        ),
        Step::new(
            "Step 4: Begin Merging",
            "Now we merge pairs back together in sorted order. [27] + [43] → [27, 43]. [3] + [9] → [3, 9]. [82] + [10] → [10, 82].",
            groups(&[&[38], &[27, 43], &[3, 9], &[10, 82]], 2, true, false, "Merge pairs in sorted order"),
        ),
        Step::new(
            "Step 5: Continue Merging",
            "Continue merging larger sub-arrays: [38] + [27, 43] → [27, 38, 43]. [3, 9] + [10, 82] → [3, 9, 10, 82].",
            groups(&[&[27, 38, 43], &[3, 9, 10, 82]], 1, true, false, "Merge into larger sorted sub-arrays"),
        ),
        Step::new(
            "Step 6: Final Merge",
            "The final merge combines the two sorted halves into the fully sorted array: [3, 9, 10, 27, 38, 43, 82]. Merge Sort is complete!",
            groups(&[&[3, 9, 10, 27, 38, 43, 82]], 0, true, true, "Final merged result — sorted!"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(MergeSortScript::default())
}

/// Replays the split and merge stages, pausing on the sorted result.
#[derive(Debug, Default)]
pub struct MergeSortScript {
    shown: usize,
    next: usize,
    awaiting_restart: bool,
}

impl MergeSortScript {
    /// Index of the stage currently drawn.
    pub fn stage(&self) -> usize {
        self.shown
    }
}

impl Script for MergeSortScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        self.shown = self.next;
        log.push(STAGES[self.shown].message);
        self.next += 1;
        if self.next >= STAGES.len() {
            self.awaiting_restart = true;
            DONE_PAUSE
        } else {
            STAGE
        }
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let stage = &STAGES[self.shown];
        groups(
            stage.groups,
            stage.level,
            self.shown >= FIRST_MERGE,
            self.shown + 1 == STAGES.len(),
            stage.message,
        )
    }
}
