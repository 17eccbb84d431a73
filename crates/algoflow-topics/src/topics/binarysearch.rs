//! Binary search over a sorted array.

use std::time::Duration;

use algoflow_core::scene::SearchProbe;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const VALUES: [i64; 10] = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
const TARGETS: [i64; 5] = [23, 72, 5, 38, 91];

const ANNOUNCE: Duration = Duration::from_millis(1000);
const PROBE: Duration = Duration::from_millis(1200);
const NEXT_TARGET: Duration = Duration::from_millis(1500);

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("binarysearch"),
        info(
            "Binary Search",
            "Efficient search algorithm",
            Category::Algorithm,
            "search",
            ("O(log n)", "Halves search space each step"),
            ("O(1)", "Iterative approach"),
        ),
        steps(),
        simulation,
    )
}

fn window(target: i64, low: usize, high: usize, mid: Option<usize>, caption: &str) -> Scene {
    Scene::new(
        Visual::BinarySearch {
            values: VALUES.to_vec(),
            target,
            low,
            high,
            mid,
        },
        caption,
    )
}

fn probe(label: &str, range: &str, mid: usize, outcome: &str) -> SearchProbe {
    SearchProbe {
        label: label.to_string(),
        range: range.to_string(),
        mid,
        value: VALUES[mid],
        outcome: outcome.to_string(),
    }
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Sorted Array & Target",
            "Binary Search works on a sorted array. We search for target value 23 in the array [2, 5, 8, 12, 16, 23, 38, 56, 72, 91]. The key idea: compare with the middle element to eliminate half the array.",
            window(23, 0, 9, None, "Target: 23. Search entire array"),
        ),
        Step::new(
            "Step 1: Check Middle",
            "low=0, high=9, mid=(0+9)/2=4. arr[4]=16. Since 16 < 23, the target must be in the RIGHT half. We eliminate the left half including mid.",
            window(23, 0, 9, Some(4), "arr[4]=16 < 23 → search right half"),
        ),
        Step::new(
            "Step 2: Narrow Range",
            "Now low=5, high=9, mid=(5+9)/2=7. arr[7]=56. Since 56 > 23, the target must be in the LEFT half. We eliminate the right half.",
            window(23, 5, 9, Some(7), "arr[7]=56 > 23 → search left half"),
        ),
        Step::new(
            "Step 3: Almost There",
            "Now low=5, high=6, mid=(5+6)/2=5. arr[5]=23. We found the target! 23 == 23. Binary Search completes in just 3 comparisons.",
            window(23, 5, 6, Some(5), "arr[5]=23 == 23 → FOUND! ✓"),
        ),
        Step::new(
            "Summary",
            "Binary Search eliminated half the search space at each step: 10 → 5 → 2 → 1. Only 3 comparisons needed instead of up to 10 with linear search. This is the power of O(log n).",
            Scene::new(
                Visual::SearchTrace {
                    probes: vec![
                        probe("Step 1", "[0..9]", 4, "16 < 23 → right"),
                        probe("Step 2", "[5..9]", 7, "56 > 23 → left"),
                        probe("Step 3", "[5..6]", 5, "23 = 23 → FOUND!"),
                    ],
                    summary: "Found in 3 steps (log₂10 ≈ 3.3)".to_string(),
                },
                "",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(BinarySearchScript::default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Announce,
    Search,
}

/// Searches for each target in turn, one probe per tick.
#[derive(Debug)]
pub struct BinarySearchScript {
    target_index: usize,
    low: usize,
    /// One past the last candidate; the window is empty when `low == end`.
    end: usize,
    mid: Option<usize>,
    found: bool,
    phase: Phase,
}

impl Default for BinarySearchScript {
    fn default() -> Self {
        Self::searching(0)
    }
}

impl BinarySearchScript {
    fn searching(target_index: usize) -> Self {
        Self {
            target_index,
            low: 0,
            end: VALUES.len(),
            mid: None,
            found: false,
            phase: Phase::Announce,
        }
    }

    pub fn target(&self) -> i64 {
        TARGETS[self.target_index]
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn mid(&self) -> Option<usize> {
        self.mid
    }
}

impl Script for BinarySearchScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        let target = self.target();

        if self.phase == Phase::Announce {
            log.push(format!("Searching for {target}"));
            self.phase = Phase::Search;
            return ANNOUNCE;
        }

        if self.low < self.end && !self.found {
            let mid = (self.low + self.end - 1) / 2;
            let value = VALUES[mid];
            self.mid = Some(mid);
            if value == target {
                self.found = true;
                log.push(format!("mid={mid}, arr[{mid}]={value} = {target} → Found!"));
            } else if value < target {
                log.push(format!("mid={mid}, arr[{mid}]={value} < {target} → go right"));
                self.low = mid + 1;
            } else {
                log.push(format!("mid={mid}, arr[{mid}]={value} > {target} → go left"));
                self.end = mid;
            }
            return PROBE;
        }

        let next = self.target_index + 1;
        if next >= TARGETS.len() {
            *self = Self::searching(0);
            log.push(LOOP_RESTART);
        } else {
            *self = Self::searching(next);
        }
        NEXT_TARGET
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let target = self.target();
        let caption = if self.found {
            format!("Found {target}!")
        } else {
            format!("Searching for {target}...")
        };
        let high = self.end.saturating_sub(1).max(self.low);
        window(target, self.low, high, self.mid, &caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_target_in_three_probes() {
        let mut script = BinarySearchScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..4 {
            script.step(&mut log);
        }

        assert!(script.is_found());
        assert_eq!(script.mid(), Some(5));
        let trace: Vec<_> = log.to_vec().into_iter().rev().collect();
        assert_eq!(
            trace,
            vec![
                "Searching for 23",
                "mid=4, arr[4]=16 < 23 → go right",
                "mid=7, arr[7]=56 > 23 → go left",
                "mid=5, arr[5]=23 = 23 → Found!",
            ]
        );
    }

    #[test]
    fn every_target_is_found() {
        let mut script = BinarySearchScript::default();
        let mut log = ActivityLog::with_capacity(200);
        let mut found = Vec::new();
        while found.len() < TARGETS.len() {
            script.step(&mut log);
            if script.is_found() && found.last() != Some(&script.target()) {
                found.push(script.target());
            }
        }
        assert_eq!(found, TARGETS.to_vec());
    }

    #[test]
    fn wraps_to_first_target_with_restart() {
        let mut script = BinarySearchScript::default();
        let mut log = ActivityLog::with_capacity(200);
        let mut restarts = 0;
        for _ in 0..200 {
            script.step(&mut log);
            if log.latest() == Some(LOOP_RESTART) {
                restarts += 1;
                assert_eq!(script.target(), 23);
                assert!(script.mid().is_none());
                break;
            }
        }
        assert_eq!(restarts, 1);
    }
}
