//! Bubble sort.

use std::time::Duration;

use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const INITIAL: [i64; 5] = [5, 3, 8, 1, 4];

const COMPARE: Duration = Duration::from_millis(800);
const NEXT_PASS: Duration = Duration::from_millis(600);
const SORTED_PAUSE: Duration = Duration::from_millis(1500);
const AFTER_RESTART: Duration = Duration::from_millis(800);

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("bubblesort"),
        info(
            "Bubble Sort",
            "Comparison-based sorting",
            Category::Algorithm,
            "filter_list",
            ("O(n²)", "Worst / Average case"),
            ("O(1)", "In-place sorting"),
        ),
        steps(),
        simulation,
    )
}

fn bars(values: &[i64], comparing: Option<(usize, usize)>, sorted: &[usize], caption: &str) -> Scene {
    Scene::new(
        Visual::Bars {
            values: values.to_vec(),
            comparing,
            sorted: sorted.to_vec(),
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Initial Array",
            "Bubble Sort repeatedly steps through the list, compares adjacent elements, and swaps them if they are in the wrong order. We start with array [5, 3, 8, 1, 4].",
            bars(&INITIAL, None, &[], "Initial unsorted array"),
        ),
        Step::new(
            "Compare 5 and 3 → Swap",
            "We compare the first two elements: 5 > 3, so we swap them. The larger element \"bubbles up\" towards the end.",
            bars(&[3, 5, 8, 1, 4], Some((0, 1)), &[], "5 > 3 → Swap! Array: [3, 5, 8, 1, 4]"),
        ),
        Step::new(
            "Compare 5 and 8 → No Swap",
            "Next pair: 5 and 8. Since 5 < 8, they are already in order. No swap needed.",
            bars(&[3, 5, 8, 1, 4], Some((1, 2)), &[], "5 < 8 → No swap needed"),
        ),
        Step::new(
            "Compare 8 and 1 → Swap",
            "Next pair: 8 and 1. Since 8 > 1, we swap them. 8 continues bubbling up.",
            bars(&[3, 5, 1, 8, 4], Some((2, 3)), &[], "8 > 1 → Swap! Array: [3, 5, 1, 8, 4]"),
        ),
        Step::new(
            "Compare 8 and 4 → Swap",
            "Last pair of pass 1: 8 and 4. Since 8 > 4, we swap. Now 8 is in its final position at the end.",
            bars(&[3, 5, 1, 4, 8], Some((3, 4)), &[4], "8 > 4 → Swap! 8 is now sorted"),
        ),
        Step::new(
            "Pass 2 Begins",
            "Pass 2 starts from the beginning. We compare 3 and 5: no swap. Then 5 and 1: swap! Then 5 and 4: swap! Now 5 is sorted.",
            bars(&[3, 1, 4, 5, 8], None, &[3, 4], "After Pass 2: [3, 1, 4, 5, 8]"),
        ),
        Step::new(
            "Final Sorted Array",
            "After all passes complete, every element is in its correct position. The array is fully sorted in ascending order.",
            bars(&[1, 3, 4, 5, 8], None, &[0, 1, 2, 3, 4], "Sorted! [1, 3, 4, 5, 8]"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(BubbleSortScript::default())
}

/// Sorts five values one comparison per tick, then starts over.
#[derive(Debug)]
pub struct BubbleSortScript {
    values: Vec<i64>,
    pass: usize,
    j: usize,
    sorted: Vec<usize>,
    comparing: Option<(usize, usize)>,
    finished: bool,
}

impl Default for BubbleSortScript {
    fn default() -> Self {
        Self {
            values: INITIAL.to_vec(),
            pass: 0,
            j: 0,
            sorted: Vec::new(),
            comparing: None,
            finished: false,
        }
    }
}

impl BubbleSortScript {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Script for BubbleSortScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        let n = self.values.len();
        self.comparing = None;

        if self.finished {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        if self.pass + 1 >= n {
            self.sorted = (0..n).collect();
            self.finished = true;
            log.push("Array sorted! Restarting...");
            return SORTED_PAUSE;
        }

        if self.j + 1 + self.pass >= n {
            self.j = 0;
            self.pass += 1;
            if self.pass + 1 < n {
                log.push(format!("Pass {} starting", self.pass + 1));
            }
            return NEXT_PASS;
        }

        let (a, b) = (self.values[self.j], self.values[self.j + 1]);
        if a > b {
            log.push(format!("{a} > {b} → Swap"));
            self.values.swap(self.j, self.j + 1);
        } else {
            log.push(format!("{a} ≤ {b} → No swap"));
        }
        self.comparing = Some((self.j, self.j + 1));
        if self.j + 2 + self.pass == n {
            self.sorted.push(n - 1 - self.pass);
        }
        self.j += 1;
        COMPARE
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let caption = match self.comparing {
            Some((a, b)) => format!("Comparing positions {a} and {b}"),
            None if self.finished => "Sorted!".to_string(),
            None => format!("Pass {}", self.pass + 1),
        };
        bars(&self.values, self.comparing, &self.sorted, &caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_finished() -> (BubbleSortScript, ActivityLog, Vec<Duration>) {
        let mut script = BubbleSortScript::default();
        let mut log = ActivityLog::with_capacity(100);
        let mut delays = Vec::new();
        while !script.is_finished() {
            delays.push(script.step(&mut log));
        }
        (script, log, delays)
    }

    #[test]
    fn first_pass_bubbles_largest_to_end() {
        let mut script = BubbleSortScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..4 {
            script.step(&mut log);
        }
        assert_eq!(script.values(), &[3, 5, 1, 4, 8]);
        assert_eq!(script.sorted, vec![4]);

        let oldest: Vec<_> = log.to_vec().into_iter().rev().collect();
        assert_eq!(oldest, vec!["5 > 3 → Swap", "5 ≤ 8 → No swap", "8 > 1 → Swap", "8 > 4 → Swap"]);
    }

    #[test]
    fn sorts_and_pauses_before_restart() {
        let (script, log, delays) = run_until_finished();
        assert_eq!(script.values(), &[1, 3, 4, 5, 8]);
        assert_eq!(log.latest(), Some("Array sorted! Restarting..."));
        assert_eq!(delays.last(), Some(&SORTED_PAUSE));
        assert!(log.iter().any(|l| l == "Pass 2 starting"));
    }

    #[test]
    fn restart_tick_restores_input() {
        let (mut script, mut log, _) = run_until_finished();
        let delay = script.step(&mut log);
        assert_eq!(delay, AFTER_RESTART);
        assert_eq!(script.values(), &INITIAL);
        assert_eq!(log.latest(), Some(LOOP_RESTART));
    }
}
