//! Two-pointer pair search over a sorted array.

use std::time::Duration;

use algoflow_core::scene::PointerMove;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const TICK: Duration = Duration::from_millis(1000);
const NEXT_TARGET: Duration = Duration::from_millis(1200);

const VALUES: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];
const TARGETS: [i64; 5] = [16, 10, 22, 8, 20];

/// Smaller array used by the walkthrough.
const WALKTHROUGH: [i64; 6] = [1, 3, 5, 7, 9, 11];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("twopointer"),
        info(
            "Two Pointer",
            "Array traversal technique",
            Category::Algorithm,
            "compare_arrows",
            ("O(n)", "Single pass with two pointers"),
            ("O(1)", "Constant extra space"),
        ),
        steps(),
        simulation,
    )
}

fn window(
    target: i64,
    left: usize,
    right: usize,
    sum: Option<i64>,
    verdict: Option<PointerMove>,
    caption: &str,
) -> Scene {
    Scene::new(
        Visual::TwoPointer {
            values: WALKTHROUGH.to_vec(),
            target,
            left,
            right,
            sum,
            verdict,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    use PointerMove::*;
    vec![
        Step::new(
            "Two-Sum Problem",
            "Given a sorted array and a target sum, find two numbers that add up to the target. The Two Pointer technique uses a left pointer (start) and right pointer (end), moving them inward.",
            window(12, 0, 5, None, None, "Find two numbers that sum to 12"),
        ),
        Step::new(
            "Step 1: Check Sum",
            "Left=0 (value 1), Right=5 (value 11). Sum = 1+11 = 12. This equals our target! In a typical problem, we might continue to find all pairs.",
            window(12, 0, 5, Some(12), Some(Match), "1 + 11 = 12 ✓ Found!"),
        ),
        Step::new(
            "New Target: 14",
            "Now let's try target=14. Left=0 (1), Right=5 (11). Sum=12 < 14. Since the sum is too small, we move the left pointer right to increase the sum.",
            window(14, 0, 5, Some(12), Some(AdvanceLeft), "1 + 11 = 12 < 14 → move left pointer right"),
        ),
        Step::new(
            "Step 2: Move Left",
            "Left=1 (3), Right=5 (11). Sum=14. Found! When sum < target, we move Left right. When sum > target, we move Right left. This narrows the search space.",
            window(14, 1, 5, Some(14), Some(Match), "3 + 11 = 14 ✓ Found!"),
        ),
        Step::new(
            "Sum Too Large Example",
            "Target=8. Left=0 (1), Right=5 (11). Sum=12 > 8. The sum is too large, so we move the right pointer left to decrease the sum.",
            window(8, 0, 5, Some(12), Some(RetreatRight), "1 + 11 = 12 > 8 → move right pointer left"),
        ),
        Step::new(
            "Why It Works",
            "Because the array is sorted, moving left pointer right increases the sum, and moving right pointer left decreases it. This guarantees we find the answer in O(n) time: much faster than O(n²) brute force.",
            window(8, 2, 3, Some(12), Some(Match), "O(n) vs O(n²) — sorted array enables two pointer!"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(TwoPointerScript::default())
}

/// Closes in on a pair summing to each target in turn.
#[derive(Debug)]
pub struct TwoPointerScript {
    target_index: usize,
    left: usize,
    right: usize,
    found: bool,
}

impl Default for TwoPointerScript {
    fn default() -> Self {
        Self::searching(0)
    }
}

impl TwoPointerScript {
    fn searching(target_index: usize) -> Self {
        Self {
            target_index,
            left: 0,
            right: VALUES.len() - 1,
            found: false,
        }
    }

    pub fn target(&self) -> i64 {
        TARGETS[self.target_index]
    }

    /// The pair under the pointers.
    pub fn pair(&self) -> (i64, i64) {
        (VALUES[self.left], VALUES[self.right])
    }

    pub fn is_found(&self) -> bool {
        self.found
    }
}

impl Script for TwoPointerScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.found || self.left >= self.right {
            let next = (self.target_index + 1) % TARGETS.len();
            if next == 0 {
                log.push(LOOP_RESTART);
            }
            *self = Self::searching(next);
            log.push(format!("New target: {}", self.target()));
            return NEXT_TARGET;
        }

        let target = self.target();
        let (a, b) = self.pair();
        let sum = a + b;
        if sum == target {
            self.found = true;
            log.push(format!("{a} + {b} = {sum} ✓ Found!"));
        } else if sum < target {
            log.push(format!("{a} + {b} = {sum} < {target} → move left"));
            self.left += 1;
        } else {
            log.push(format!("{a} + {b} = {sum} > {target} → move right"));
            self.right -= 1;
        }
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let target = self.target();
        let (a, b) = self.pair();
        let caption = if self.found {
            format!("Found! {a} + {b} = {target}")
        } else {
            format!("Target: {target}")
        };
        Scene::new(
            Visual::TwoPointer {
                values: VALUES.to_vec(),
                target,
                left: self.left,
                right: self.right,
                sum: Some(a + b),
                verdict: self.found.then_some(PointerMove::Match),
            },
            caption,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_current(script: &mut TwoPointerScript, log: &mut ActivityLog) {
        while !script.is_found() {
            script.step(log);
        }
    }

    #[test]
    fn first_target_matches_outer_pair() {
        let mut script = TwoPointerScript::default();
        let mut log = ActivityLog::new();
        script.step(&mut log);

        assert!(script.is_found());
        assert_eq!(log.latest(), Some("1 + 15 = 16 ✓ Found!"));
        assert_eq!(script.scene().caption, "Found! 1 + 15 = 16");
    }

    #[test]
    fn pointers_move_toward_target() {
        let mut script = TwoPointerScript::default();
        let mut log = ActivityLog::new();
        solve_current(&mut script, &mut log);
        script.step(&mut log);
        assert_eq!(log.latest(), Some("New target: 10"));

        solve_current(&mut script, &mut log);
        assert_eq!(script.pair(), (1, 9));
        assert_eq!(log.iter().nth(1), Some("1 + 11 = 12 > 10 → move right"));
    }

    #[test]
    fn every_target_has_a_pair_and_loop_restarts() {
        let mut script = TwoPointerScript::default();
        let mut log = ActivityLog::with_capacity(100);
        for &target in &TARGETS {
            assert_eq!(script.target(), target);
            solve_current(&mut script, &mut log);
            let (a, b) = script.pair();
            assert_eq!(a + b, target);
            script.step(&mut log);
        }

        assert_eq!(script.target(), TARGETS[0]);
        assert_eq!(log.latest(), Some("New target: 16"));
        assert_eq!(log.iter().nth(1), Some(LOOP_RESTART));
    }
}
