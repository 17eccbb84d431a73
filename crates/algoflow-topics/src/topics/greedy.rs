//! Greedy activity selection.

use std::time::Duration;

use algoflow_core::scene::Interval;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const TICK: Duration = Duration::from_millis(1000);
const DONE_PAUSE: Duration = Duration::from_millis(2500);

/// Activities already sorted by end time.
static ACTIVITIES: [Interval; 9] = [
    Interval { start: 1, end: 3 },
    Interval { start: 2, end: 5 },
    Interval { start: 4, end: 7 },
    Interval { start: 1, end: 8 },
    Interval { start: 5, end: 9 },
    Interval { start: 8, end: 10 },
    Interval { start: 9, end: 11 },
    Interval { start: 11, end: 14 },
    Interval { start: 13, end: 16 },
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("greedy"),
        info(
            "Greedy Algorithm",
            "Optimal local choices",
            Category::Algorithm,
            "emoji_objects",
            ("O(n log n)", "Sort + single scan"),
            ("O(n)", "Selected activities"),
        ),
        steps(),
        simulation,
    )
}

fn timeline(selected: &[usize], cursor: Option<usize>, caption: &str) -> Scene {
    Scene::new(
        Visual::Activities {
            activities: ACTIVITIES.to_vec(),
            selected: selected.to_vec(),
            cursor,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Activity Selection Problem",
            "Greedy algorithms make the locally optimal choice at each step. The classic example: given activities with start/end times, select the maximum number of non-overlapping activities.",
            timeline(&[], None, "Activities sorted by end time"),
        ),
        Step::new(
            "Step 1: Select First",
            "Greedy strategy: always pick the activity that finishes earliest. This leaves the most room for remaining activities. Select A1 (1–3).",
            timeline(&[0], Some(0), "Select A1 (1–3): earliest finish time"),
        ),
        Step::new(
            "Step 2: Skip Conflicts",
            "A2 (2–5) overlaps with A1 (ends before 3). Skip it. A3 (4–7) starts after A1 ends (4 ≥ 3). Select A3!",
            timeline(&[0, 2], Some(2), "Skip A2 (conflict), Select A3 (4–7)"),
        ),
        Step::new(
            "Step 3: Continue",
            "A4 (1–8) and A5 (5–9) overlap with A3. Skip both. A6 (8–10) starts at 8 ≥ 7 (A3 end). Select A6!",
            timeline(&[0, 2, 5], Some(5), "Skip A4, A5 (conflict), Select A6 (8–10)"),
        ),
        Step::new(
            "Step 4: More Selections",
            "A7 (9–11) overlaps with A6. Skip. A8 (11–14) starts at 11 ≥ 10. Select A8! A9 (13–16) overlaps. Skip.",
            timeline(&[0, 2, 5, 7], Some(7), "Select A8 (11–14). 4 activities selected!"),
        ),
        Step::new(
            "Optimal Solution",
            "Greedy selected 4 non-overlapping activities [A1, A3, A6, A8]: this is the maximum possible! The greedy choice (earliest finish) is provably optimal for this problem.",
            timeline(&[0, 2, 5, 7], None, "✓ Optimal: 4 activities selected (greedy = optimal here!)"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(GreedyScript::default())
}

/// Scans activities in end-time order, keeping each one that fits.
#[derive(Debug, Default)]
pub struct GreedyScript {
    /// Next activity to consider.
    next: usize,
    /// Activity examined by the latest tick.
    cursor: usize,
    selected: Vec<usize>,
    last_end: u32,
    awaiting_restart: bool,
}

impl GreedyScript {
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }
}

impl Script for GreedyScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return TICK;
        }

        let Some(a) = ACTIVITIES.get(self.next) else {
            log.push(format!("Done! {} activities selected", self.selected.len()));
            self.awaiting_restart = true;
            return DONE_PAUSE;
        };

        let n = self.next + 1;
        if a.start >= self.last_end {
            self.selected.push(self.next);
            self.last_end = a.end;
            log.push(format!("Select A{n} ({}–{})", a.start, a.end));
        } else {
            log.push(format!("Skip A{n} ({}–{}) — conflict", a.start, a.end));
        }
        self.cursor = self.next;
        self.next += 1;
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        timeline(
            &self.selected,
            Some(self.cursor),
            &format!("Selected: {}", self.selected.len()),
        )
    }
}
