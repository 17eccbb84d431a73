//! Dynamic programming: a bottom-up Fibonacci table.

use std::time::Duration;

use algoflow_core::scene::Marker;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::info;

const TICK: Duration = Duration::from_millis(1000);
const DONE_PAUSE: Duration = Duration::from_millis(2500);
const AFTER_RESTART: Duration = Duration::from_millis(800);

/// Cells filled by the simulation.
const CELLS: usize = 10;

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("dp"),
        info(
            "Dynamic Programming",
            "Optimal substructure + overlapping subproblems",
            Category::Algorithm,
            "grid_on",
            ("O(n)", "With memoization (vs O(2ⁿ) naive)"),
            ("O(n)", "Memoization table"),
        ),
        steps(),
        simulation,
    )
}

fn table(filled: &[u64], highlight: Option<usize>, marker: Option<Marker>, caption: &str) -> Scene {
    let mut cells: Vec<Option<u64>> = filled.iter().copied().map(Some).collect();
    cells.resize(8, None);
    Scene::new(
        Visual::DpTable {
            cells,
            highlight,
            marker,
        },
        caption,
    )
}

fn depends_on(indices: &[usize]) -> Option<Marker> {
    Some(Marker::DependsOn {
        indices: indices.to_vec(),
    })
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "What is DP?",
            "Dynamic Programming solves problems by breaking them into overlapping subproblems, solving each once, and storing the result. Classic example: Fibonacci numbers. Naive recursion is O(2ⁿ), but DP makes it O(n).",
            table(&[], None, None, "DP = solve subproblems once, store results"),
        ),
        Step::new(
            "Base Cases",
            "F(0) = 0, F(1) = 1. These are our base cases: they don't depend on any other values. We fill them directly into the table.",
            table(&[0, 1], Some(1), Some(Marker::Seeded), "Base cases: F(0)=0, F(1)=1"),
        ),
        Step::new(
            "Compute F(2)",
            "F(2) = F(1) + F(0) = 1 + 0 = 1. We look up previously computed values: no redundant computation!",
            table(&[0, 1, 1], Some(2), depends_on(&[0, 1]), "F(2) = F(1) + F(0) = 1 + 0 = 1"),
        ),
        Step::new(
            "Compute F(3)",
            "F(3) = F(2) + F(1) = 1 + 1 = 2. Each new value only needs the two previous: O(1) per cell!",
            table(&[0, 1, 1, 2], Some(3), depends_on(&[1, 2]), "F(3) = F(2) + F(1) = 1 + 1 = 2"),
        ),
        Step::new(
            "Compute F(4), F(5)",
            "F(4) = F(3) + F(2) = 2 + 1 = 3. F(5) = F(4) + F(3) = 3 + 2 = 5. The table fills left to right: bottom-up DP!",
            table(&[0, 1, 1, 2, 3, 5], Some(5), depends_on(&[3, 4]), "F(4)=3, F(5)=5 — bottom-up filling"),
        ),
        Step::new(
            "Complete Table",
            "F(6) = 8, F(7) = 13. The entire table is filled in O(n) time. Without DP, computing F(7) would require 41 recursive calls. With DP, just 8 lookups!",
            table(
                &[0, 1, 1, 2, 3, 5, 8, 13],
                Some(7),
                Some(Marker::Settled),
                "✓ F(7)=13 computed in O(n) instead of O(2ⁿ)",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(DpScript::default())
}

/// Fills `F(0)..F(9)` one cell per tick.
#[derive(Debug)]
pub struct DpScript {
    cells: [Option<u64>; CELLS],
    highlight: Option<usize>,
    awaiting_restart: bool,
}

impl Default for DpScript {
    fn default() -> Self {
        Self {
            cells: [None; CELLS],
            highlight: None,
            awaiting_restart: false,
        }
    }
}

impl DpScript {
    pub fn cell(&self, n: usize) -> Option<u64> {
        self.cells.get(n).copied().flatten()
    }

    fn filled(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_some()).count()
    }
}

impl Script for DpScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        let n = self.filled();
        let value = match n {
            0 | 1 => {
                log.push(format!("F({n}) = {n}"));
                n as u64
            }
            _ => {
                let a = self.cell(n - 1).unwrap_or_default();
                let b = self.cell(n - 2).unwrap_or_default();
                let v = a + b;
                log.push(format!("F({n}) = F({}) + F({}) = {v}", n - 1, n - 2));
                v
            }
        };
        self.cells[n] = Some(value);
        self.highlight = Some(n);

        if n + 1 == CELLS {
            log.push(format!("Done! F({n}) = {value}"));
            self.awaiting_restart = true;
            return DONE_PAUSE;
        }
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let caption = match self.highlight {
            Some(n) => format!("Computing F({n})"),
            None => "Fibonacci DP".to_string(),
        };
        Scene::new(
            Visual::DpTable {
                cells: self.cells.to_vec(),
                highlight: self.highlight,
                marker: None,
            },
            caption,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_fibonacci_table() {
        let mut script = DpScript::default();
        let mut log = ActivityLog::new();
        let delays: Vec<_> = (0..CELLS).map(|_| script.step(&mut log)).collect();

        let values: Vec<_> = (0..CELLS).filter_map(|n| script.cell(n)).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(log.latest(), Some("Done! F(9) = 34"));
        assert_eq!(log.iter().nth(1), Some("F(9) = F(8) + F(7) = 34"));
        assert_eq!(delays.last(), Some(&DONE_PAUSE));
    }

    #[test]
    fn base_cases_come_first() {
        let mut script = DpScript::default();
        let mut log = ActivityLog::new();
        script.step(&mut log);
        script.step(&mut log);

        let lines: Vec<_> = log.iter().collect();
        assert_eq!(lines, vec!["F(1) = 1", "F(0) = 0"]);
        assert_eq!(script.scene().caption, "Computing F(1)");
    }

    #[test]
    fn restart_empties_table() {
        let mut script = DpScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..CELLS {
            script.step(&mut log);
        }
        assert_eq!(script.step(&mut log), AFTER_RESTART);
        assert_eq!(script.cell(0), None);
        assert_eq!(script.scene().caption, "Fibonacci DP");
    }
}
