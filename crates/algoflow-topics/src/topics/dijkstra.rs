//! Dijkstra's shortest paths, replayed as distance-table snapshots.

use std::time::Duration;

use algoflow_core::scene::{Distance, Graph};
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{graph, info};

const VISIT: Duration = Duration::from_millis(1500);
const DONE_PAUSE: Duration = Duration::from_millis(2500);
const AFTER_RESTART: Duration = Duration::from_millis(1200);

const NODES: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Visit order from source `A`.
static ORDER: [&str; 5] = ["A", "C", "B", "D", "E"];

const INF: Option<u32> = None;

/// Distance table before any visit, then after each visit.
static TABLES: [[Option<u32>; 5]; 6] = [
    [Some(0), INF, INF, INF, INF],
    [Some(0), Some(4), Some(2), INF, INF],
    [Some(0), Some(3), Some(2), Some(5), INF],
    [Some(0), Some(3), Some(2), Some(4), Some(8)],
    [Some(0), Some(3), Some(2), Some(4), Some(6)],
    [Some(0), Some(3), Some(2), Some(4), Some(6)],
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("dijkstra"),
        info(
            "Dijkstra's Algorithm",
            "Shortest path algorithm",
            Category::Algorithm,
            "route",
            ("O((V+E) log V)", "With priority queue"),
            ("O(V)", "Distance table + visited set"),
        ),
        steps(),
        simulation,
    )
}

fn weighted_graph() -> Graph {
    graph(
        &[
            ("A", 30.0, 100.0),
            ("B", 170.0, 20.0),
            ("C", 170.0, 180.0),
            ("D", 310.0, 20.0),
            ("E", 360.0, 130.0),
        ],
        &[
            ("A", "B", Some(4)),
            ("A", "C", Some(2)),
            ("B", "C", Some(1)),
            ("B", "D", Some(1)),
            ("C", "D", Some(3)),
            ("B", "E", Some(5)),
            ("D", "E", Some(2)),
        ],
    )
}

fn table(k: usize, current: Option<&str>, caption: &str) -> Scene {
    Scene::new(
        Visual::ShortestPath {
            graph: weighted_graph(),
            distances: NODES
                .iter()
                .zip(TABLES[k])
                .map(|(node, value)| Distance {
                    node: node.to_string(),
                    value,
                })
                .collect(),
            visited: ORDER[..k].iter().map(|s| s.to_string()).collect(),
            current: current.map(str::to_string),
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Weighted Graph",
            "Dijkstra's algorithm finds the shortest path from a source node to all other nodes in a weighted graph. We have 5 nodes (A–E) with weighted edges.",
            table(0, None, "Weighted graph — find shortest paths from A"),
        ),
        Step::new(
            "Start at A (dist=0)",
            "Initialize: distance to A = 0, all others = ∞. Mark A as current. Update neighbors: B = 4, C = 2.",
            table(1, Some("A"), "Visit A: B=4, C=2"),
        ),
        Step::new(
            "Visit C (dist=2)",
            "Pick the unvisited node with smallest distance: C (dist=2). Update C's neighbors: D = 2+3 = 5, B = min(4, 2+1) = 3.",
            table(2, Some("C"), "Visit C: B updated to 3, D=5"),
        ),
        Step::new(
            "Visit B (dist=3)",
            "Next smallest: B (dist=3). Update B's neighbors: D = min(5, 3+1) = 4, E = 3+5 = 8.",
            table(3, Some("B"), "Visit B: D updated to 4, E=8"),
        ),
        Step::new(
            "Visit D (dist=4)",
            "Next: D (dist=4). Update D's neighbors: E = min(8, 4+2) = 6.",
            table(4, Some("D"), "Visit D: E updated to 6"),
        ),
        Step::new(
            "Complete!",
            "Visit E (dist=6). All nodes visited! Shortest paths from A: B=3, C=2, D=4, E=6. Dijkstra always picks the nearest unvisited node: this greedy choice guarantees optimality.",
            table(5, None, "All shortest paths found!"),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(DijkstraScript::default())
}

/// Replays the distance table one visit at a time.
#[derive(Debug, Default)]
pub struct DijkstraScript {
    shown: usize,
    next: usize,
    awaiting_restart: bool,
}

impl DijkstraScript {
    /// Tentative distance to `node` in the table on screen.
    pub fn distance(&self, node: &str) -> Option<u32> {
        let i = NODES.iter().position(|n| *n == node)?;
        TABLES[self.shown][i]
    }

    pub fn visited(&self) -> &[&'static str] {
        &ORDER[..self.shown]
    }
}

impl Script for DijkstraScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        self.shown = self.next;
        if self.shown > 0 {
            let node = ORDER[self.shown - 1];
            let dist = self.distance(node).unwrap_or_default();
            log.push(format!("Visit {node}, dist={dist}"));
        }
        self.next += 1;
        if self.next >= TABLES.len() {
            self.awaiting_restart = true;
            DONE_PAUSE
        } else {
            VISIT
        }
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let current = self.shown.checked_sub(1).map(|i| ORDER[i]);
        table(self.shown, current, &format!("Step {}/{}", self.shown, ORDER.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_in_distance_order() {
        let mut script = DijkstraScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..TABLES.len() {
            script.step(&mut log);
        }

        assert_eq!(script.visited(), &ORDER);
        let lines: Vec<_> = log.iter().collect();
        assert_eq!(
            lines,
            vec![
                "Visit E, dist=6",
                "Visit D, dist=4",
                "Visit B, dist=3",
                "Visit C, dist=2",
                "Visit A, dist=0",
            ]
        );
    }

    #[test]
    fn distances_relax_over_time() {
        let mut script = DijkstraScript::default();
        let mut log = ActivityLog::new();
        assert_eq!(script.distance("E"), None);

        for _ in 0..4 {
            script.step(&mut log);
        }
        assert_eq!(script.distance("E"), Some(8));
        script.step(&mut log);
        assert_eq!(script.distance("E"), Some(6));
        assert_eq!(script.scene().caption, "Step 4/5");
    }

    #[test]
    fn pauses_on_final_table_then_restarts() {
        let mut script = DijkstraScript::default();
        let mut log = ActivityLog::new();
        let delays: Vec<_> = (0..7).map(|_| script.step(&mut log)).collect();

        assert_eq!(delays[5], DONE_PAUSE);
        assert_eq!(delays[6], AFTER_RESTART);
        assert_eq!(log.latest(), Some(LOOP_RESTART));
        assert!(script.visited().is_empty());
    }
}
