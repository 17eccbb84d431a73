//! Depth-first search.

use std::time::Duration;

use algoflow_core::scene::{Frontier, Graph};
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{info, traversal_graph};

const TICK: Duration = Duration::from_millis(1000);
const DONE_PAUSE: Duration = Duration::from_millis(2000);
const AFTER_RESTART: Duration = Duration::from_millis(1200);

const SOURCE: &str = "A";

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("dfs"),
        info(
            "DFS (Depth-First Search)",
            "Deep-dive graph traversal",
            Category::Algorithm,
            "account_tree",
            ("O(V + E)", "V = vertices, E = edges"),
            ("O(V)", "Stack (recursion or explicit)"),
        ),
        steps(),
        simulation,
    )
}

fn traversal(visited: &[&str], current: Option<&str>, stack: &[&str], caption: &str) -> Scene {
    Scene::new(
        Visual::Traversal {
            graph: traversal_graph(),
            frontier_kind: Frontier::Stack,
            visited: visited.iter().map(|s| s.to_string()).collect(),
            current: current.map(str::to_string),
            frontier: stack.iter().map(|s| s.to_string()).collect(),
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "Graph & Stack",
            "DFS explores as far as possible along each branch before backtracking. It uses a Stack (LIFO): either explicitly or via recursion. DFS is great for pathfinding, cycle detection, and topological sorting.",
            traversal(&[], None, &[], "Graph with 7 nodes — DFS uses a Stack"),
        ),
        Step::new(
            "Step 1: Visit A",
            "Start at node A. Push A onto the Stack. Pop A, mark as visited. Push A's neighbors (C, B) onto the Stack (reverse order so B is processed first). Stack: [C, B].",
            traversal(&["A"], Some("A"), &["C", "B"], "Visit A → push neighbors B, C to stack"),
        ),
        Step::new(
            "Step 2: Visit B (go deep!)",
            "Pop B from the top of the Stack. Mark B as visited. Push B's unvisited neighbors (E, D). Stack: [C, E, D]. We go DEEP into B's branch first!",
            traversal(&["A", "B"], Some("B"), &["C", "E", "D"], "Pop B → visit → push D, E (go deep!)"),
        ),
        Step::new(
            "Step 3: Visit D",
            "Pop D from the Stack. Mark D as visited. Push D's unvisited neighbor (G). Stack: [C, E, G]. We keep going deeper!",
            traversal(&["A", "B", "D"], Some("D"), &["C", "E", "G"], "Pop D → visit → push G (deeper!)"),
        ),
        Step::new(
            "Step 4: Visit G (deepest)",
            "Pop G from the Stack. Mark G as visited. G has no unvisited neighbors. Stack: [C, E]. We've reached the deepest point on this branch: time to backtrack!",
            traversal(&["A", "B", "D", "G"], Some("G"), &["C", "E"], "Pop G → visit → dead end, backtrack"),
        ),
        Step::new(
            "Step 5: Backtrack to E",
            "Pop E from the Stack. Mark E as visited. E has no unvisited neighbors. Stack: [C]. We've finished B's entire branch (B→D→G→E). Now we backtrack to A's other branch.",
            traversal(&["A", "B", "D", "G", "E"], Some("E"), &["C"], "Pop E → visit → B's branch complete"),
        ),
        Step::new(
            "Step 6: Visit C, F — Complete!",
            "Pop C, mark visited, push F. Pop F, mark visited. Stack is empty: DFS is complete! Visit order: A→B→D→G→E→C→F. Notice: DFS went deep first (A→B→D→G) before exploring other branches.",
            traversal(
                &["A", "B", "D", "G", "E", "C", "F"],
                Some("F"),
                &[],
                "DFS Complete! Order: A→B→D→G→E→C→F",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(DfsScript::default())
}

/// Walks the graph from `A` with a LIFO frontier.
#[derive(Debug)]
pub struct DfsScript {
    graph: Graph,
    visited: Vec<String>,
    current: Option<String>,
    /// Top of the stack is the last element.
    stack: Vec<String>,
    started: bool,
    awaiting_restart: bool,
}

impl Default for DfsScript {
    fn default() -> Self {
        Self {
            graph: traversal_graph(),
            visited: Vec::new(),
            current: None,
            stack: Vec::new(),
            started: false,
            awaiting_restart: false,
        }
    }
}

impl DfsScript {
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn stack(&self) -> Vec<&str> {
        self.stack.iter().map(String::as_str).collect()
    }
}

impl Script for DfsScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        if !self.started {
            self.started = true;
            self.stack.push(SOURCE.to_string());
            log.push(format!("Start: push {SOURCE}"));
            return TICK;
        }

        let Some(node) = self.stack.pop() else {
            log.push("DFS complete!");
            self.awaiting_restart = true;
            return DONE_PAUSE;
        };

        if !self.visited.contains(&node) {
            log.push(format!("Pop & visit {node}"));
            self.visited.push(node.clone());
            // Reversed so the first neighbor ends up on top.
            for next in self.graph.neighbors(&node).into_iter().rev() {
                if !self.visited.iter().any(|v| v == next) {
                    self.stack.push(next.to_string());
                }
            }
        }
        self.current = Some(node);
        TICK
    }

    fn rewind(&mut self) {
        self.visited.clear();
        self.current = None;
        self.stack.clear();
        self.started = false;
        self.awaiting_restart = false;
    }

    fn scene(&self) -> Scene {
        let visited = if self.visited.is_empty() {
            "none".to_string()
        } else {
            self.visited.join(", ")
        };
        Scene::new(
            Visual::Traversal {
                graph: self.graph.clone(),
                frontier_kind: Frontier::Stack,
                visited: self.visited.clone(),
                current: self.current.clone(),
                frontier: self.stack.clone(),
            },
            format!("DFS — visited: {visited}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: usize) -> (DfsScript, ActivityLog) {
        let mut script = DfsScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..ticks {
            script.step(&mut log);
        }
        (script, log)
    }

    #[test]
    fn goes_deep_before_wide() {
        let (script, _) = run(8);
        assert_eq!(script.visited(), &["A", "B", "D", "G", "E", "C", "F"]);
        assert!(script.stack().is_empty());
    }

    #[test]
    fn stack_matches_walkthrough() {
        let (script, _) = run(3);
        assert_eq!(script.stack(), vec!["C", "E", "D"]);

        let (script, _) = run(4);
        assert_eq!(script.stack(), vec!["C", "E", "G"]);
    }

    #[test]
    fn completes_then_restarts() {
        let (script, log) = run(10);
        assert_eq!(log.latest(), Some(LOOP_RESTART));
        assert_eq!(log.iter().nth(1), Some("DFS complete!"));
        assert!(script.visited().is_empty());
        assert_eq!(script.scene().caption, "DFS — visited: none");
    }
}
