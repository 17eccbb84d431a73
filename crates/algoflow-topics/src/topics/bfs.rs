//! Breadth-first search.

use std::collections::VecDeque;
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
        TopicId::new("bfs"),
        info(
            "BFS (Breadth-First Search)",
            "Level-by-level graph traversal",
            Category::Algorithm,
            "hub",
            ("O(V + E)", "V = vertices, E = edges"),
            ("O(V)", "Queue for frontier nodes"),
        ),
        steps(),
        simulation,
    )
}

fn traversal(graph: Graph, visited: &[&str], current: Option<&str>, queue: &[&str], caption: &str) -> Scene {
    Scene::new(
        Visual::Traversal {
            graph,
            frontier_kind: Frontier::Queue,
            visited: visited.iter().map(|s| s.to_string()).collect(),
            current: current.map(str::to_string),
            frontier: queue.iter().map(|s| s.to_string()).collect(),
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    let g = traversal_graph;
    vec![
        Step::new(
            "Graph & Queue",
            "BFS explores a graph level by level using a Queue (FIFO). Starting from a source node, it visits all neighbors before moving deeper. This guarantees finding the shortest path in unweighted graphs.",
            traversal(g(), &[], None, &[], "Graph with 7 nodes — BFS uses a Queue"),
        ),
        Step::new(
            "Step 1: Visit A",
            "Start at node A. Mark A as visited. Add A's unvisited neighbors (B, C) to the Queue. Queue: [B, C].",
            traversal(g(), &["A"], Some("A"), &["B", "C"], "Visit A → enqueue neighbors B, C"),
        ),
        Step::new(
            "Step 2: Visit B",
            "Dequeue B from the front of the Queue. Mark B as visited. Add B's unvisited neighbors (D, E) to the Queue. Queue: [C, D, E].",
            traversal(g(), &["A", "B"], Some("B"), &["C", "D", "E"], "Dequeue B → visit → enqueue D, E"),
        ),
        Step::new(
            "Step 3: Visit C",
            "Dequeue C. Mark C as visited. Add C's unvisited neighbor (F) to the Queue. Queue: [D, E, F]. Notice: we finish level 1 (B, C) before starting level 2.",
            traversal(g(), &["A", "B", "C"], Some("C"), &["D", "E", "F"], "Dequeue C → visit → enqueue F"),
        ),
        Step::new(
            "Step 4: Visit D",
            "Dequeue D. Mark D as visited. D has neighbor G (unvisited). Enqueue G. Queue: [E, F, G].",
            traversal(g(), &["A", "B", "C", "D"], Some("D"), &["E", "F", "G"], "Dequeue D → visit → enqueue G"),
        ),
        Step::new(
            "Step 5: Visit E, F",
            "Dequeue E, mark visited (no new neighbors). Dequeue F, mark visited (no new neighbors). Queue: [G].",
            traversal(g(), &["A", "B", "C", "D", "E", "F"], Some("F"), &["G"], "Visit E, F → no new neighbors"),
        ),
        Step::new(
            "Step 6: Visit G — Complete!",
            "Dequeue G, mark visited. Queue is empty: BFS is complete! Visit order: A→B→C→D→E→F→G. Each level was fully explored before moving to the next.",
            traversal(
                g(),
                &["A", "B", "C", "D", "E", "F", "G"],
                Some("G"),
                &[],
                "BFS Complete! Order: A→B→C→D→E→F→G",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(BfsScript::default())
}

/// Walks the graph from `A` with a FIFO frontier.
#[derive(Debug)]
pub struct BfsScript {
    graph: Graph,
    visited: Vec<String>,
    current: Option<String>,
    queue: VecDeque<String>,
    started: bool,
    awaiting_restart: bool,
}

impl Default for BfsScript {
    fn default() -> Self {
        Self {
            graph: traversal_graph(),
            visited: Vec::new(),
            current: None,
            queue: VecDeque::new(),
            started: false,
            awaiting_restart: false,
        }
    }
}

impl BfsScript {
    /// Nodes in visit order.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn queue(&self) -> Vec<&str> {
        self.queue.iter().map(String::as_str).collect()
    }
}

impl Script for BfsScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        if self.awaiting_restart {
            self.rewind();
            log.push(LOOP_RESTART);
            return AFTER_RESTART;
        }

        if !self.started {
            self.started = true;
            self.queue.push_back(SOURCE.to_string());
            log.push(format!("Start: enqueue {SOURCE}"));
            return TICK;
        }

        let Some(node) = self.queue.pop_front() else {
            log.push("BFS complete!");
            self.awaiting_restart = true;
            return DONE_PAUSE;
        };

        if !self.visited.contains(&node) {
            log.push(format!("Dequeue & visit {node}"));
            self.visited.push(node.clone());
            for next in self.graph.neighbors(&node) {
                let next = next.to_string();
                if !self.visited.contains(&next) && !self.queue.contains(&next) {
                    self.queue.push_back(next);
                }
            }
        }
        self.current = Some(node);
        TICK
    }

    fn rewind(&mut self) {
        self.visited.clear();
        self.current = None;
        self.queue.clear();
        self.started = false;
        self.awaiting_restart = false;
    }

    fn scene(&self) -> Scene {
        let caption = if self.visited.is_empty() {
            "BFS — visited: none".to_string()
        } else {
            format!("BFS — visited: {}", self.visited.join(", "))
        };
        Scene::new(
            Visual::Traversal {
                graph: self.graph.clone(),
                frontier_kind: Frontier::Queue,
                visited: self.visited.clone(),
                current: self.current.clone(),
                frontier: self.queue.iter().cloned().collect(),
            },
            caption,
        )
    }
}
