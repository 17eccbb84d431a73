//! Binary search tree.

use std::time::Duration;

use algoflow_core::scene::{BstNode, Marker};
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{info, Cursor};

const TICK: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
enum Action {
    Insert(i64),
    Search(i64),
    Clear,
}

const ACTIONS: [Action; 11] = [
    Action::Insert(8),
    Action::Insert(3),
    Action::Insert(10),
    Action::Insert(1),
    Action::Insert(6),
    Action::Insert(14),
    Action::Insert(4),
    Action::Search(6),
    Action::Search(14),
    Action::Search(1),
    Action::Clear,
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("tree"),
        info(
            "Tree / BST",
            "Hierarchical data structure",
            Category::DataStructure,
            "account_tree",
            ("O(log n)", "Search/Insert/Delete (balanced)"),
            ("O(n)", "Total nodes stored"),
        ),
        steps(),
        simulation,
    )
}

fn frame(values: &[i64], highlight: Option<i64>, marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::Tree {
            root: BstNode::from_values(values),
            highlight,
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    let grown = [8, 3, 10, 1, 6, 14];
    vec![
        Step::new(
            "What is a BST?",
            "A Binary Search Tree (BST) is a tree where for every node: all values in the left subtree are smaller, and all values in the right subtree are larger. This enables efficient search.",
            frame(&[], None, None, "BST property: left < parent < right"),
        ),
        Step::new(
            "Insert 8 (root)",
            "We insert 8 as the root of the BST. Since the tree is empty, 8 becomes the root node.",
            frame(&[8], Some(8), None, "Insert 8 → becomes root"),
        ),
        Step::new(
            "Insert 3, 10",
            "Insert 3: 3 < 8, so it goes to the left. Insert 10: 10 > 8, so it goes to the right.",
            frame(&[8, 3, 10], Some(10), None, "Insert 3 (left of 8), Insert 10 (right of 8)"),
        ),
        Step::new(
            "Insert 1, 6, 14",
            "Insert 1: go left from 8 → left from 3. Insert 6: left from 8 → right from 3. Insert 14: right from 8 → right from 10.",
            frame(&grown, Some(14), None, "Tree growing: 1, 6, 14 inserted"),
        ),
        Step::new(
            "Search for 6",
            "Search 6: start at root 8. 6 < 8 → go left to 3. 6 > 3 → go right. Found 6! Search follows the BST property at each step.",
            frame(
                &grown,
                Some(6),
                Some(Marker::Path { values: vec![8, 3, 6] }),
                "Search 6: 8→3→6 found! (2 comparisons)",
            ),
        ),
        Step::new(
            "Inorder Traversal",
            "Inorder traversal (Left → Root → Right) visits nodes in sorted order: 1, 3, 6, 8, 10, 14. This is a key property of BSTs: inorder always gives sorted output.",
            frame(
                &grown,
                None,
                Some(Marker::Order { values: vec![1, 3, 6, 8, 10, 14] }),
                "Inorder: 1 → 3 → 6 → 8 → 10 → 14 (sorted!)",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(TreeScript::default())
}

/// Path from the root to `target`, if present.
fn search_path(root: Option<&BstNode>, target: i64) -> Option<Vec<i64>> {
    let mut path = Vec::new();
    let mut node = root;
    while let Some(n) = node {
        path.push(n.value);
        if target == n.value {
            return Some(path);
        }
        node = if target < n.value {
            n.left.as_deref()
        } else {
            n.right.as_deref()
        };
    }
    None
}

/// Grows a BST, searches it, then clears it.
#[derive(Debug, Default)]
pub struct TreeScript {
    root: Option<Box<BstNode>>,
    highlight: Option<i64>,
    path: Option<Vec<i64>>,
    cursor: Cursor,
}

impl TreeScript {
    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }
}

impl Script for TreeScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        self.path = None;
        match ACTIONS[self.cursor.get()] {
            Action::Insert(v) => {
                self.root = Some(BstNode::insert(self.root.take(), v));
                self.highlight = Some(v);
                log.push(format!("Insert {v}"));
            }
            Action::Search(v) => {
                self.highlight = Some(v);
                self.path = search_path(self.root(), v);
                let outcome = if self.path.is_some() { "found!" } else { "not found" };
                log.push(format!("Search {v} → {outcome}"));
            }
            Action::Clear => {
                self.root = None;
                self.highlight = None;
                log.push(LOOP_RESTART);
            }
        }
        self.cursor.advance(ACTIONS.len());
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let caption = if self.root.is_some() { "BST" } else { "Empty BST" };
        Scene::new(
            Visual::Tree {
                root: self.root.clone(),
                highlight: self.highlight,
                marker: self.path.clone().map(|values| Marker::Path { values }),
            },
            caption,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: usize) -> (TreeScript, ActivityLog) {
        let mut script = TreeScript::default();
        let mut log = ActivityLog::new();
        for _ in 0..ticks {
            script.step(&mut log);
        }
        (script, log)
    }

    #[test]
    fn inserts_build_a_valid_bst() {
        let (script, _) = run(7);
        let root = script.root().unwrap();
        assert_eq!(root.inorder(), vec![1, 3, 4, 6, 8, 10, 14]);
        assert_eq!(root.value, 8);
    }

    #[test]
    fn search_follows_the_tree() {
        let (script, log) = run(8);
        assert_eq!(log.latest(), Some("Search 6 → found!"));
        assert_eq!(script.path, Some(vec![8, 3, 6]));
    }

    #[test]
    fn clear_logs_restart_and_empties() {
        let (script, log) = run(ACTIONS.len());
        assert!(script.root().is_none());
        assert_eq!(log.latest(), Some(LOOP_RESTART));
        assert_eq!(log.iter().filter(|l| *l == LOOP_RESTART).count(), 1);
    }

    #[test]
    fn missing_value_has_no_path() {
        let root = BstNode::from_values(&[8, 3, 10]);
        assert_eq!(search_path(root.as_deref(), 7), None);
        assert_eq!(search_path(root.as_deref(), 10), Some(vec![8, 10]));
    }
}
