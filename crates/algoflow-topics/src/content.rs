//! Helpers shared by the topic modules.

use algoflow_core::scene::{Graph, GraphEdge, GraphNode};
use algoflow_core::{Category, Complexity, TopicInfo};

/// Display metadata from literal strings.
pub(crate) fn info(
    title: &str,
    subtitle: &str,
    category: Category,
    icon: &str,
    time: (&str, &str),
    space: (&str, &str),
) -> TopicInfo {
    TopicInfo {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        category,
        icon: icon.to_string(),
        time: Complexity::new(time.0, time.1),
        space: Complexity::new(space.0, space.1),
    }
}

/// Build a graph from laid-out nodes and optionally weighted edges.
pub(crate) fn graph(nodes: &[(&str, f32, f32)], edges: &[(&str, &str, Option<u32>)]) -> Graph {
    Graph {
        nodes: nodes
            .iter()
            .map(|&(id, x, y)| GraphNode { id: id.to_string(), x, y })
            .collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            })
            .collect(),
    }
}

/// The seven-node tree-shaped graph walked by BFS and DFS.
pub(crate) fn traversal_graph() -> Graph {
    graph(
        &[
            ("A", 210.0, 15.0),
            ("B", 100.0, 95.0),
            ("C", 320.0, 95.0),
            ("D", 40.0, 190.0),
            ("E", 170.0, 190.0),
            ("F", 350.0, 190.0),
            ("G", 100.0, 270.0),
        ],
        &[
            ("A", "B", None),
            ("A", "C", None),
            ("B", "D", None),
            ("B", "E", None),
            ("C", "F", None),
            ("D", "G", None),
        ],
    )
}

/// Position in a fixed action list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pos: usize,
}

impl Cursor {
    pub(crate) fn get(&self) -> usize {
        self.pos
    }

    /// Move past the current action. Returns `true` when the list of `len`
    /// actions is exhausted, leaving the cursor back at the start.
    pub(crate) fn advance(&mut self, len: usize) -> bool {
        self.pos += 1;
        if self.pos >= len {
            self.pos = 0;
            true
        } else {
            false
        }
    }

    pub(crate) fn rewind(&mut self) {
        self.pos = 0;
    }
}
