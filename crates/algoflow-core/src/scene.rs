//! Scenes: the serializable view model behind every rendered frame.
//!
//! Step render procedures and simulation ticks both produce a [`Scene`].
//! A scene is handed to a [`Mount`], which is the only render target the
//! engine knows about. The browser client draws scenes; the engine never
//! deals with markup.

use serde::{Deserialize, Serialize};

/// A rendered frame: a visual plus the caption shown beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub caption: String,
    #[serde(flatten)]
    pub visual: Visual,
}

impl Scene {
    /// Create a scene from a visual and caption.
    pub fn new(visual: Visual, caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            visual,
        }
    }
}

/// Emphasis applied to one part of a visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Marker {
    /// An element was just added at `index`.
    Inserted { index: usize },
    /// An element was just removed.
    Removed { value: String },
    /// The element at `index` is being read or visited.
    Focused { index: usize },
    /// A new key landed in an occupied bucket.
    Collision { index: usize },
    /// An element moved from one slot to another.
    Swapped { from: usize, to: usize },
    /// Nodes visited on the way to a target.
    Path { values: Vec<i64> },
    /// Nodes in traversal order.
    Order { values: Vec<i64> },
    /// Cells the highlighted cell was computed from.
    DependsOn { indices: Vec<usize> },
    /// Base cases written directly.
    Seeded,
    /// The structure is in its final, valid shape.
    Settled,
}

/// A node of a binary search tree, owned recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstNode {
    pub value: i64,
    pub left: Option<Box<BstNode>>,
    pub right: Option<Box<BstNode>>,
}

impl BstNode {
    /// A leaf node.
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Insert `value`, sending duplicates to the right subtree.
    pub fn insert(node: Option<Box<BstNode>>, value: i64) -> Box<BstNode> {
        match node {
            None => Box::new(BstNode::leaf(value)),
            Some(mut n) => {
                if value < n.value {
                    n.left = Some(Self::insert(n.left.take(), value));
                } else {
                    n.right = Some(Self::insert(n.right.take(), value));
                }
                n
            }
        }
    }

    /// Build a tree by inserting values in order.
    pub fn from_values(values: &[i64]) -> Option<Box<BstNode>> {
        values
            .iter()
            .fold(None, |root, &v| Some(Self::insert(root, v)))
    }

    /// Values in left-root-right order.
    pub fn inorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_inorder(&mut out);
        out
    }

    fn collect_inorder(&self, out: &mut Vec<i64>) {
        if let Some(left) = &self.left {
            left.collect_inorder(out);
        }
        out.push(self.value);
        if let Some(right) = &self.right {
            right.collect_inorder(out);
        }
    }
}

/// A graph node with layout hints for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// An edge, optionally weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// A small fixed graph drawn by traversal scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Neighbors of `id` in edge declaration order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.from == id {
                    Some(e.to.as_str())
                } else if e.to == id {
                    Some(e.from.as_str())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// How a traversal holds its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontier {
    Queue,
    Stack,
}

/// Tentative distance to one node; `None` is infinity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    pub node: String,
    pub value: Option<u32>,
}

/// A half-open activity on the greedy timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

/// One probe of a finished binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProbe {
    pub label: String,
    pub range: String,
    pub mid: usize,
    pub value: i64,
    pub outcome: String,
}

/// Which way the two-pointer window moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMove {
    /// Sum too small: advance the left pointer.
    AdvanceLeft,
    /// Sum too large: retreat the right pointer.
    RetreatRight,
    /// Pair found.
    Match,
}

/// The drawable part of a scene, one variant per visual kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    Stack {
        items: Vec<i64>,
        marker: Option<Marker>,
    },
    Queue {
        items: Vec<String>,
        marker: Option<Marker>,
    },
    Array {
        items: Vec<i64>,
        highlight: Option<usize>,
        marker: Option<Marker>,
    },
    LinkedList {
        nodes: Vec<String>,
        highlight: Option<usize>,
        marker: Option<Marker>,
    },
    HashTable {
        buckets: Vec<Vec<String>>,
        highlight: Option<usize>,
        marker: Option<Marker>,
    },
    Heap {
        items: Vec<i64>,
        highlight: Option<usize>,
        marker: Option<Marker>,
    },
    Tree {
        root: Option<Box<BstNode>>,
        highlight: Option<i64>,
        marker: Option<Marker>,
    },
    Bars {
        values: Vec<i64>,
        comparing: Option<(usize, usize)>,
        sorted: Vec<usize>,
    },
    MergeGroups {
        groups: Vec<Vec<i64>>,
        level: u8,
        merging: bool,
        done: bool,
    },
    Partition {
        values: Vec<i64>,
        pivot: Option<usize>,
        /// Indices holding values below the pivot.
        low: Vec<usize>,
        /// Indices holding values above the pivot.
        high: Vec<usize>,
        /// Indices already in their final position.
        sorted: Vec<usize>,
    },
    BinarySearch {
        values: Vec<i64>,
        target: i64,
        low: usize,
        high: usize,
        mid: Option<usize>,
    },
    SearchTrace {
        probes: Vec<SearchProbe>,
        summary: String,
    },
    Traversal {
        graph: Graph,
        frontier_kind: Frontier,
        visited: Vec<String>,
        current: Option<String>,
        frontier: Vec<String>,
    },
    ShortestPath {
        graph: Graph,
        distances: Vec<Distance>,
        visited: Vec<String>,
        current: Option<String>,
    },
    Activities {
        activities: Vec<Interval>,
        selected: Vec<usize>,
        cursor: Option<usize>,
    },
    DpTable {
        cells: Vec<Option<u64>>,
        highlight: Option<usize>,
        marker: Option<Marker>,
    },
    TwoPointer {
        values: Vec<i64>,
        target: i64,
        left: usize,
        right: usize,
        sum: Option<i64>,
        verdict: Option<PointerMove>,
    },
}

/// A render target. Whoever holds the mount owns the visible frame.
pub trait Mount {
    /// Remove whatever is currently shown.
    fn clear(&mut self);

    /// Show `scene`, replacing the previous frame.
    fn present(&mut self, scene: Scene);
}

/// In-memory mount that keeps the latest frame and counts renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    scene: Option<Scene>,
    renders: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame currently shown, if any.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Number of frames presented since creation.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_none()
    }
}

impl Mount for Canvas {
    fn clear(&mut self) {
        self.scene = None;
    }

    fn present(&mut self, scene: Scene) {
        self.scene = Some(scene);
        self.renders += 1;
    }
}
