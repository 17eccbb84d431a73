//! Hash table with separate chaining.

use std::time::Duration;

use algoflow_core::scene::Marker;
use algoflow_core::{
    ActivityLog, Category, Scene, Script, ScriptedSimulation, Simulation, Step, TopicDescriptor,
    TopicId, Visual, LOOP_RESTART,
};

use crate::content::{info, Cursor};

const TICK: Duration = Duration::from_millis(1200);
const BUCKETS: usize = 5;

#[derive(Debug, Clone, Copy)]
enum Action {
    Insert(&'static str, usize),
    Lookup(&'static str, usize),
    Delete(&'static str, usize),
}

impl Action {
    fn bucket(&self) -> usize {
        match *self {
            Action::Insert(_, b) | Action::Lookup(_, b) | Action::Delete(_, b) => b,
        }
    }
}

// Bucket indices are the precomputed `hash(key) % 5` of each key.
const ACTIONS: [Action; 12] = [
    Action::Insert("cat", 3),
    Action::Insert("dog", 1),
    Action::Insert("ant", 3),
    Action::Insert("bee", 4),
    Action::Insert("fox", 1),
    Action::Lookup("cat", 3),
    Action::Delete("dog", 1),
    Action::Lookup("ant", 3),
    Action::Delete("cat", 3),
    Action::Delete("ant", 3),
    Action::Delete("bee", 4),
    Action::Delete("fox", 1),
];

pub fn descriptor() -> TopicDescriptor {
    TopicDescriptor::new(
        TopicId::new("hashtable"),
        info(
            "Hash Table",
            "Key-value data structure",
            Category::DataStructure,
            "tag",
            ("O(1) avg", "Insert/Search/Delete average"),
            ("O(n)", "Total entries stored"),
        ),
        steps(),
        simulation,
    )
}

fn table(entries: &[(&str, usize)]) -> Vec<Vec<String>> {
    let mut buckets = vec![Vec::new(); BUCKETS];
    for &(key, bucket) in entries {
        buckets[bucket].push(key.to_string());
    }
    buckets
}

fn frame(entries: &[(&str, usize)], highlight: Option<usize>, marker: Option<Marker>, caption: &str) -> Scene {
    Scene::new(
        Visual::HashTable {
            buckets: table(entries),
            highlight,
            marker,
        },
        caption,
    )
}

fn steps() -> Vec<Step> {
    let three = [("cat", 3), ("dog", 1), ("ant", 3)];
    vec![
        Step::new(
            "Empty Hash Table",
            "A hash table uses a hash function to map keys to bucket indices. We start with 5 empty buckets (indices 0–4). The hash function determines which bucket a key goes to.",
            frame(&[], None, None, "Empty hash table with 5 buckets"),
        ),
        Step::new(
            "Insert \"cat\"",
            "We hash the key \"cat\": hash(\"cat\") % 5 = 3. The key-value pair is stored in bucket 3.",
            frame(&[("cat", 3)], Some(3), Some(Marker::Inserted { index: 0 }), "hash(\"cat\") % 5 = 3 → stored in bucket 3"),
        ),
        Step::new(
            "Insert \"dog\"",
            "We hash \"dog\": hash(\"dog\") % 5 = 1. Stored in bucket 1. No collision since bucket 1 was empty.",
            frame(
                &[("cat", 3), ("dog", 1)],
                Some(1),
                Some(Marker::Inserted { index: 0 }),
                "hash(\"dog\") % 5 = 1 → stored in bucket 1",
            ),
        ),
        Step::new(
            "Collision! Insert \"ant\"",
            "We hash \"ant\": hash(\"ant\") % 5 = 3. Bucket 3 already has \"cat\"! This is a collision. We resolve it by chaining: \"ant\" is added to the same bucket as a linked entry.",
            frame(
                &three,
                Some(3),
                Some(Marker::Collision { index: 1 }),
                "hash(\"ant\") % 5 = 3 → COLLISION! Chained with \"cat\"",
            ),
        ),
        Step::new(
            "Lookup \"cat\"",
            "To find \"cat\", we compute hash(\"cat\") % 5 = 3. We go to bucket 3 and search the chain: first entry is \"cat\", found!",
            frame(&three, Some(3), Some(Marker::Focused { index: 0 }), "Lookup \"cat\": hash=3 → found in bucket 3!"),
        ),
        Step::new(
            "Delete \"dog\"",
            "To delete \"dog\", we hash it to bucket 1, find it there, and remove it. Bucket 1 is now empty again.",
            frame(
                &[("cat", 3), ("ant", 3)],
                Some(1),
                Some(Marker::Removed { value: "dog".into() }),
                "Delete \"dog\": hash=1 → removed from bucket 1",
            ),
        ),
    ]
}

fn simulation() -> Box<dyn Simulation> {
    ScriptedSimulation::boxed(HashTableScript::default())
}

/// Inserts, looks up and deletes string keys across five chained buckets.
#[derive(Debug)]
pub struct HashTableScript {
    buckets: Vec<Vec<&'static str>>,
    highlight: Option<usize>,
    marker: Option<Marker>,
    cursor: Cursor,
}

impl Default for HashTableScript {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKETS],
            highlight: None,
            marker: None,
            cursor: Cursor::default(),
        }
    }
}

impl HashTableScript {
    pub fn bucket(&self, index: usize) -> &[&'static str] {
        &self.buckets[index]
    }

    /// Keys stored across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Script for HashTableScript {
    fn step(&mut self, log: &mut ActivityLog) -> Duration {
        let action = ACTIONS[self.cursor.get()];
        let b = action.bucket();
        self.highlight = Some(b);
        let chain = &mut self.buckets[b];
        self.marker = match action {
            Action::Insert(key, _) => {
                let collided = !chain.is_empty();
                chain.push(key);
                log.push(format!("Insert \"{key}\" → bucket {b}"));
                let index = chain.len() - 1;
                Some(if collided {
                    Marker::Collision { index }
                } else {
                    Marker::Inserted { index }
                })
            }
            Action::Delete(key, _) => {
                chain.retain(|k| *k != key);
                log.push(format!("Delete \"{key}\" from bucket {b}"));
                Some(Marker::Removed { value: key.to_string() })
            }
            Action::Lookup(key, _) => {
                log.push(format!("Lookup \"{key}\" → bucket {b}: found!"));
                chain
                    .iter()
                    .position(|k| *k == key)
                    .map(|index| Marker::Focused { index })
            }
        };
        if self.cursor.advance(ACTIONS.len()) {
            self.rewind();
            log.push(LOOP_RESTART);
        }
        TICK
    }

    fn rewind(&mut self) {
        *self = Self::default();
    }

    fn scene(&self) -> Scene {
        let buckets = self
            .buckets
            .iter()
            .map(|chain| chain.iter().map(|k| k.to_string()).collect())
            .collect();
        Scene::new(
            Visual::HashTable {
                buckets,
                highlight: self.highlight,
                marker: self.marker.clone(),
            },
            format!("Entries: {}", self.len()),
        )
    }
}
