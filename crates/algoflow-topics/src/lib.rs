//! # AlgoFlow Topics
//!
//! Content for every topic shown by the visualizer: display metadata, the
//! narrative step sequence and a looping simulation script.
//!
//! [`registry`] builds the standard registry in landing-page order.

mod content;
pub mod topics;

use algoflow_core::{Result, TopicRegistry};

pub use topics::*;

/// Build the registry of all topics, data structures first.
pub fn registry() -> Result<TopicRegistry> {
    let mut registry = TopicRegistry::new();
    for descriptor in [
        stack::descriptor(),
        queue::descriptor(),
        array::descriptor(),
        linkedlist::descriptor(),
        hashtable::descriptor(),
        heap::descriptor(),
        tree::descriptor(),
        bubblesort::descriptor(),
        mergesort::descriptor(),
        quicksort::descriptor(),
        binarysearch::descriptor(),
        bfs::descriptor(),
        dfs::descriptor(),
        dijkstra::descriptor(),
        greedy::descriptor(),
        dp::descriptor(),
        twopointer::descriptor(),
    ] {
        registry.register(descriptor)?;
    }
    tracing::debug!(topics = registry.len(), "topic registry ready");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoflow_core::{Category, Mode, PlaybackEngine, PlaybackSpeed, TopicId};
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn registry_lists_every_topic_in_order() {
        let registry = registry().unwrap();
        let ids: Vec<_> = registry.iter().map(|t| t.id.as_str().to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "stack", "queue", "array", "linkedlist", "hashtable", "heap", "tree",
                "bubblesort", "mergesort", "quicksort", "binarysearch", "bfs", "dfs",
                "dijkstra", "greedy", "dp", "twopointer",
            ]
        );

        let landing = registry.landing();
        assert_eq!(landing.data_structures.len(), 7);
        assert_eq!(landing.algorithms.len(), 10);
        assert_eq!(registry.by_category(Category::DataStructure).count(), 7);
    }

    #[test]
    fn every_topic_has_a_walkthrough() {
        let registry = registry().unwrap();
        for topic in registry.iter() {
            assert!(topic.step_count() >= 5, "{} has too few steps", topic.id);
            assert!(!topic.info.title.is_empty());
            assert!(topic.steps.iter().all(|s| !s.title.is_empty()));
        }
    }

    #[test]
    fn every_simulation_loops_forever() {
        let registry = registry().unwrap();
        for topic in registry.iter() {
            let mut sim = topic.create_simulation();
            sim.start(Duration::ZERO);
            sim.advance_to(Duration::from_secs(600));
            assert!(sim.is_running(), "{} stopped", topic.id);
            assert!(sim.ticks() > 100, "{} ticked only {} times", topic.id, sim.ticks());
            assert!(sim.log().iter().any(|l| l == algoflow_core::LOOP_RESTART));
        }
    }

    fn topic_ids() -> Vec<TopicId> {
        registry().unwrap().iter().map(|t| t.id.clone()).collect()
    }

    proptest! {
        #[test]
        fn step_index_never_leaves_bounds(topic in 0usize..17, moves in prop::collection::vec(any::<bool>(), 0..30)) {
            let registry = registry().unwrap();
            let descriptor = registry.get(&topic_ids()[topic]).unwrap().clone();
            let count = descriptor.step_count();
            let mut engine = PlaybackEngine::enter(descriptor);
            for forward in moves {
                let index = if forward { engine.next() } else { engine.previous() };
                prop_assert!(index < count);
            }
        }

        #[test]
        fn mode_round_trip_keeps_step(topic in 0usize..17, index in 0usize..10, ticks in 0u64..40) {
            let registry = registry().unwrap();
            let descriptor = registry.get(&topic_ids()[topic]).unwrap().clone();
            let mut engine = PlaybackEngine::enter(descriptor);
            let index = engine.jump_to(index);
            engine.switch_to(Mode::Simulation);
            engine.set_speed(PlaybackSpeed::Double);
            engine.start(Duration::ZERO);
            engine.advance_to(Duration::from_millis(ticks * 500));
            engine.switch_to(Mode::Steps);
            prop_assert_eq!(engine.step_index(), index);
        }

        #[test]
        fn destroyed_simulations_stay_silent(topic in 0usize..17, before in 0u64..30_000, after in 1u64..600_000) {
            let registry = registry().unwrap();
            let descriptor = registry.get(&topic_ids()[topic]).unwrap().clone();
            let mut sim = descriptor.create_simulation();
            sim.start(Duration::ZERO);
            sim.advance_to(Duration::from_millis(before));
            sim.destroy();

            let scene = sim.scene();
            let log = sim.log().to_vec();
            let ticks = sim.ticks();
            prop_assert_eq!(sim.advance_to(Duration::from_millis(before + after)), 0);
            prop_assert_eq!(sim.scene(), scene);
            prop_assert_eq!(sim.log().to_vec(), log);
            prop_assert_eq!(sim.ticks(), ticks);
        }

        #[test]
        fn reset_restores_initial_frame(topic in 0usize..17, elapsed in 0u64..60_000) {
            let registry = registry().unwrap();
            let descriptor = registry.get(&topic_ids()[topic]).unwrap().clone();
            let mut sim = descriptor.create_simulation();
            let initial = sim.scene();
            sim.start(Duration::ZERO);
            sim.advance_to(Duration::from_millis(elapsed));
            sim.reset();

            prop_assert_eq!(sim.scene(), initial);
            prop_assert!(sim.log().is_empty());
            prop_assert!(!sim.is_running());
        }

        #[test]
        fn start_is_idempotent(topic in 0usize..17, repeats in 1usize..5) {
            let registry = registry().unwrap();
            let descriptor = registry.get(&topic_ids()[topic]).unwrap().clone();
            let mut sim = descriptor.create_simulation();
            sim.start(Duration::ZERO);
            let due = sim.next_due();
            for _ in 0..repeats {
                sim.start(Duration::from_millis(1));
            }
            prop_assert_eq!(sim.ticks(), 1);
            prop_assert_eq!(sim.next_due(), due);
        }
    }

    #[test]
    fn engine_accepts_shared_descriptors() {
        let registry = Arc::new(registry().unwrap());
        let stack = registry.get(&"stack".into()).unwrap().clone();
        let a = PlaybackEngine::enter(stack.clone());
        let b = PlaybackEngine::enter(stack);
        assert_eq!(a.step_index(), b.step_index());
    }
}
