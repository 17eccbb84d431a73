//! Playback scenarios against real topics.

use algoflow_core::{Mode, NavigationSource, PlaybackSpeed, TopicId, Visual, LOOP_RESTART};
use algoflow_integration_tests::{controller, ms, registry};
use proptest::prelude::*;

#[test]
fn stack_steps_walkthrough() {
    let mut nav = controller();
    nav.initial_load(Some("#stack"));
    let engine = nav.playback_mut().unwrap();

    assert!(!engine.can_previous());
    while engine.can_next() {
        engine.next();
    }
    assert_eq!(engine.step_index(), engine.step_count() - 1);
    assert_eq!(engine.next(), engine.step_count() - 1);

    engine.jump_to(1);
    let status = engine.status();
    assert_eq!(status.step_index, 1);
    assert!(status.can_previous && status.can_next);
    assert_eq!(status.scene.as_ref(), Some(engine.current_step().scene()));
}

#[test]
fn queue_simulation_runs_and_resets() {
    let mut nav = controller();
    nav.initial_load(Some("#queue"));
    let engine = nav.playback_mut().unwrap();
    engine.switch_to(Mode::Simulation);
    let initial = engine.canvas().scene().cloned();

    engine.start(ms(0));
    engine.advance_to(ms(5_000));
    assert!(engine.is_playing());
    assert_eq!(engine.status().log.len(), 6);

    engine.reset();
    assert!(!engine.is_playing());
    assert!(engine.status().log.is_empty());
    assert_eq!(engine.canvas().scene().cloned(), initial);
}

#[test]
fn double_speed_halves_the_gap() {
    let mut nav = controller();
    nav.initial_load(Some("#stack"));
    let engine = nav.playback_mut().unwrap();
    engine.switch_to(Mode::Simulation);
    engine.set_speed(PlaybackSpeed::Double);
    engine.start(ms(0));

    assert_eq!(engine.next_deadline(), Some(ms(500)));
}

#[test]
fn leaving_a_topic_stops_its_simulation() {
    let mut nav = controller();
    nav.initial_load(Some("#bfs"));
    let engine = nav.playback_mut().unwrap();
    engine.switch_to(Mode::Simulation);
    engine.start(ms(0));
    assert!(nav.next_deadline().is_some());

    nav.select_topic(&TopicId::new("dfs"), NavigationSource::User);
    assert_eq!(nav.next_deadline(), None);
    assert_eq!(nav.advance_to(ms(60_000)), 0);

    let engine = nav.playback().unwrap();
    assert_eq!(engine.mode(), Mode::Steps);
    assert_eq!(engine.step_index(), 0);
}

#[test]
fn returning_to_steps_keeps_position() {
    let mut nav = controller();
    nav.initial_load(Some("#mergesort"));
    let engine = nav.playback_mut().unwrap();
    engine.jump_to(3);
    engine.switch_to(Mode::Simulation);
    engine.start(ms(0));
    engine.switch_to(Mode::Steps);

    assert_eq!(engine.step_index(), 3);
    assert!(!engine.is_playing());
    assert_eq!(engine.canvas().scene(), Some(engine.current_step().scene()));
}

#[test]
fn binary_search_simulation_wraps_targets() {
    let mut nav = controller();
    nav.initial_load(Some("#binarysearch"));
    let engine = nav.playback_mut().unwrap();
    engine.switch_to(Mode::Simulation);
    engine.start(ms(0));
    engine.advance_to(ms(120_000));

    let log = engine.status().log;
    assert!(log.iter().any(|l| l == LOOP_RESTART));
    assert!(log.iter().any(|l| l == "Searching for 91"));
    match engine.canvas().scene().map(|s| &s.visual) {
        Some(Visual::BinarySearch { values, .. }) => assert_eq!(values.len(), 10),
        other => panic!("unexpected visual {other:?}"),
    }
}

proptest! {
    #[test]
    fn every_topic_survives_random_navigation(
        picks in prop::collection::vec(0usize..17, 1..12),
        ticks in 0u64..30,
    ) {
        let registry = registry();
        let ids: Vec<_> = registry.iter().map(|t| t.id.clone()).collect();
        let mut nav = controller();
        nav.initial_load(None);

        let mut now = ms(0);
        for pick in picks {
            prop_assert!(nav.select_topic(&ids[pick], NavigationSource::User));
            let engine = nav.playback_mut().unwrap();
            engine.switch_to(Mode::Simulation);
            engine.start(now);
            now += ms(ticks * 250);
            nav.advance_to(now);
            prop_assert_eq!(nav.current_topic(), Some(&ids[pick]));
        }

        nav.show_landing(NavigationSource::User);
        prop_assert_eq!(nav.next_deadline(), None);
    }
}
