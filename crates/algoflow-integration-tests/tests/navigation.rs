//! Navigation scenarios: URL resolution, history writes and back/forward.

use algoflow_core::{History, HistoryWrite, NavigationSource, NavigationState, TopicId, LANDING_TITLE};
use algoflow_integration_tests::controller;

fn id(s: &str) -> TopicId {
    TopicId::new(s)
}

#[test]
fn deep_link_shows_topic_without_landing() {
    let mut nav = controller();
    nav.initial_load(Some("#bfs"));

    assert_eq!(nav.current_topic(), Some(&id("bfs")));
    assert_eq!(nav.landing_renders(), 0);
    assert_eq!(
        nav.page_title(),
        "BFS (Breadth-First Search) — AlgoFlow | Algorithm Visualizer"
    );

    let writes = nav.history().writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, HistoryWrite::Replace);
    assert_eq!(writes[0].1.url, "#bfs");

    // Back from the only entry leaves the application.
    assert_eq!(nav.history_mut().back(), None);
    assert!(nav.history().has_left_app());
}

#[test]
fn empty_url_lands_on_landing() {
    let mut nav = controller();
    nav.initial_load(None);

    assert!(nav.view().is_landing());
    assert_eq!(nav.page_title(), LANDING_TITLE);
    assert_eq!(nav.landing_renders(), 1);
    assert_eq!(nav.history().current().map(|e| e.url.as_str()), Some("/"));
}

#[test]
fn unknown_deep_link_falls_back_to_landing() {
    let mut nav = controller();
    nav.initial_load(Some("#nope"));

    assert!(nav.view().is_landing());
    assert_eq!(nav.history().writes().len(), 1);
    assert_eq!(nav.history().writes()[0].0, HistoryWrite::Replace);
}

#[test]
fn each_user_navigation_pushes_once() {
    let mut nav = controller();
    nav.initial_load(None);
    nav.select_topic(&id("stack"), NavigationSource::User);
    nav.select_topic(&id("heap"), NavigationSource::User);
    nav.show_landing(NavigationSource::User);

    let kinds: Vec<_> = nav.history().writes().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            HistoryWrite::Replace,
            HistoryWrite::Push,
            HistoryWrite::Push,
            HistoryWrite::Push,
        ]
    );
    assert_eq!(nav.history().back_len(), 3);
}

#[test]
fn unknown_user_target_is_ignored() {
    let mut nav = controller();
    nav.initial_load(Some("#dp"));

    assert!(!nav.select_topic(&id("nope"), NavigationSource::User));
    assert_eq!(nav.current_topic(), Some(&id("dp")));
    assert_eq!(nav.history().writes().len(), 1);
}

#[test]
fn back_and_forward_replay_without_writing() {
    let mut nav = controller();
    nav.initial_load(None);
    nav.select_topic(&id("queue"), NavigationSource::User);
    nav.select_topic(&id("dfs"), NavigationSource::User);
    let writes = nav.history().writes().len();

    let state = nav.history_mut().back();
    nav.pop_state(state);
    assert_eq!(nav.current_topic(), Some(&id("queue")));

    let state = nav.history_mut().back();
    nav.pop_state(state);
    assert!(nav.view().is_landing());
    assert_eq!(nav.landing_renders(), 2);

    let state = nav.history_mut().forward();
    nav.pop_state(state);
    assert_eq!(nav.current_topic(), Some(&id("queue")));

    assert_eq!(nav.history().writes().len(), writes);
}

#[test]
fn popped_unknown_topic_shows_landing() {
    let mut nav = controller();
    nav.initial_load(Some("#tree"));
    nav.pop_state(Some(NavigationState::topic(id("gone"))));

    assert!(nav.view().is_landing());
    assert_eq!(nav.history().writes().len(), 1);
}

#[test]
fn landing_frame_groups_cards() {
    let mut nav = controller();
    nav.initial_load(None);

    let frame = serde_json::to_value(nav.frame()).unwrap();
    assert_eq!(frame["view"], "landing");
    assert_eq!(frame["landing"]["data_structures"].as_array().map(Vec::len), Some(7));
    assert_eq!(frame["landing"]["algorithms"].as_array().map(Vec::len), Some(10));
    assert_eq!(frame["landing"]["algorithms"][0]["id"], "bubblesort");
}
