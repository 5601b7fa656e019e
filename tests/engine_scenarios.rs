//! End-to-end engine scenarios driven over virtual time.
//!
//! These run the full driver: real timer tasks, real fetch tasks, scripted
//! provider responses. Time is paused so debounce windows elapse exactly when
//! the test advances the clock.

mod common;

use std::time::Duration;

use common::{place, settle, wait_for, ScriptedProvider};
use searchbox::app::DEBOUNCE_DELAY;
use searchbox::provider::ProviderError;
use searchbox::{Config, Phase, SearchBox};

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn typing_burst_commits_once_after_quiet_window() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("p");
    engine.change("pa");
    engine.change("par");
    // Let the driver process the burst and arm the final timer.
    settle().await;

    // One tick short of the quiet window: nothing committed yet.
    tokio::time::advance(Duration::from_millis(499)).await;
    settle().await;
    assert!(requests.try_recv().is_err());
    assert!(!engine.view().is_fetching());

    // The final tick commits the last text only.
    tokio::time::advance(Duration::from_millis(1)).await;
    let request = requests.recv().await.expect("query committed");
    assert_eq!(request.query, "par");

    request.respond(Ok(vec![place(1, "Paris")]));
    let view = wait_for(&mut updates, |view| view.is_panel_open()).await;
    assert_eq!(view.suggestions.len(), 1);

    // The whole burst produced exactly one request.
    assert!(requests.try_recv().is_err());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn results_present_and_selection_fills_input() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;

    let request = requests.recv().await.expect("query committed");
    assert_eq!(request.query, "par");
    request.respond(Ok(vec![place(1, "Paris"), place(2, "Parma")]));

    let view = wait_for(&mut updates, |view| view.is_panel_open()).await;
    assert_eq!(view.suggestions.len(), 2);
    assert!(view.is_focused());

    engine.select(2u64);
    let view = wait_for(&mut updates, |view| view.selected.is_some()).await;
    assert_eq!(view.query, "Parma");
    assert!(!view.is_focused());
    assert!(!view.is_panel_open());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn superseded_fetch_cannot_clobber_newer_results() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let first = requests.recv().await.expect("first query committed");

    // New text supersedes the first query while it is still in flight.
    engine.change("ber");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let second = requests.recv().await.expect("second query committed");
    assert_eq!(second.query, "ber");

    second.respond(Ok(vec![place(2, "Berlin")]));
    let view = wait_for(&mut updates, |view| view.is_panel_open()).await;
    assert_eq!(view.suggestions[0].label, "Berlin");

    // The abandoned request answers late; nothing may change.
    first.respond(Ok(vec![place(1, "Paris")]));
    settle().await;
    let view = engine.view();
    assert_eq!(view.suggestions[0].label, "Berlin");
    assert_eq!(view.phase, Phase::WaitingSelection);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn abandoned_reply_cannot_settle_the_replacement_fetch() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let first = requests.recv().await.expect("first query committed");

    engine.change("ber");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let second = requests.recv().await.expect("second query committed");

    // This time the abandoned request answers before the current one.
    // Its task is already gone, so the reply lands nowhere and the
    // engine keeps waiting on the current request.
    first.respond(Ok(vec![place(1, "Paris")]));
    settle().await;
    let view = engine.view();
    assert_eq!(view.phase, Phase::Fetching);
    assert!(view.suggestions.is_empty());

    second.respond(Ok(vec![place(2, "Berlin")]));
    let view = wait_for(&mut updates, |view| view.is_panel_open()).await;
    assert_eq!(view.suggestions[0].label, "Berlin");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn blank_text_commits_without_a_request() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());

    engine.focus();
    engine.change("   ");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    settle().await;

    assert!(requests.try_recv().is_err());
    let view = engine.view();
    assert!(!view.is_fetching());
    assert!(view.is_focused());
    assert!(!view.is_panel_open());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failure_is_remembered_across_focus_changes() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("zzz");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;

    let request = requests.recv().await.expect("query committed");
    request.respond(Err(ProviderError::Backend(
        "backend unavailable".to_string(),
    )));

    let view = wait_for(&mut updates, |view| view.tags.is_errored).await;
    assert_eq!(view.error.as_deref(), Some("Failed to fetch places"));
    assert!(view.is_panel_open());

    engine.blur();
    let view = wait_for(&mut updates, |view| !view.is_focused()).await;
    assert!(view.tags.is_errored, "blur keeps the error");

    engine.focus();
    let view = wait_for(&mut updates, |view| view.is_focused()).await;
    assert!(view.tags.is_errored);
    assert!(view.is_panel_open());

    // Typing again drops the error.
    engine.change("par");
    let view = wait_for(&mut updates, |view| view.error.is_none()).await;
    assert!(view.tags.is_changing);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn disabling_freezes_input_handling() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let request = requests.recv().await.expect("query committed");
    request.respond(Ok(vec![place(1, "Paris")]));
    wait_for(&mut updates, |view| view.is_panel_open()).await;

    engine.disable();
    let view = wait_for(&mut updates, |view| view.is_disabled()).await;
    assert!(!view.is_panel_open());

    // Input while disabled goes nowhere.
    engine.change("berl");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    settle().await;
    assert!(requests.try_recv().is_err());
    assert_eq!(engine.view().query, "par");

    engine.enable();
    let view = wait_for(&mut updates, |view| !view.is_disabled()).await;
    assert!(view.is_panel_open(), "enable resumes the frozen phase");
    assert_eq!(view.suggestions.len(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn focused_selection_reopens_on_click() {
    let (provider, mut requests) = ScriptedProvider::new();
    let config = Config {
        focus_on_select: true,
        ..Config::default()
    };
    let engine = SearchBox::spawn(provider, config);
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;
    tokio::time::advance(DEBOUNCE_DELAY).await;
    let request = requests.recv().await.expect("query committed");
    request.respond(Ok(vec![place(1, "Paris"), place(2, "Parma")]));
    wait_for(&mut updates, |view| view.is_panel_open()).await;

    engine.select(1u64);
    let view = wait_for(&mut updates, |view| view.selected.is_some()).await;
    assert!(view.is_focused());
    assert!(!view.is_panel_open());
    assert_eq!(view.query, "Paris");

    engine.click();
    let view = wait_for(&mut updates, |view| view.is_panel_open()).await;
    let panel = view.compute_viewmodel().panel.expect("panel reopened");
    assert_eq!(panel.items.len(), 2);
    assert!(panel.items[0].is_selected);
    assert!(!panel.items[1].is_selected);

    // Reopening reuses the cached rows; no second request goes out.
    assert!(requests.try_recv().is_err());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dropping_the_handle_shuts_the_engine_down() {
    let (provider, mut requests) = ScriptedProvider::new();
    let engine = SearchBox::spawn(provider, Config::default());
    let mut updates = engine.subscribe();

    engine.focus();
    engine.change("par");
    settle().await;

    drop(engine);

    // The driver stops publishing and releases the provider.
    while updates.changed().await.is_ok() {}
    assert!(requests.recv().await.is_none());
}
