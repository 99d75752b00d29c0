mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{fixture_source, HOME, PROFILE, SETTLE_TIMEOUT};
use sdui_runtime::conditional::ConditionalEvaluator;
use sdui_runtime::config::SessionConfig;
use sdui_runtime::layout::{LayoutError, LayoutSource};
use sdui_runtime::model::ComponentNode;
use sdui_runtime::render::resolve_snapshot;
use sdui_runtime::session::{Effect, ScreenSession, SessionDriver, SessionIntent};
use sdui_runtime::state::Resolution;
use sdui_runtime::ui::screen::ScreenStatus;
use sdui_runtime::value::PrimitiveValue;
use tokio::time::timeout;

fn spawn(source: Arc<dyn LayoutSource>) -> SessionDriver {
    SessionDriver::spawn(ScreenSession::new(SessionConfig::default()), source)
}

fn screen_of(status: &ScreenStatus) -> Option<&str> {
    status.snapshot().map(|snapshot| snapshot.screen_id.as_str())
}

/// Source that answers each layout after a fixed delay.
struct DelayedSource {
    layouts: HashMap<&'static str, (&'static str, Duration)>,
}

#[async_trait]
impl LayoutSource for DelayedSource {
    async fn fetch_layout(&self, layout_id: &str) -> Result<ComponentNode, LayoutError> {
        let Some((json, delay)) = self.layouts.get(layout_id) else {
            return Err(LayoutError::NotFound {
                layout_id: layout_id.to_string(),
            });
        };
        tokio::time::sleep(*delay).await;
        Ok(ComponentNode::from_json_str(json).unwrap())
    }
}

#[tokio::test]
async fn click_navigate_then_load_pushes_profile() {
    let mut driver = spawn(fixture_source());
    let mut effects = driver.take_effects().unwrap();
    let handle = driver.handle();

    let status = handle.load_layout("home").await.unwrap();
    assert_eq!(screen_of(&status), Some("home"));
    assert!(!status.can_go_back());

    handle.interact("home", "go", "onClick").await.unwrap();
    assert_eq!(
        effects.try_recv().ok(),
        Some(Effect::Navigate {
            target: "profile".into()
        })
    );
    assert!(effects.try_recv().is_err());

    let status = handle.load_layout("profile").await.unwrap();
    assert_eq!(screen_of(&status), Some("profile"));
    assert!(status.can_go_back());
    assert_eq!(
        status.snapshot().unwrap().back_stack,
        vec!["home".to_string(), "profile".to_string()]
    );
}

#[tokio::test]
async fn back_restores_previous_screen_and_its_state() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    handle.load_layout("profile").await.unwrap();
    handle
        .update_state("profile", "@@user.name", PrimitiveValue::from("Grace"))
        .await
        .unwrap();
    handle.load_layout("home").await.unwrap();

    let status = handle.back().await.unwrap();
    let snapshot = status.snapshot().unwrap();
    assert_eq!(snapshot.screen_id, "profile");
    assert!(!snapshot.can_go_back);
    assert_eq!(
        snapshot.resolve("@@user.name"),
        Resolution::Value(PrimitiveValue::from("Grace"))
    );
}

#[tokio::test]
async fn back_on_root_is_ignored() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    let before = handle.load_layout("home").await.unwrap();
    let after = handle.back().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn intents_before_first_load_return_without_waiting() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    let status = timeout(SETTLE_TIMEOUT, handle.back()).await.unwrap().unwrap();
    assert!(status.is_loading());
    let status = timeout(SETTLE_TIMEOUT, handle.refresh()).await.unwrap().unwrap();
    assert!(status.is_loading());
    let status = timeout(SETTLE_TIMEOUT, handle.interact("home", "go", "onClick"))
        .await
        .unwrap()
        .unwrap();
    assert!(status.is_loading());
    timeout(
        SETTLE_TIMEOUT,
        handle.update_state("home", "@@draft", PrimitiveValue::from("x")),
    )
    .await
    .unwrap()
    .unwrap();

    let status = handle.load_layout("home").await.unwrap();
    assert_eq!(screen_of(&status), Some("home"));
}

#[tokio::test]
async fn unknown_action_reports_and_siblings_run() {
    let mut driver = spawn(fixture_source());
    let mut effects = driver.take_effects().unwrap();
    let handle = driver.handle();

    handle.load_layout("home").await.unwrap();
    handle.interact("home", "noisy", "onClick").await.unwrap();

    assert_eq!(
        effects.try_recv().ok(),
        Some(Effect::ShowMessage {
            message: "Unhandled action: vibrate".into()
        })
    );
    assert_eq!(
        effects.try_recv().ok(),
        Some(Effect::Navigate {
            target: "settings".into()
        })
    );
}

#[tokio::test]
async fn unmatched_event_changes_nothing() {
    let mut driver = spawn(fixture_source());
    let mut effects = driver.take_effects().unwrap();
    let handle = driver.handle();

    let before = handle.load_layout("home").await.unwrap();
    let after = handle.interact("home", "go", "onLongPress").await.unwrap();
    assert_eq!(before, after);
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn set_state_flips_conditional_branch() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();
    let conditions = ConditionalEvaluator::default();

    let status = handle.load_layout("profile").await.unwrap();
    let resolved = resolve_snapshot(status.snapshot().unwrap(), &conditions).unwrap();
    assert!(resolved.find_by_id("unconfirmed").is_some());
    assert!(resolved.find_by_id("confirmed").is_none());

    let status = handle.interact("profile", "confirm", "onClick").await.unwrap();
    let snapshot = status.snapshot().unwrap();
    let resolved = resolve_snapshot(snapshot, &conditions).unwrap();
    assert!(resolved.find_by_id("unconfirmed").is_none());
    assert_eq!(
        resolved.find_by_id("confirmed").unwrap().value("text"),
        Some(&PrimitiveValue::from("Ada"))
    );
}

#[tokio::test]
async fn refresh_action_reloads_without_push() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    let before = handle.load_layout("home").await.unwrap();
    let after = handle.interact("home", "reload", "onClick").await.unwrap();

    let (before, after) = (before.snapshot().unwrap(), after.snapshot().unwrap());
    assert_eq!(after.screen_id, "home");
    assert_eq!(after.back_stack, vec!["home".to_string()]);
    assert!(after.revision > before.revision);
}

#[tokio::test]
async fn failed_load_is_navigable_and_refresh_retries() {
    let source = fixture_source();
    let driver = spawn(source.clone());
    let handle = driver.handle();

    handle.load_layout("home").await.unwrap();
    let status = handle.load_layout("later").await.unwrap();
    match &status {
        ScreenStatus::Error {
            message,
            can_go_back,
        } => {
            assert_eq!(message, "No layout found for id: later");
            assert!(can_go_back);
        }
        other => panic!("expected Error, got {:?}", other),
    }

    source.insert("later", HOME);
    let status = handle.refresh().await.unwrap();
    assert_eq!(screen_of(&status), Some("later"));
    assert_eq!(
        status.snapshot().unwrap().back_stack,
        vec!["home".to_string(), "later".to_string()]
    );
}

#[tokio::test]
async fn deep_link_replaces_stack_and_reseeds() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    handle.load_layout("profile").await.unwrap();
    handle
        .update_state("profile", "user.name", PrimitiveValue::from("Grace"))
        .await
        .unwrap();
    handle.load_layout("home").await.unwrap();

    let status = handle.deep_link("profile").await.unwrap();
    let snapshot = status.snapshot().unwrap();
    assert_eq!(snapshot.back_stack, vec!["profile".to_string()]);
    assert!(!snapshot.can_go_back);
    assert_eq!(
        snapshot.resolve("@@user.name"),
        Resolution::Value(PrimitiveValue::from("Ada"))
    );
}

#[tokio::test]
async fn data_arrival_recomposes_current_screen() {
    let driver = spawn(fixture_source());
    let handle = driver.handle();

    let before = handle.load_layout("profile").await.unwrap();
    let payload = PrimitiveValue::from_json_str(r#"{"user":{"name":"Lin","age":36}}"#).unwrap();
    let after = handle.data_arrived("profile", payload).await.unwrap();

    let (before, after) = (before.snapshot().unwrap(), after.snapshot().unwrap());
    assert!(after.revision > before.revision);
    assert_eq!(
        after.resolve("@@user.name"),
        Resolution::Value(PrimitiveValue::from("Lin"))
    );
    assert_eq!(
        after.resolve("@@user.age"),
        Resolution::Value(PrimitiveValue::Integer(36))
    );
}

#[tokio::test]
async fn superseded_load_is_discarded() {
    let source = Arc::new(DelayedSource {
        layouts: HashMap::from([
            ("slow", (PROFILE, Duration::from_millis(200))),
            ("home", (HOME, Duration::from_millis(0))),
        ]),
    });
    let driver = spawn(source);
    let handle = driver.handle();

    handle.submit(SessionIntent::load("slow")).await.unwrap();
    let status = timeout(SETTLE_TIMEOUT, handle.load_layout("home"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(screen_of(&status), Some("home"));

    tokio::time::sleep(Duration::from_millis(300)).await;
    let status = handle.status();
    assert_eq!(screen_of(&status), Some("home"));
    assert_eq!(status.snapshot().unwrap().back_stack, vec!["home".to_string()]);
}

#[tokio::test]
async fn effects_queue_until_taken() {
    let mut driver = spawn(fixture_source());
    let handle = driver.handle();

    handle.load_layout("home").await.unwrap();
    handle.interact("home", "go", "onClick").await.unwrap();
    handle.interact("home", "noisy", "onClick").await.unwrap();

    let mut effects = driver.take_effects().unwrap();
    let mut received = Vec::new();
    while let Ok(effect) = effects.try_recv() {
        received.push(effect);
    }
    assert_eq!(received.len(), 3);
    assert!(matches!(&received[0], Effect::Navigate { target } if target == "profile"));
    assert!(driver.take_effects().is_none());
}
