use std::sync::Arc;

use tokio::sync::oneshot;

use super::fake_api::{user, FakeApi};
use crate::error::UsersError;
use crate::sync::{Completion, SyncController, SyncEvent};

fn ids(controller: &SyncController) -> Vec<i64> {
    controller.users().iter().map(|u| u.id).collect()
}

async fn loaded_controller(api: &Arc<FakeApi>) -> SyncController {
    let mut controller = SyncController::new(api.clone());
    controller.load().await.unwrap();
    controller
}

fn two_users() -> Arc<FakeApi> {
    FakeApi::with_users(vec![user(1, "A", "a@x.com"), user(2, "B", "b@x.com")])
}

#[tokio::test]
async fn load_reverses_remote_order() {
    let api = two_users();
    let mut controller = SyncController::new(api.clone());

    let event = controller.load().await.unwrap();

    assert_eq!(event, SyncEvent::Loaded { count: 2 });
    assert_eq!(ids(&controller), vec![2, 1]);
    assert_eq!(controller.users()[0].name, "B");
}

#[tokio::test]
async fn failed_load_keeps_empty_state() {
    let api = two_users();
    api.set_failing(true);
    let mut controller = SyncController::new(api.clone());

    let err = controller.load().await.unwrap_err();

    assert!(err.is_remote_failure());
    assert!(controller.users().is_empty());
    assert_eq!(controller.in_flight(), 0);
}

#[tokio::test]
async fn create_prepends_and_clears_draft() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    controller.draft_mut().name = "C".to_string();
    controller.draft_mut().email = "c@x.com".to_string();

    let event = controller.create().await.unwrap();

    assert_eq!(event, SyncEvent::Created(user(3, "C", "c@x.com")));
    assert_eq!(ids(&controller), vec![3, 2, 1]);
    assert!(controller.draft().is_empty());
    assert!(api.requests().contains(&"POST /api/go/users C|c@x.com".to_string()));
}

#[tokio::test]
async fn create_sends_empty_fields_unchecked() {
    let api = FakeApi::with_users(Vec::new());
    let mut controller = SyncController::new(api.clone());

    controller.create().await.unwrap();

    assert_eq!(api.requests(), vec!["POST /api/go/users |".to_string()]);
    assert_eq!(controller.users().len(), 1);
}

#[tokio::test]
async fn failed_create_keeps_draft_and_state() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    controller.draft_mut().name = "C".to_string();
    controller.draft_mut().email = "c@x.com".to_string();
    api.set_failing(true);

    assert!(controller.create().await.is_err());

    assert_eq!(ids(&controller), vec![2, 1]);
    assert_eq!(controller.draft().name, "C");
    assert_eq!(controller.draft().email, "c@x.com");
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    controller.draft_mut().name = "C".to_string();
    controller.draft_mut().email = "c@x.com".to_string();
    controller.create().await.unwrap();

    let event = controller.delete(2).await.unwrap();

    assert_eq!(event, SyncEvent::Deleted { id: 2, removed: true });
    assert_eq!(ids(&controller), vec![3, 1]);
}

#[tokio::test]
async fn second_delete_of_same_id_is_a_local_no_op() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;

    controller.delete(1).await.unwrap();
    let before = controller.users().to_vec();

    // The service answers 404 the second time; either way nothing changes
    assert!(controller.delete(1).await.is_err());
    assert_eq!(controller.users(), before.as_slice());
}

#[tokio::test]
async fn successful_delete_of_unknown_id_leaves_state() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;

    let event = controller
        .apply(Completion::Deleted { id: 42, result: Ok(()) })
        .unwrap();

    assert_eq!(event, SyncEvent::Deleted { id: 42, removed: false });
    assert_eq!(ids(&controller), vec![2, 1]);
}

#[tokio::test]
async fn failed_delete_keeps_state() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    api.set_failing(true);

    assert!(controller.delete(2).await.is_err());
    assert_eq!(ids(&controller), vec![2, 1]);
}

#[tokio::test]
async fn failed_reload_keeps_previous_state() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    let before = controller.users().to_vec();

    let result = controller.apply(Completion::Loaded(Err(UsersError::ApiError(
        "HTTP error: 502 Bad Gateway".to_string(),
    ))));

    assert!(result.is_err());
    assert_eq!(controller.users(), before.as_slice());
}

#[tokio::test]
async fn spawned_requests_are_counted_until_applied() {
    let api = two_users();
    let mut controller = SyncController::new(api.clone());

    let (tx, rx) = oneshot::channel();
    controller.spawn_load(move |completion| {
        let _ = tx.send(completion);
    });
    assert_eq!(controller.in_flight(), 1);
    assert!(controller.users().is_empty());

    let completion = rx.await.unwrap();
    controller.apply(completion).unwrap();

    assert_eq!(controller.in_flight(), 0);
    assert_eq!(ids(&controller), vec![2, 1]);
}

#[tokio::test]
async fn completions_apply_in_arrival_order() {
    let api = two_users();
    let mut controller = loaded_controller(&api).await;
    controller.draft_mut().name = "C".to_string();
    controller.draft_mut().email = "c@x.com".to_string();

    let (create_tx, create_rx) = oneshot::channel();
    controller.spawn_create(move |c| {
        let _ = create_tx.send(c);
    });
    let (delete_tx, delete_rx) = oneshot::channel();
    controller.spawn_delete(1, move |c| {
        let _ = delete_tx.send(c);
    });
    assert_eq!(controller.in_flight(), 2);

    // The delete response lands first
    controller.apply(delete_rx.await.unwrap()).unwrap();
    assert_eq!(ids(&controller), vec![2]);

    controller.apply(create_rx.await.unwrap()).unwrap();
    assert_eq!(ids(&controller), vec![3, 2]);
    assert_eq!(controller.in_flight(), 0);
}

#[tokio::test]
async fn spawned_create_uses_draft_at_dispatch_time() {
    let api = FakeApi::with_users(Vec::new());
    let mut controller = SyncController::new(api.clone());
    controller.draft_mut().name = "Ada".to_string();
    controller.draft_mut().email = "ada@x.com".to_string();

    let (tx, rx) = oneshot::channel();
    controller.spawn_create(move |c| {
        let _ = tx.send(c);
    });
    controller.draft_mut().name.push_str(" Lovelace");

    let event = controller.apply(rx.await.unwrap()).unwrap();
    assert_eq!(event, SyncEvent::Created(user(1, "Ada", "ada@x.com")));
    assert!(controller.draft().is_empty());
}
