use crate::modules::reservations::use_cases::list_reservations_by_user::handler::Projector;
use crate::shell::http::router;
use crate::shell::workers::MembershipSyncWorker;
use crate::tests::fixtures::state::make_test_app;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::time::Duration;
use tower::ServiceExt;

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post_json(uri: String, body: String) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn mirrors_reservations_by_user_after_the_worker_runs() {
    let test_app = make_test_app();
    let worker = MembershipSyncWorker::new(
        test_app.outbox.clone(),
        Projector::new(
            "membership-index",
            test_app.projections.clone(),
            test_app.projections.clone(),
        ),
        100,
        Duration::from_millis(10),
    );
    let app = router(test_app.state);

    let mut event_ids = Vec::new();
    for capacity in [1, 2] {
        let (status, json) = send(
            &app,
            post_json("/events".into(), format!(r#"{{"capacity":{capacity}}}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        event_ids.push(json["event_id"].as_str().unwrap().to_string());
    }

    for event_id in &event_ids {
        let (status, _) = send(
            &app,
            post_json(format!("/events/{event_id}/rsvp"), r#"{"user_id":"u-1"}"#.into()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, json) = send(
        &app,
        post_json(format!("/events/{}/rsvp", event_ids[0]), r#"{"user_id":"u-2"}"#.into()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], "Full");

    // Nothing is mirrored until the worker relays the outbox.
    let (_, listed) = send(
        &app,
        Request::get("/users/u-1/reservations").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(listed, serde_json::json!([]));

    assert_eq!(worker.run_once().await.unwrap(), 2);
    let (status, listed) = send(
        &app,
        Request::get("/users/u-1/reservations").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let mut mirrored: Vec<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["event_id"].as_str().unwrap().to_string())
        .collect();
    mirrored.sort();
    let mut expected = event_ids.clone();
    expected.sort();
    assert_eq!(mirrored, expected);

    let (status, _) = send(
        &app,
        post_json(format!("/events/{}/cancel", event_ids[1]), r#"{"user_id":"u-1"}"#.into()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(worker.run_once().await.unwrap(), 1);

    let (_, listed) = send(
        &app,
        Request::get("/users/u-1/reservations").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["event_id"], event_ids[0].as_str());

    // The roster stays authoritative for the capacity decision.
    let (status, roster) = send(
        &app,
        Request::get(format!("/events/{}", event_ids[0]))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster["attendees"], serde_json::json!(["u-1"]));
}
