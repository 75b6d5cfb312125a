use crate::shell::http::router;
use crate::shell::state::{AppState, InMemoryStores};
use crate::tests::fixtures::essays::anchor_date;
use crate::tests::fixtures::http::{get, json_of, post_json};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn booking_takes_the_slot_off_the_board() {
    let state = AppState::new(InMemoryStores::seeded(), anchor_date);
    state.session.open();
    let app = router(state);

    let board = json_of(
        app.clone()
            .oneshot(get("/api/appointments/availability?date=2025-10-28"))
            .await
            .unwrap(),
    )
    .await;
    assert!(board["slots"].as_array().unwrap().iter().all(|s| s["booked"] == false));

    let body = json!({ "date": "2025-10-28", "timeSlot": "16:00" });
    let response = app
        .clone()
        .oneshot(post_json("/api/appointments", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let booked = json_of(response).await;

    let response = app
        .clone()
        .oneshot(post_json("/api/appointments", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let board = json_of(
        app.clone()
            .oneshot(get("/api/appointments/availability?date=2025-10-28"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(board["slots"][6]["timeSlot"], "16:00");
    assert_eq!(board["slots"][6]["booked"], true);

    let upcoming = json_of(
        app.clone()
            .oneshot(get("/api/appointments/upcoming"))
            .await
            .unwrap(),
    )
    .await;
    let dates: Vec<&str> = upcoming
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-10-23", "2025-10-25", "2025-10-28"]);

    let response = app
        .oneshot(get(&format!("/api/appointments/{}", booked["id"].as_str().unwrap())))
        .await
        .unwrap();
    assert_eq!(json_of(response).await, booked);
}
