use crate::shell::http::router;
use crate::tests::fixtures::commands::register_essay::RegisterEssayBuilder;
use crate::tests::fixtures::http::{get, json_of};
use crate::tests::fixtures::state::make_signed_in_state;
use chrono::NaiveDate;
use tower::ServiceExt;

#[tokio::test]
async fn dashboard_reflects_registered_essays() {
    let state = make_signed_in_state();
    let history = [
        ("2025-09-29", [160, 140, 160, 140, 140]),
        ("2025-10-06", [160, 180, 160, 160, 160]),
        ("2025-10-13", [180, 180, 160, 160, 180]),
        ("2025-10-20", [200, 180, 180, 160, 180]),
    ];

    for (index, (date, scores)) in history.into_iter().enumerate() {
        let command = RegisterEssayBuilder::new()
            .essay_id(format!("essay-{index}"))
            .date(date.parse::<NaiveDate>().unwrap())
            .scores(scores)
            .total_score(None)
            .build();
        state.register_essay.handle(command).await.unwrap();
    }

    let response = router(state.clone())
        .oneshot(get("/api/analytics/dashboard?period=15days"))
        .await
        .unwrap();
    let dashboard = json_of(response).await;

    assert_eq!(dashboard["essayCount"], 3);
    assert_eq!(dashboard["averageScore"], 860);
    assert_eq!(dashboard["latestScore"], 900);
    assert_eq!(dashboard["goal"]["currentAverage"], 830);
    assert_eq!(dashboard["trend"]["trend"], "up");
    assert_eq!(dashboard["trend"]["hasPrevious"], true);
    assert_eq!(dashboard["ranking"]["weakest"][0]["competency"], "c4");
    assert_eq!(dashboard["ranking"]["strongest"][0]["competency"], "c1");

    let chart: Vec<u64> = dashboard["chart"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["value"].as_u64().unwrap())
        .collect();
    assert_eq!(chart, vec![820, 860, 900]);

    let response = router(state).oneshot(get("/api/essays")).await.unwrap();
    let essays = json_of(response).await;
    assert_eq!(essays[0]["id"], "essay-3");
    assert_eq!(essays[3]["id"], "essay-0");
}
