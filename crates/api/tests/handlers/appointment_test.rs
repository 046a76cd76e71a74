use axum::http::StatusCode;
use fitslot_db::mock::repositories::MockAppointmentRepo;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, booking, server_with_store};

#[test_log::test(tokio::test)]
async fn test_create_appointment_returns_created() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/appointments")
        .json(&booking(1, 1, "2030-07-08T20:00:00Z", "2030-07-08T20:30:00Z"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["user_id"], json!(1));
    assert_eq!(body["trainer_id"], json!(1));
    assert_eq!(body["starts_at"], json!("2030-07-08T12:00:00-08:00"));
    assert_eq!(body["ends_at"], json!("2030-07-08T12:30:00-08:00"));
}

#[rstest]
#[case::zero_user(
    booking(0, 1, "2030-07-08T08:00:00-08:00", "2030-07-08T08:30:00-08:00"),
    "UserID must be greater than 0"
)]
#[case::weekend(
    booking(1, 1, "2030-07-13T08:00:00-08:00", "2030-07-13T08:30:00-08:00"),
    "Appointment must be scheduled between Monday and Friday PST"
)]
#[case::before_opening(
    booking(1, 1, "2030-07-08T07:30:00-08:00", "2030-07-08T08:00:00-08:00"),
    "Appointment must be scheduled between 8am and 5pm PST"
)]
#[case::one_hour(
    booking(1, 1, "2030-07-08T08:00:00-08:00", "2030-07-08T09:00:00-08:00"),
    "Appointment must be scheduled in 30-minute increments"
)]
#[case::in_the_past(
    booking(1, 1, "2020-07-13T08:00:00-08:00", "2020-07-13T08:30:00-08:00"),
    "Appointments must be scheduled at least 1 hour in advance"
)]
#[case::malformed(
    booking(1, 1, "next monday", "2030-07-08T08:30:00-08:00"),
    "starts_at must be an RFC3339 timestamp"
)]
#[tokio::test]
async fn test_create_appointment_rejects_invalid_input(
    #[case] payload: Value,
    #[case] message: &str,
) {
    let ctx = TestContext::new().await;

    let response = ctx.server.post("/appointments").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": message }));
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_rejects_undecodable_body_as_json() {
    let ctx = TestContext::new().await;

    // user_id must be an integer
    let wrong_type = ctx
        .server
        .post("/appointments")
        .json(&json!({
            "user_id": "one",
            "trainer_id": 1,
            "starts_at": "2030-07-08T08:00:00-08:00",
            "ends_at": "2030-07-08T08:30:00-08:00"
        }))
        .await;
    wrong_type.assert_status(StatusCode::BAD_REQUEST);
    assert!(wrong_type.json::<Value>()["error"].is_string());

    let missing_field = ctx
        .server
        .post("/appointments")
        .json(&json!({ "user_id": 1 }))
        .await;
    missing_field.assert_status(StatusCode::BAD_REQUEST);
    assert!(missing_field.json::<Value>()["error"].is_string());

    let not_json = ctx
        .server
        .post("/appointments")
        .text("user_id=1")
        .content_type("application/json")
        .await;
    not_json.assert_status(StatusCode::BAD_REQUEST);
    assert!(not_json.json::<Value>()["error"].is_string());
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_conflicts() {
    let ctx = TestContext::new().await;
    let (start, end) = ("2030-07-08T08:00:00-08:00", "2030-07-08T08:30:00-08:00");
    ctx.book(1, 1, start, end).await;

    for payload in [booking(2, 1, start, end), booking(1, 2, start, end)] {
        let response = ctx.server.post("/appointments").json(&payload).await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Timeslot is not available" })
        );
    }

    // The adjacent slot is still free
    ctx.book(2, 1, "2030-07-08T08:30:00-08:00", "2030-07-08T09:00:00-08:00")
        .await;
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_hides_storage_details() {
    let mut store = MockAppointmentRepo::new();
    store
        .expect_count_conflicts()
        .returning(|_, _, _, _| Err(eyre::eyre!("disk I/O error")));
    let server = server_with_store(store);

    let response = server
        .post("/appointments")
        .json(&booking(1, 1, "2030-07-08T08:00:00-08:00", "2030-07-08T08:30:00-08:00"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal server error" })
    );
}

#[test_log::test(tokio::test)]
async fn test_list_trainer_appointments() {
    let ctx = TestContext::new().await;
    ctx.book(1, 1, "2030-07-09T08:00:00-08:00", "2030-07-09T08:30:00-08:00")
        .await;
    ctx.book(2, 1, "2030-07-08T10:00:00-08:00", "2030-07-08T10:30:00-08:00")
        .await;
    ctx.book(3, 2, "2030-07-08T10:00:00-08:00", "2030-07-08T10:30:00-08:00")
        .await;

    let response = ctx.server.get("/trainers/1/appointments").await;

    response.assert_status_ok();
    let body = response.json::<Vec<Value>>();
    let users: Vec<i64> = body.iter().map(|a| a["user_id"].as_i64().unwrap()).collect();
    assert_eq!(users, vec![2, 1]);
}

#[test_log::test(tokio::test)]
async fn test_list_trainer_appointments_in_range() {
    let ctx = TestContext::new().await;
    ctx.book(1, 1, "2030-07-08T08:00:00-08:00", "2030-07-08T08:30:00-08:00")
        .await;
    ctx.book(2, 1, "2030-07-10T08:00:00-08:00", "2030-07-10T08:30:00-08:00")
        .await;

    let response = ctx
        .server
        .get("/trainers/1/appointments")
        .add_query_param("starts_at", "2030-07-09T00:00:00-08:00")
        .add_query_param("ends_at", "2030-07-11T00:00:00-08:00")
        .await;

    response.assert_status_ok();
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["user_id"], json!(2));
    assert_eq!(body[0]["starts_at"], json!("2030-07-10T08:00:00-08:00"));
}

#[test_log::test(tokio::test)]
async fn test_list_trainer_appointments_rejects_bad_ranges() {
    let ctx = TestContext::new().await;

    let only_start = ctx
        .server
        .get("/trainers/1/appointments")
        .add_query_param("starts_at", "2030-07-09T00:00:00Z")
        .await;
    only_start.assert_status(StatusCode::BAD_REQUEST);

    let too_long = ctx
        .server
        .get("/trainers/1/appointments")
        .add_query_param("starts_at", "2030-07-01T00:00:00Z")
        .add_query_param("ends_at", "2030-12-01T00:00:00Z")
        .await;
    too_long.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        too_long.json::<Value>(),
        json!({ "error": "Timeframe must be 90 days or lower" })
    );

    let bad_trainer = ctx.server.get("/trainers/0/appointments").await;
    bad_trainer.assert_status(StatusCode::BAD_REQUEST);
}
