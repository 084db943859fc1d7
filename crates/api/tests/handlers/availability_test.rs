use axum::http::StatusCode;
use boatrent_core::models::booking::{AvailabilityResponse, BookingStatus};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{date, sample_booking, TestContext};

#[tokio::test]
async fn test_free_slots_full_grid_for_empty_day() {
    let boat_id = Uuid::new_v4();
    let mut ctx = TestContext::new().with_boat(boat_id);

    ctx.booking_repo
        .expect_get_active_bookings_on_date()
        .with(predicate::eq(boat_id), predicate::eq(date("2025-07-20")))
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let server = ctx.into_server();
    let response = server
        .get(&format!("/api/boats/{}/availability", boat_id))
        .add_query_param("date", "2025-07-20")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let slots: Vec<String> = response.json();
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0], "08:00");
    assert_eq!(slots[1], "08:30");
    assert_eq!(slots[23], "19:30");
}

#[tokio::test]
async fn test_free_slots_exclude_booked_half_hours() {
    let boat_id = Uuid::new_v4();
    let mut ctx = TestContext::new().with_boat(boat_id);

    ctx.booking_repo
        .expect_get_active_bookings_on_date()
        .times(1)
        .returning(move |boat_id, _| {
            Ok(vec![sample_booking(
                boat_id,
                ("2025-07-20", "10:00"),
                ("2025-07-20", "11:00"),
                BookingStatus::Confirmed,
            )])
        });

    let server = ctx.into_server();
    let slots: Vec<String> = server
        .get(&format!("/api/boats/{}/availability", boat_id))
        .add_query_param("date", "2025-07-20")
        .await
        .json();

    assert_eq!(slots.len(), 22);
    assert!(!slots.contains(&"10:00".to_string()));
    assert!(!slots.contains(&"10:30".to_string()));
    assert!(slots.contains(&"11:00".to_string()));
}

#[tokio::test]
async fn test_free_slots_multi_day_rental_blocks_whole_day() {
    let boat_id = Uuid::new_v4();
    let mut ctx = TestContext::new().with_boat(boat_id);

    ctx.booking_repo
        .expect_get_active_bookings_on_date()
        .times(1)
        .returning(move |boat_id, _| {
            Ok(vec![sample_booking(
                boat_id,
                ("2025-07-18", "09:00"),
                ("2025-07-22", "17:00"),
                BookingStatus::Confirmed,
            )])
        });

    let server = ctx.into_server();
    let slots: Vec<String> = server
        .get(&format!("/api/boats/{}/availability", boat_id))
        .add_query_param("date", "2025-07-20")
        .await
        .json();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_free_slots_malformed_date() {
    let boat_id = Uuid::new_v4();
    // No repository expectations: the request must fail before storage is touched
    let server = TestContext::new().into_server();

    let response = server
        .get(&format!("/api/boats/{}/availability", boat_id))
        .add_query_param("date", "20-07-2025")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Invalid time span"));
}

#[tokio::test]
async fn test_free_slots_unknown_boat() {
    let boat_id = Uuid::new_v4();
    let server = TestContext::new().without_boat(boat_id).into_server();

    let response = server
        .get(&format!("/api/boats/{}/availability", boat_id))
        .add_query_param("date", "2025-07-20")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

async fn check(
    ctx: TestContext,
    boat_id: Uuid,
    start: (&str, &str),
    end: (&str, &str),
) -> axum_test::TestResponse {
    ctx.into_server()
        .get(&format!("/api/boats/{}/availability/check", boat_id))
        .add_query_param("start_date", start.0)
        .add_query_param("start_time", start.1)
        .add_query_param("end_date", end.0)
        .add_query_param("end_time", end.1)
        .await
}

fn with_existing_booking(boat_id: Uuid, status: BookingStatus) -> TestContext {
    let mut ctx = TestContext::new().with_boat(boat_id);

    ctx.booking_repo
        .expect_get_active_bookings_by_boat_id()
        .with(predicate::eq(boat_id))
        .times(1)
        .returning(move |boat_id| {
            Ok(vec![sample_booking(
                boat_id,
                ("2025-07-20", "10:00"),
                ("2025-07-20", "14:00"),
                status,
            )])
        });

    ctx
}

#[tokio::test]
async fn test_check_touching_span_is_available() {
    let boat_id = Uuid::new_v4();
    let ctx = with_existing_booking(boat_id, BookingStatus::Confirmed);

    let response = check(ctx, boat_id, ("2025-07-20", "14:00"), ("2025-07-20", "16:00")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<AvailabilityResponse>(),
        AvailabilityResponse { available: true }
    );
}

#[tokio::test]
async fn test_check_overlapping_span_is_unavailable() {
    let boat_id = Uuid::new_v4();
    let ctx = with_existing_booking(boat_id, BookingStatus::Pending);

    let response = check(ctx, boat_id, ("2025-07-20", "13:00"), ("2025-07-20", "15:00")).await;

    assert_eq!(
        response.json::<AvailabilityResponse>(),
        AvailabilityResponse { available: false }
    );
}

#[tokio::test]
async fn test_check_ignores_cancelled_booking() {
    let boat_id = Uuid::new_v4();
    let ctx = with_existing_booking(boat_id, BookingStatus::Cancelled);

    let response = check(ctx, boat_id, ("2025-07-20", "11:00"), ("2025-07-20", "12:00")).await;

    assert_eq!(
        response.json::<AvailabilityResponse>(),
        AvailabilityResponse { available: true }
    );
}

#[tokio::test]
async fn test_check_reversed_span() {
    let boat_id = Uuid::new_v4();
    let server_ctx = TestContext::new();

    let response = check(
        server_ctx,
        boat_id,
        ("2025-07-20", "15:00"),
        ("2025-07-20", "13:00"),
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}
