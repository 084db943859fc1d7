use axum::http::StatusCode;
use boatrent_core::{
    errors::RentalError,
    models::booking::{Booking, BookingStatus, NewBooking},
};
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{date, sample_booking, time, TestContext};

fn booking_payload(boat_id: Uuid, start: (&str, &str), end: (&str, &str)) -> Value {
    json!({
        "boat_id": boat_id,
        "customer_name": "Ahab",
        "start_date": start.0,
        "start_time": start.1,
        "end_date": end.0,
        "end_time": end.1,
    })
}

fn stored(booking: NewBooking) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        boat_id: booking.boat_id,
        customer_name: booking.customer_name.clone(),
        start_date: booking.start_date(),
        start_time: booking.start_time(),
        end_date: booking.end_date(),
        end_time: booking.end_time(),
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    }
}

/// Boat exists and currently holds a confirmed 10:00-14:00 booking.
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
async fn test_create_booking_back_to_back() {
    let boat_id = Uuid::new_v4();
    let mut ctx = with_existing_booking(boat_id, BookingStatus::Confirmed);

    ctx.booking_repo
        .expect_create_booking()
        .withf(move |booking: &NewBooking| {
            booking.boat_id == boat_id
                && booking.customer_name == "Ahab"
                && booking.start_time() == time("14:00")
                && booking.end_time() == time("16:00")
        })
        .times(1)
        .returning(|booking| Ok(stored(booking)));

    let server = ctx.into_server();
    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            boat_id,
            ("2025-07-20", "14:00"),
            ("2025-07-20", "16:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let booking: Booking = response.json();
    assert_eq!(booking.boat_id, boat_id);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.start_date, date("2025-07-20"));
    assert_eq!(booking.start_time, time("14:00"));
}

#[tokio::test]
async fn test_create_booking_overlap_is_conflict() {
    let boat_id = Uuid::new_v4();
    // create_booking has no expectation: it must not be reached
    let ctx = with_existing_booking(boat_id, BookingStatus::Confirmed);

    let server = ctx.into_server();
    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            boat_id,
            ("2025-07-20", "08:00"),
            ("2025-07-20", "18:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("10:00"));
}

#[tokio::test]
async fn test_create_booking_ignores_cancelled_overlap() {
    let boat_id = Uuid::new_v4();
    let mut ctx = with_existing_booking(boat_id, BookingStatus::Cancelled);

    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|booking| Ok(stored(booking)));

    let server = ctx.into_server();
    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            boat_id,
            ("2025-07-20", "10:00"),
            ("2025-07-20", "14:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_booking_lost_race_is_conflict() {
    let boat_id = Uuid::new_v4();
    let mut ctx = TestContext::new().with_boat(boat_id);

    ctx.booking_repo
        .expect_get_active_bookings_by_boat_id()
        .times(1)
        .returning(|_| Ok(vec![]));
    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|_| Err(RentalError::Conflict("already booked".to_string())));

    let server = ctx.into_server();
    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            boat_id,
            ("2025-07-20", "10:00"),
            ("2025-07-20", "11:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_booking_blank_customer() {
    let server = TestContext::new().into_server();

    let mut payload = booking_payload(
        Uuid::new_v4(),
        ("2025-07-20", "10:00"),
        ("2025-07-20", "11:00"),
    );
    payload["customer_name"] = json!("  ");

    let response = server.post("/api/bookings").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_invalid_span() {
    let server = TestContext::new().into_server();

    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            Uuid::new_v4(),
            ("2025-07-20", "11:00"),
            ("2025-07-20", "11:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_booking_unknown_boat() {
    let boat_id = Uuid::new_v4();
    let server = TestContext::new().without_boat(boat_id).into_server();

    let response = server
        .post("/api/bookings")
        .json(&booking_payload(
            boat_id,
            ("2025-07-20", "10:00"),
            ("2025-07-20", "11:00"),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_booking() {
    let boat_id = Uuid::new_v4();
    let booking = sample_booking(
        boat_id,
        ("2025-07-20", "10:00"),
        ("2025-07-20", "11:00"),
        BookingStatus::Confirmed,
    );
    let booking_id = booking.id;

    let mut ctx = TestContext::new();
    let returned = booking.clone();
    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(booking_id))
        .times(1)
        .returning(move |_| Ok(Some(returned.clone())));

    let server = ctx.into_server();
    let response = server.get(&format!("/api/bookings/{}", booking_id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Booking>(), booking);
}

#[tokio::test]
async fn test_get_booking_not_found() {
    let mut ctx = TestContext::new();
    ctx.booking_repo
        .expect_get_booking_by_id()
        .times(1)
        .returning(|_| Ok(None));

    let server = ctx.into_server();
    let response = server.get(&format!("/api/bookings/{}", Uuid::new_v4())).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

fn with_booking_in_status(booking_id: Uuid, status: BookingStatus) -> TestContext {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(booking_id))
        .times(1)
        .returning(move |id| {
            let mut booking = sample_booking(
                Uuid::new_v4(),
                ("2025-07-20", "10:00"),
                ("2025-07-20", "11:00"),
                status,
            );
            booking.id = id;
            Ok(Some(booking))
        });

    ctx
}

#[tokio::test]
async fn test_confirm_pending_booking() {
    let booking_id = Uuid::new_v4();
    let mut ctx = with_booking_in_status(booking_id, BookingStatus::Pending);

    ctx.booking_repo
        .expect_update_booking_status()
        .with(
            predicate::eq(booking_id),
            predicate::eq(BookingStatus::Pending),
            predicate::eq(BookingStatus::Confirmed),
        )
        .times(1)
        .returning(|id, _, status| {
            let mut booking = sample_booking(
                Uuid::new_v4(),
                ("2025-07-20", "10:00"),
                ("2025-07-20", "11:00"),
                status,
            );
            booking.id = id;
            Ok(booking)
        });

    let server = ctx.into_server();
    let response = server
        .put(&format!("/api/bookings/{}/status", booking_id))
        .json(&json!({ "status": "confirmed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let booking: Booking = response.json();
    assert_eq!(booking.id, booking_id);
    assert_eq!(booking.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_status_changed_concurrently_is_conflict() {
    let booking_id = Uuid::new_v4();
    let mut ctx = with_booking_in_status(booking_id, BookingStatus::Pending);

    // The row was cancelled after it was read, so the conditional write misses
    ctx.booking_repo
        .expect_update_booking_status()
        .with(
            predicate::eq(booking_id),
            predicate::eq(BookingStatus::Pending),
            predicate::eq(BookingStatus::Confirmed),
        )
        .times(1)
        .returning(|id, current, _| {
            Err(RentalError::Conflict(format!(
                "Booking {} is no longer {}",
                id, current
            )))
        });

    let server = ctx.into_server();
    let response = server
        .put(&format!("/api/bookings/{}/status", booking_id))
        .json(&json!({ "status": "confirmed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("no longer pending"));
}

#[tokio::test]
async fn test_cancelled_booking_cannot_be_revived() {
    let booking_id = Uuid::new_v4();
    // update_booking_status has no expectation: it must not be reached
    let ctx = with_booking_in_status(booking_id, BookingStatus::Cancelled);

    let server = ctx.into_server();
    let response = server
        .put(&format!("/api/bookings/{}/status", booking_id))
        .json(&json!({ "status": "confirmed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let server = TestContext::new().into_server();

    let response = server
        .put(&format!("/api/bookings/{}/status", Uuid::new_v4()))
        .json(&json!({ "status": "archived" }))
        .await;

    assert!(response.status_code().is_client_error());
}
