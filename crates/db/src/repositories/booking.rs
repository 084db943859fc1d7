use crate::models::DbBooking;
use boatrent_core::{
    errors::{RentalError, RentalResult},
    models::booking::{BookingStatus, NewBooking},
};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// SQLSTATE raised when a row violates an `EXCLUDE` constraint.
const EXCLUSION_VIOLATION: &str = "23P01";

const BOOKING_COLUMNS: &str =
    "id, boat_id, customer_name, start_date, start_time, end_date, end_time, status, created_at";

/// Inserts a `pending` booking.
///
/// The `no_overlapping_bookings` constraint makes this the authoritative
/// overlap check: a concurrent insert that slipped past the caller's own
/// check is turned into `RentalError::Conflict` here.
pub async fn create_booking(pool: &Pool<Postgres>, booking: &NewBooking) -> RentalResult<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, boat_id={}, start={}, end={}",
        id,
        booking.boat_id,
        booking.span.start(),
        booking.span.end()
    );

    let result = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        INSERT INTO bookings
            (id, boat_id, customer_name, start_date, start_time, end_date, end_time, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {}
        "#,
        BOOKING_COLUMNS
    ))
    .bind(id)
    .bind(booking.boat_id)
    .bind(&booking.customer_name)
    .bind(booking.start_date())
    .bind(booking.start_time())
    .bind(booking.end_date())
    .bind(booking.end_time())
    .bind(BookingStatus::Pending.as_str())
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => Ok(row),
        Err(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) =>
        {
            tracing::warn!(
                "Booking insert lost a race: boat_id={}, start={}, end={}",
                booking.boat_id,
                booking.span.start(),
                booking.span.end()
            );
            Err(RentalError::Conflict(format!(
                "Boat {} is already booked between {} and {}",
                booking.boat_id,
                booking.span.start(),
                booking.span.end()
            )))
        }
        Err(e) => Err(RentalError::Database(e.into())),
    }
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(&format!(
        "SELECT {} FROM bookings WHERE id = $1",
        BOOKING_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_bookings_by_boat_id(
    pool: &Pool<Postgres>,
    boat_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        SELECT {}
        FROM bookings
        WHERE boat_id = $1
        ORDER BY start_date ASC, start_time ASC
        "#,
        BOOKING_COLUMNS
    ))
    .bind(boat_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_active_bookings_by_boat_id(
    pool: &Pool<Postgres>,
    boat_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        SELECT {}
        FROM bookings
        WHERE boat_id = $1 AND status NOT IN ('cancelled', 'refunded')
        ORDER BY start_date ASC, start_time ASC
        "#,
        BOOKING_COLUMNS
    ))
    .bind(boat_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Active bookings whose date range includes `date`, not only those that
/// start or end on it.
pub async fn get_active_bookings_on_date(
    pool: &Pool<Postgres>,
    boat_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        SELECT {}
        FROM bookings
        WHERE boat_id = $1
          AND status NOT IN ('cancelled', 'refunded')
          AND start_date <= $2
          AND end_date >= $2
        ORDER BY start_date ASC, start_time ASC
        "#,
        BOOKING_COLUMNS
    ))
    .bind(boat_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Moves a booking from `current` to `next`.
///
/// The update only matches while the row still holds `current`, so two
/// concurrent changes cannot both apply against the same starting state.
pub async fn update_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    current: BookingStatus,
    next: BookingStatus,
) -> RentalResult<DbBooking> {
    tracing::debug!("Updating booking status: id={}, {} -> {}", id, current, next);

    let result = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        UPDATE bookings
        SET status = $2
        WHERE id = $1 AND status = $3
        RETURNING {}
        "#,
        BOOKING_COLUMNS
    ))
    .bind(id)
    .bind(next.as_str())
    .bind(current.as_str())
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => Ok(row),
        Ok(None) => {
            tracing::warn!(
                "Booking status update lost a race: id={}, expected {}",
                id,
                current
            );
            Err(RentalError::Conflict(format!(
                "Booking {} is no longer {}",
                id, current
            )))
        }
        Err(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) =>
        {
            tracing::warn!("Booking {} overlaps another booking as {}", id, next);
            Err(RentalError::Conflict(format!(
                "Booking {} overlaps another active booking",
                id
            )))
        }
        Err(e) => Err(RentalError::Database(e.into())),
    }
}
