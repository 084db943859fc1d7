//! Persistence seams. Request handlers reach storage only through these
//! traits; the PostgreSQL implementation lives in `boatrent-db`.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    errors::RentalResult,
    models::{
        boat::{Boat, NewBoat},
        booking::{Booking, BookingStatus, NewBooking},
    },
};

#[async_trait]
pub trait BoatRepository: Send + Sync {
    async fn create_boat(&self, boat: NewBoat) -> RentalResult<Boat>;

    async fn get_boat_by_id(&self, id: Uuid) -> RentalResult<Option<Boat>>;

    async fn list_boats(&self) -> RentalResult<Vec<Boat>>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a `pending` booking.
    ///
    /// Implementations must reject the insert with `RentalError::Conflict`
    /// when an active booking of the same boat overlaps it, even if the
    /// caller's own check passed moments earlier.
    async fn create_booking(&self, booking: NewBooking) -> RentalResult<Booking>;

    async fn get_booking_by_id(&self, id: Uuid) -> RentalResult<Option<Booking>>;

    async fn get_bookings_by_boat_id(&self, boat_id: Uuid) -> RentalResult<Vec<Booking>>;

    /// All active bookings of a boat.
    async fn get_active_bookings_by_boat_id(&self, boat_id: Uuid) -> RentalResult<Vec<Booking>>;

    /// Active bookings of a boat whose date range includes `date`.
    async fn get_active_bookings_on_date(
        &self,
        boat_id: Uuid,
        date: NaiveDate,
    ) -> RentalResult<Vec<Booking>>;

    /// Moves a booking from `current` to `next` in one conditional write.
    ///
    /// Fails with `RentalError::Conflict` when the stored status is no longer
    /// `current`, or when the write would overlap another active booking.
    async fn update_booking_status(
        &self,
        id: Uuid,
        current: BookingStatus,
        next: BookingStatus,
    ) -> RentalResult<Booking>;
}
