//! PostgreSQL-backed implementation of the repository ports.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use boatrent_core::{
    errors::RentalResult,
    models::{
        boat::{Boat, NewBoat},
        booking::{Booking, BookingStatus, NewBooking},
    },
    ports::{BoatRepository, BookingRepository},
};

use crate::{models::DbBooking, repositories, DbPool};

/// Repository handle shared by all request handlers. Cloning is cheap: the
/// pool is reference counted.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn into_bookings(rows: Vec<DbBooking>) -> RentalResult<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

#[async_trait]
impl BoatRepository for PgStore {
    async fn create_boat(&self, boat: NewBoat) -> RentalResult<Boat> {
        let row = repositories::boat::create_boat(
            &self.pool,
            &boat.name,
            boat.location.as_deref(),
            boat.capacity,
        )
        .await?;

        Ok(row.into())
    }

    async fn get_boat_by_id(&self, id: Uuid) -> RentalResult<Option<Boat>> {
        let row = repositories::boat::get_boat_by_id(&self.pool, id).await?;
        Ok(row.map(Boat::from))
    }

    async fn list_boats(&self) -> RentalResult<Vec<Boat>> {
        let rows = repositories::boat::list_boats(&self.pool).await?;
        Ok(rows.into_iter().map(Boat::from).collect())
    }
}

#[async_trait]
impl BookingRepository for PgStore {
    async fn create_booking(&self, booking: NewBooking) -> RentalResult<Booking> {
        let row = repositories::booking::create_booking(&self.pool, &booking).await?;
        row.try_into()
    }

    async fn get_booking_by_id(&self, id: Uuid) -> RentalResult<Option<Booking>> {
        let row = repositories::booking::get_booking_by_id(&self.pool, id).await?;
        row.map(Booking::try_from).transpose()
    }

    async fn get_bookings_by_boat_id(&self, boat_id: Uuid) -> RentalResult<Vec<Booking>> {
        let rows = repositories::booking::get_bookings_by_boat_id(&self.pool, boat_id).await?;
        into_bookings(rows)
    }

    async fn get_active_bookings_by_boat_id(&self, boat_id: Uuid) -> RentalResult<Vec<Booking>> {
        let rows =
            repositories::booking::get_active_bookings_by_boat_id(&self.pool, boat_id).await?;
        into_bookings(rows)
    }

    async fn get_active_bookings_on_date(
        &self,
        boat_id: Uuid,
        date: NaiveDate,
    ) -> RentalResult<Vec<Booking>> {
        let rows =
            repositories::booking::get_active_bookings_on_date(&self.pool, boat_id, date).await?;
        into_bookings(rows)
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        current: BookingStatus,
        next: BookingStatus,
    ) -> RentalResult<Booking> {
        let row =
            repositories::booking::update_booking_status(&self.pool, id, current, next).await?;
        Booking::try_from(row)
    }
}
