use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use boatrent_core::{
    errors::RentalResult,
    models::{
        boat::{Boat, NewBoat},
        booking::{Booking, BookingStatus, NewBooking},
    },
    ports::{BoatRepository, BookingRepository},
};

// Mock repositories for testing
mock! {
    pub BoatRepo {}

    #[async_trait]
    impl BoatRepository for BoatRepo {
        async fn create_boat(&self, boat: NewBoat) -> RentalResult<Boat>;

        async fn get_boat_by_id(&self, id: Uuid) -> RentalResult<Option<Boat>>;

        async fn list_boats(&self) -> RentalResult<Vec<Boat>>;
    }
}

mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn create_booking(&self, booking: NewBooking) -> RentalResult<Booking>;

        async fn get_booking_by_id(&self, id: Uuid) -> RentalResult<Option<Booking>>;

        async fn get_bookings_by_boat_id(&self, boat_id: Uuid) -> RentalResult<Vec<Booking>>;

        async fn get_active_bookings_by_boat_id(
            &self,
            boat_id: Uuid,
        ) -> RentalResult<Vec<Booking>>;

        async fn get_active_bookings_on_date(
            &self,
            boat_id: Uuid,
            date: NaiveDate,
        ) -> RentalResult<Vec<Booking>>;

        async fn update_booking_status(
            &self,
            id: Uuid,
            current: BookingStatus,
            next: BookingStatus,
        ) -> RentalResult<Booking>;
    }
}
