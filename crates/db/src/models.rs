use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use boatrent_core::{
    errors::RentalError,
    models::{boat::Boat, booking::Booking},
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBoat {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbBoat> for Boat {
    fn from(row: DbBoat) -> Self {
        Boat {
            id: row.id,
            name: row.name,
            location: row.location,
            capacity: row.capacity,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub boat_id: Uuid,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbBooking> for Booking {
    type Error = RentalError;

    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: row.id,
            boat_id: row.boat_id,
            customer_name: row.customer_name,
            start_date: row.start_date,
            start_time: row.start_time,
            end_date: row.end_date,
            end_time: row.end_time,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}
