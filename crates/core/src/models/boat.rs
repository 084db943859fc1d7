use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{RentalError, RentalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoat {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoatRequest {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

impl CreateBoatRequest {
    pub fn validate(self) -> RentalResult<NewBoat> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RentalError::Validation("name must not be empty".to_string()));
        }

        if self.capacity < 1 {
            return Err(RentalError::Validation(format!(
                "capacity must be at least 1, got {}",
                self.capacity
            )));
        }

        let location = self
            .location
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty());

        Ok(NewBoat {
            name,
            location,
            capacity: self.capacity,
        })
    }
}
