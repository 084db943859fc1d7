pub mod availability;
pub mod boat;
pub mod booking;
pub mod health;
