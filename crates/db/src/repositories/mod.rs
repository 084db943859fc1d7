pub mod boat;
pub mod booking;
