//! # BoatRent Core
//!
//! Domain types shared by the BoatRent crates, plus the availability rules
//! that decide whether a boat can be rented for a given span.
//!
//! - **availability**: interval model, overlap checker, slot enumerator
//! - **models**: boats, bookings and their request/response shapes
//! - **ports**: repository traits implemented by the storage layer
//! - **errors**: the `RentalError` type every layer reports through

pub mod availability;
pub mod errors;
pub mod format;
pub mod models;
pub mod ports;
