//! Booking availability: interval construction, overlap checks and free-slot
//! enumeration. Everything here is synchronous and side-effect free.

pub mod interval;
pub mod overlap;
pub mod slots;

pub use interval::{BookingInterval, TimeSpan};
pub use overlap::{conflicts, is_available};
pub use slots::SlotGrid;
