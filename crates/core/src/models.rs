pub mod booking;
pub mod booking_date;
pub mod policy;
pub mod time_slot;
