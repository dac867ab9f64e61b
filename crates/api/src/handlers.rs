pub mod availability;
pub mod policy;
