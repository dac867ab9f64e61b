//! # Glowbook Core
//!
//! Pure booking rules for the Glowbook storefront: the slot catalog, day-granular
//! booking dates, lead-time and reschedule policy values, and the
//! [`SlotAvailabilityEngine`](availability::SlotAvailabilityEngine) that decides which
//! slots a customer may pick.
//!
//! Nothing in this crate reads the system clock on its own. Every engine operation
//! takes the reference instant as an argument; callers obtain it from a
//! [`Clock`](clock::Clock).

/// Slot eligibility and selection validation
pub mod availability;
/// Time sources injected by callers
pub mod clock;
/// Error taxonomy shared by all crates
pub mod errors;
/// Mock implementations for testing
pub mod mock;
/// Value types: slots, catalogs, dates and policies
pub mod models;
