//! Service layer: booking rules on top of the `models` entities.
//! - Availability evaluation, removal guard and single-field updates.
//! - Registration, lookups and reservations for hotels and customers.
//! - Every protected operation takes the caller's `Principal` explicitly.

pub mod errors;
pub mod auth;
pub mod pagination;
pub mod accounts;
pub mod availability;
pub mod guard;
pub mod updates;
pub mod hotel_service;
pub mod customer_service;
pub mod room_service;
pub mod reservation_service;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use guard::GuardOutcome;
