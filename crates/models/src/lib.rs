//! Entities, closed enums and field validation for the booking store.

pub mod errors;
pub mod db;
pub mod enums;
pub mod validate;
pub mod address;
pub mod hotel;
pub mod customer;
pub mod room;
pub mod reservation;

pub use address::Address;
pub use enums::{HotelType, ReservationStatus, Role, RoomType};

#[cfg(test)]
mod tests;
