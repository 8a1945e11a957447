//! Repository implementations for database access
//!
//! Each repository borrows the pool and shapes rows for its callers:
//! single-row lookups yield `Option`, listings yield a `Vec`. Failed
//! statements propagate as [`crate::error::DbError`].

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{PropertyRepo, PropertyWithRating};
pub use reservations::{GuestReservation, ReservationRepo};
pub use users::UserRepo;
