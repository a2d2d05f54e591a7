//! Data access repositories.
//!
//! Stateless structs grouping the queries for one table. Methods take the
//! pool explicitly; nothing here holds connection state.

pub mod barber_repo;
pub mod rating_repo;
pub mod user_repo;

pub use barber_repo::BarberRepo;
pub use rating_repo::RatingRepo;
pub use user_repo::UserRepo;
