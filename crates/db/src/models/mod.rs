//! Typed rows and write payloads for the Chairside schema.

pub mod barber;
pub mod rating;
pub mod user;

pub use barber::{Barber, CreateBarber};
pub use rating::{CreateRating, NewRating, Rating, RatingChanges, ScoreCount, UpdateRating};
pub use user::{CreateUser, User};
