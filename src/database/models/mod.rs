pub mod actor;
pub mod booking;
pub mod movie;
pub mod user;

pub use actor::Actor;
pub use booking::Booking;
pub use movie::Movie;
pub use user::{Role, User};
