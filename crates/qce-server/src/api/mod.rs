//! API endpoint handlers.

pub mod health;
pub mod index;
pub mod reserved;
pub mod users;
