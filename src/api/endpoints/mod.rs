//! Endpoint handlers, grouped by concern.

pub mod command;
pub mod desks;
pub mod health;
pub mod session;
