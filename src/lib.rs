//! Mediroute — routes natural-language hospital operations requests to
//! specialist service desks via LLM function calling.
//!
//! A free-text command goes to a hosted generative model configured
//! with four function declarations (registration, appointments,
//! medical records, pharmacy). The model returns at most one function
//! call; the matching service-desk workspace opens with simulated
//! data. Everything behind the desks is invented — this is a routing
//! demonstration, not a hospital system.

pub mod api;
pub mod config;
pub mod core_state;
pub mod desks;
pub mod models;
pub mod routing;
pub mod session;
