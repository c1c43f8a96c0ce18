//! Mock operational desks — one module per routed workspace.
//!
//! Each desk is a small pure state machine: it validates a submission
//! and fabricates a plausible outcome. There is no persistence and no
//! cross-desk shared state; the pharmacy inventory is the only state
//! that survives between submissions (held in `CoreState`).

pub mod appointment;
pub mod pharmacy;
pub mod records;
pub mod registration;
