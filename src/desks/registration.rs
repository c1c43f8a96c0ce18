//! Patient registration desk (revenue-cycle entry point).
//!
//! No real validation happens: a submission with the required fields
//! always verifies after a fixed artificial delay (applied by the API
//! layer) and produces a static "verified" summary card.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payer options offered on the registration form.
pub const PAYER_OPTIONS: &[&str] = &[
    "National Health Insurance",
    "Private Insurance (Admedika)",
    "Self-Pay",
];

/// Registration form as submitted by the workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub address: String,
    pub payer: String,
}

/// The static "verified" summary card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationOutcome {
    pub registration_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub payer: String,
    /// Decorative compliance copy: how demographic data is stored.
    pub privacy_status: &'static str,
    /// Decorative eligibility copy: payer verification result.
    pub eligibility: &'static str,
    pub billing_ready: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Patient name is required")]
    MissingName,
    #[error("Date of birth is required")]
    MissingDateOfBirth,
}

/// Register a patient. Always succeeds when the required fields are
/// present; the outcome is invented.
pub fn register(form: &RegistrationForm) -> Result<RegistrationOutcome, RegistrationError> {
    if form.name.trim().is_empty() {
        return Err(RegistrationError::MissingName);
    }
    if form.date_of_birth.trim().is_empty() {
        return Err(RegistrationError::MissingDateOfBirth);
    }

    let registration_id = format!("REG-{}", rand::thread_rng().gen_range(0..10_000));
    tracing::info!(%registration_id, "patient registered");

    Ok(RegistrationOutcome {
        registration_id,
        name: form.name.trim().to_string(),
        date_of_birth: form.date_of_birth.trim().to_string(),
        payer: form.payer.clone(),
        privacy_status: "Demographic data encrypted at rest (AES-256)",
        eligibility: "Eligible / Active",
        billing_ready: true,
    })
}
