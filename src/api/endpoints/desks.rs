//! Service-desk endpoints: the forms behind each routed workspace.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::desks::appointment::{self, AppointmentConfirmation, AppointmentRequest};
use crate::desks::pharmacy::{DispenseReceipt, Drug, ReorderAlert};
use crate::desks::records::{self, MedicalRecord};
use crate::desks::registration::{self, RegistrationForm, RegistrationOutcome};

// ═══════════════════════════════════════════
// Registration
// ═══════════════════════════════════════════

/// `POST /api/desks/registration` — verify and register a patient.
///
/// Validation happens before the artificial verification delay so bad
/// submissions fail fast.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(form): Json<RegistrationForm>,
) -> Result<Json<RegistrationOutcome>, ApiError> {
    if form.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Patient name is required".into()));
    }
    if form.date_of_birth.trim().is_empty() {
        return Err(ApiError::BadRequest("Date of birth is required".into()));
    }

    let delay = ctx.core.config.verification_delay_ms;
    if delay > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
    }

    let outcome = registration::register(&form)?;
    Ok(Json(outcome))
}

// ═══════════════════════════════════════════
// Appointments
// ═══════════════════════════════════════════

/// `POST /api/desks/appointment` — book a slot. The occupied slot
/// returns 409.
pub async fn schedule(
    Json(req): Json<AppointmentRequest>,
) -> Result<Json<AppointmentConfirmation>, ApiError> {
    let confirmation = appointment::schedule(&req)?;
    Ok(Json(confirmation))
}

// ═══════════════════════════════════════════
// Medical records
// ═══════════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct RecordsLookupRequest {
    pub patient_id: String,
}

/// `POST /api/desks/records/lookup` — fetch the audited record.
pub async fn lookup_record(
    Json(req): Json<RecordsLookupRequest>,
) -> Result<Json<MedicalRecord>, ApiError> {
    let record = records::lookup(&req.patient_id)?;
    Ok(Json(record))
}

// ═══════════════════════════════════════════
// Pharmacy
// ═══════════════════════════════════════════

#[derive(Serialize)]
pub struct InventoryResponse {
    pub drugs: Vec<Drug>,
    pub last_transaction: Option<String>,
    pub alerts: Vec<ReorderAlert>,
}

/// `GET /api/desks/pharmacy/inventory` — current stock and alerts.
pub async fn inventory(State(ctx): State<ApiContext>) -> Result<Json<InventoryResponse>, ApiError> {
    let inventory = ctx.core.lock_inventory()?;
    Ok(Json(InventoryResponse {
        drugs: inventory.drugs().to_vec(),
        last_transaction: inventory.last_transaction().map(String::from),
        alerts: inventory.reorder_alerts(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct DispenseRequest {
    pub drug_id: u32,
    pub quantity: u32,
    #[serde(default)]
    pub patient: String,
}

#[derive(Serialize)]
pub struct DispenseResponse {
    pub receipt: DispenseReceipt,
    /// Alerts raised by the inventory state after this dispense.
    pub alerts: Vec<ReorderAlert>,
}

/// `POST /api/desks/pharmacy/dispense` — dispense a prescription.
pub async fn dispense(
    State(ctx): State<ApiContext>,
    Json(req): Json<DispenseRequest>,
) -> Result<Json<DispenseResponse>, ApiError> {
    let mut inventory = ctx.core.lock_inventory()?;
    let receipt = inventory.dispense(req.drug_id, req.quantity, &req.patient)?;
    let alerts = inventory.reorder_alerts();
    Ok(Json(DispenseResponse { receipt, alerts }))
}
