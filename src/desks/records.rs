//! Medical records desk (EHR access).
//!
//! There is no real lookup: any non-empty patient identifier returns
//! the same fabricated diagnosis pair, stamped with an access time and
//! auditor label so the "audit trail" copy has something to show.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Label recorded as the accessing principal on every lookup.
pub const AUDITOR_LABEL: &str = "ROUTING_SYSTEM_AUDIT";

/// One diagnosis line in the fabricated record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiagnosisEntry {
    /// ICD-10 code.
    pub code: &'static str,
    pub name: &'static str,
    /// `YYYY-MM-DD`.
    pub recorded_on: &'static str,
}

/// The fabricated record returned for every lookup.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicalRecord {
    pub patient_id: String,
    pub patient_name: &'static str,
    pub diagnoses: Vec<DiagnosisEntry>,
    pub last_accessed: DateTime<Utc>,
    pub audited_by: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordsError {
    #[error("Patient identifier must not be empty")]
    EmptyPatientId,
}

/// The invariant diagnosis pair every lookup returns.
fn fabricated_diagnoses() -> Vec<DiagnosisEntry> {
    vec![
        DiagnosisEntry {
            code: "I25.1",
            name: "Coronary artery disease",
            recorded_on: "2023-10-12",
        },
        DiagnosisEntry {
            code: "E11.9",
            name: "Type 2 diabetes mellitus",
            recorded_on: "2023-01-15",
        },
    ]
}

/// Look up a patient record. Any non-empty identifier succeeds.
pub fn lookup(patient_id: &str) -> Result<MedicalRecord, RecordsError> {
    let patient_id = patient_id.trim();
    if patient_id.is_empty() {
        return Err(RecordsError::EmptyPatientId);
    }

    tracing::info!(%patient_id, auditor = AUDITOR_LABEL, "ePHI access recorded");

    Ok(MedicalRecord {
        patient_id: patient_id.to_string(),
        patient_name: "Simulated Patient",
        diagnoses: fabricated_diagnoses(),
        last_accessed: Utc::now(),
        audited_by: AUDITOR_LABEL,
    })
}
