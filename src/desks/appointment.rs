//! Appointment scheduling desk.
//!
//! Availability is simulated: exactly one hardcoded time slot is
//! treated as occupied, every other time succeeds and allocates the
//! same examination room with a generated identifier.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single occupied slot. Any request for this time conflicts.
pub const CONFLICTING_TIME: &str = "10:00";

/// The room every confirmed appointment is allocated to.
pub const ALLOCATED_ROOM: &str = "Consultation Room 1";

/// Doctors offered on the scheduling form.
pub const DOCTOR_OPTIONS: &[&str] = &[
    "Dr. Andi (Internal Medicine)",
    "Dr. Siti (Pediatrics)",
    "Dr. Budi (Surgery)",
];

/// Scheduling request as submitted by the workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRequest {
    #[serde(default)]
    pub patient: String,
    pub doctor: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
}

/// A confirmed appointment.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentConfirmation {
    pub appointment_id: String,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub room: &'static str,
    /// Charge-capture KPI copy: always zero in the integrated system.
    pub charge_capture_lag_hours: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("The {time} slot is already occupied. Please pick another time.")]
    SlotConflict { time: String },
}

/// Schedule an appointment. Conflicts only on [`CONFLICTING_TIME`].
pub fn schedule(req: &AppointmentRequest) -> Result<AppointmentConfirmation, AppointmentError> {
    if req.time == CONFLICTING_TIME {
        return Err(AppointmentError::SlotConflict {
            time: req.time.clone(),
        });
    }

    let appointment_id = format!("APT-{}", rand::thread_rng().gen_range(1000..10_000));
    tracing::info!(%appointment_id, doctor = %req.doctor, "appointment scheduled");

    let patient = if req.patient.trim().is_empty() {
        "Walk-in".to_string()
    } else {
        req.patient.trim().to_string()
    };

    Ok(AppointmentConfirmation {
        appointment_id,
        patient,
        doctor: req.doctor.clone(),
        date: req.date.clone(),
        time: req.time.clone(),
        room: ALLOCATED_ROOM,
        charge_capture_lag_hours: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_at(time: &str) -> AppointmentRequest {
        AppointmentRequest {
            patient: "Sinta".into(),
            doctor: DOCTOR_OPTIONS[0].into(),
            date: "2026-09-01".into(),
            time: time.into(),
        }
    }

    #[test]
    fn conflicting_slot_rejected() {
        let err = schedule(&request_at("10:00")).unwrap_err();
        assert_eq!(
            err,
            AppointmentError::SlotConflict {
                time: "10:00".into()
            }
        );
    }

    #[test]
    fn all_other_times_accepted() {
        for time in ["09:00", "10:01", "10:30", "13:00", "23:59"] {
            let confirmation = schedule(&request_at(time)).unwrap();
            assert_eq!(confirmation.time, time);
            assert_eq!(confirmation.room, ALLOCATED_ROOM);
        }
    }

    #[test]
    fn identifier_in_expected_range() {
        let confirmation = schedule(&request_at("09:00")).unwrap();
        let n: u32 = confirmation
            .appointment_id
            .strip_prefix("APT-")
            .unwrap()
            .parse()
            .unwrap();
        assert!((1000..10_000).contains(&n));
    }

    #[test]
    fn empty_patient_becomes_walk_in() {
        let mut req = request_at("09:00");
        req.patient = "".into();
        let confirmation = schedule(&req).unwrap();
        assert_eq!(confirmation.patient, "Walk-in");
    }

    #[test]
    fn lag_time_is_always_zero() {
        let confirmation = schedule(&request_at("11:00")).unwrap();
        assert_eq!(confirmation.charge_capture_lag_hours, 0);
    }
}
