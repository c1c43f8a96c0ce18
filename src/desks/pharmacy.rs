//! Pharmacy and logistics desk.
//!
//! The only desk with state that survives between submissions: a small
//! in-memory inventory. Dispensing checks stock before decrementing so
//! quantities never go negative, and any item whose stock drops below
//! the reorder threshold raises a supply-chain alert.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Items with stock below this raise a reorder alert.
pub const REORDER_THRESHOLD: u32 = 10;

/// One inventory row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drug {
    pub id: u32,
    pub name: String,
    pub stock: u32,
    pub unit_price: u32,
    /// Expiry label, `YYYY-MM`.
    pub expiry: String,
}

/// Receipt for a successful dispense.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DispenseReceipt {
    pub drug_name: String,
    pub quantity: u32,
    pub patient: String,
    pub remaining_stock: u32,
}

/// Supply-chain alert for a low-stock item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReorderAlert {
    pub drug_name: String,
    pub stock: u32,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PharmacyError {
    #[error("Unknown drug id {0}")]
    UnknownDrug(u32),
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
    #[error("Insufficient stock! Available: {available}")]
    InsufficientStock { available: u32 },
}

// ═══════════════════════════════════════════
// Inventory
// ═══════════════════════════════════════════

/// In-memory drug inventory. No ledger, no durability: the list is
/// seeded at startup and mutated in place.
#[derive(Debug, Clone)]
pub struct Inventory {
    drugs: Vec<Drug>,
    last_transaction: Option<String>,
}

impl Inventory {
    /// The canonical demo inventory.
    pub fn seeded() -> Self {
        Self {
            drugs: vec![
                Drug {
                    id: 1,
                    name: "Paracetamol 500mg".into(),
                    stock: 150,
                    unit_price: 5_000,
                    expiry: "2025-12".into(),
                },
                Drug {
                    id: 2,
                    name: "Amoxicillin 500mg".into(),
                    stock: 45,
                    unit_price: 12_000,
                    expiry: "2024-08".into(),
                },
                Drug {
                    id: 3,
                    name: "Ciprofloxacin 500mg".into(),
                    stock: 5,
                    unit_price: 15_000,
                    expiry: "2024-06".into(),
                },
                Drug {
                    id: 4,
                    name: "Metformin 500mg".into(),
                    stock: 200,
                    unit_price: 3_000,
                    expiry: "2025-01".into(),
                },
            ],
            last_transaction: None,
        }
    }

    /// Empty inventory, for tests that seed their own rows.
    #[cfg(test)]
    pub fn with_drugs(drugs: Vec<Drug>) -> Self {
        Self {
            drugs,
            last_transaction: None,
        }
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    /// The human-readable line describing the most recent dispense.
    pub fn last_transaction(&self) -> Option<&str> {
        self.last_transaction.as_deref()
    }

    /// Dispense a prescription: validate, decrement stock, record the
    /// transaction line. Stock is checked before the decrement so it
    /// can never go negative.
    pub fn dispense(
        &mut self,
        drug_id: u32,
        quantity: u32,
        patient: &str,
    ) -> Result<DispenseReceipt, PharmacyError> {
        if quantity == 0 {
            return Err(PharmacyError::InvalidQuantity);
        }

        let drug = self
            .drugs
            .iter_mut()
            .find(|d| d.id == drug_id)
            .ok_or(PharmacyError::UnknownDrug(drug_id))?;

        if drug.stock < quantity {
            return Err(PharmacyError::InsufficientStock {
                available: drug.stock,
            });
        }

        drug.stock -= quantity;

        let patient = if patient.trim().is_empty() {
            "Patient"
        } else {
            patient.trim()
        };
        let line = format!(
            "Transaction complete: {} ({} units) for {}.",
            drug.name, quantity, patient
        );
        tracing::info!(drug = %drug.name, quantity, remaining = drug.stock, "prescription dispensed");

        let receipt = DispenseReceipt {
            drug_name: drug.name.clone(),
            quantity,
            patient: patient.to_string(),
            remaining_stock: drug.stock,
        };
        self.last_transaction = Some(line);
        Ok(receipt)
    }

    /// Alerts for every item below the reorder threshold.
    pub fn reorder_alerts(&self) -> Vec<ReorderAlert> {
        self.drugs
            .iter()
            .filter(|d| d.stock < REORDER_THRESHOLD)
            .map(|d| ReorderAlert {
                drug_name: d.name.clone(),
                stock: d.stock,
                message: format!(
                    "Stock of {} critical: {} units. Automatic purchase order created.",
                    d.name, d.stock
                ),
            })
            .collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::seeded()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_inventory_has_four_drugs() {
        let inv = Inventory::seeded();
        assert_eq!(inv.drugs().len(), 4);
        assert_eq!(inv.drugs()[2].name, "Ciprofloxacin 500mg");
        assert_eq!(inv.drugs()[2].stock, 5);
    }

    #[test]
    fn dispense_decrements_stock() {
        let mut inv = Inventory::seeded();
        let receipt = inv.dispense(1, 10, "Bima").unwrap();
        assert_eq!(receipt.remaining_stock, 140);
        assert_eq!(inv.drugs()[0].stock, 140);
        assert_eq!(
            inv.last_transaction().unwrap(),
            "Transaction complete: Paracetamol 500mg (10 units) for Bima."
        );
    }

    #[test]
    fn over_dispense_rejected_with_available() {
        let mut inv = Inventory::seeded();
        let err = inv.dispense(3, 6, "Sinta").unwrap_err();
        assert_eq!(err, PharmacyError::InsufficientStock { available: 5 });
        // Stock untouched after rejection
        assert_eq!(inv.drugs()[2].stock, 5);
        assert!(inv.last_transaction().is_none());
    }

    #[test]
    fn stock_never_goes_negative() {
        let mut inv = Inventory::seeded();
        // Drain Ciprofloxacin exactly, then try again
        inv.dispense(3, 5, "Sinta").unwrap();
        assert_eq!(inv.drugs()[2].stock, 0);

        let err = inv.dispense(3, 1, "Sinta").unwrap_err();
        assert_eq!(err, PharmacyError::InsufficientStock { available: 0 });
        assert_eq!(inv.drugs()[2].stock, 0);
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut inv = Inventory::seeded();
        assert_eq!(inv.dispense(1, 0, "Bima"), Err(PharmacyError::InvalidQuantity));
    }

    #[test]
    fn unknown_drug_rejected() {
        let mut inv = Inventory::seeded();
        assert_eq!(inv.dispense(99, 1, "Bima"), Err(PharmacyError::UnknownDrug(99)));
    }

    #[test]
    fn empty_patient_defaults_in_transaction_line() {
        let mut inv = Inventory::seeded();
        inv.dispense(4, 2, "  ").unwrap();
        assert_eq!(
            inv.last_transaction().unwrap(),
            "Transaction complete: Metformin 500mg (2 units) for Patient."
        );
    }

    #[test]
    fn seeded_inventory_starts_with_one_alert() {
        let inv = Inventory::seeded();
        let alerts = inv.reorder_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].drug_name, "Ciprofloxacin 500mg");
        assert_eq!(alerts[0].stock, 5);
        assert!(alerts[0].message.contains("Automatic purchase order"));
    }

    #[test]
    fn alert_appears_when_stock_crosses_threshold() {
        let mut inv = Inventory::with_drugs(vec![Drug {
            id: 1,
            name: "Amoxicillin 500mg".into(),
            stock: 12,
            unit_price: 12_000,
            expiry: "2024-08".into(),
        }]);
        assert!(inv.reorder_alerts().is_empty());

        inv.dispense(1, 3, "Bima").unwrap();
        let alerts = inv.reorder_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].stock, 9);
    }

    #[test]
    fn threshold_is_strictly_below_ten() {
        let inv = Inventory::with_drugs(vec![Drug {
            id: 1,
            name: "Test".into(),
            stock: 10,
            unit_price: 100,
            expiry: "2027-01".into(),
        }]);
        assert!(inv.reorder_alerts().is_empty());
    }
}
