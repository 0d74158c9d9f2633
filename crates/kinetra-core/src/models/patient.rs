use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A patient's clinical profile, keyed by the same uid as the account
/// document. The RUT is stored in display form (`12.345.678-5`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub uid: String,
    pub rut: String,
    pub name: String,
    pub age: u8,
    pub sex: Sex,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Free-text medical history.
    pub history: String,
    pub diagnoses: Vec<String>,
    pub treatments: Vec<String>,
    /// Uid of the professional who owns this patient's records.
    pub professional_id: String,
    pub registered_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}
