use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An account document, one per identity-provider account. The uid is the
/// opaque id the identity provider assigned at provisioning time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserAccount {
    pub uid: String,
    pub rut: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
    pub active: bool,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Admin,
    Professional,
    Patient,
}
