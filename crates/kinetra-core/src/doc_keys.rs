//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the
//! canonical layout of record documents in the Kinetra bucket. Account
//! documents are keyed by the identity provider's opaque uid; appointments
//! and evaluations by their server-generated id.

use uuid::Uuid;

pub fn user(uid: &str) -> String {
    format!("users/{uid}.json")
}

pub fn patient(uid: &str) -> String {
    format!("patients/{uid}.json")
}

pub fn appointment(id: Uuid) -> String {
    format!("appointments/{id}.json")
}

pub fn evaluation(id: Uuid) -> String {
    format!("evaluations/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";

pub const PATIENTS_PREFIX: &str = "patients/";

pub const APPOINTMENTS_PREFIX: &str = "appointments/";

pub const EVALUATIONS_PREFIX: &str = "evaluations/";
