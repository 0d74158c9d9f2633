//! Pure record assembly.
//!
//! Everything here is synchronous and I/O-free: timestamps, ids, and the
//! owning professional come in as explicit parameters, so the builders can
//! be exercised without any collaborator. Validation failures carry the
//! human-readable message shown to the user.

use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use kinetra_core::models::{
    Appointment, AppointmentStatus, Evaluation, Patient, Role, Sex, UserAccount,
};
use kinetra_core::recovery::ClinicalRating;
use kinetra_core::rut::Rut;

use crate::error::RecordsError;

/// The registration form exactly as submitted: raw strings, comma-separated
/// tag fields, sex as the single-letter code the form uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    pub rut: String,
    pub name: String,
    pub age: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub history: String,
    pub diagnoses: String,
    pub treatments: String,
}

/// A form that passed validation, with fields parsed into their domain
/// types. Produced by [`PatientForm::validate`]; consumed once the
/// identity provider has assigned a uid.
#[derive(Debug, Clone)]
pub struct PatientDraft {
    rut: Rut,
    name: String,
    age: u8,
    sex: Sex,
    email: String,
    phone: String,
    address: String,
    history: String,
    diagnoses: Vec<String>,
    treatments: Vec<String>,
}

impl PatientForm {
    /// Validate every field, rejecting in the same request with a message
    /// naming the offending field. RUT and email gates run here so a bad
    /// form never reaches the identity provider.
    pub fn validate(&self) -> Result<PatientDraft, RecordsError> {
        let rut = Rut::parse(&self.rut)
            .map_err(|e| RecordsError::validation("rut", e.to_string()))?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(RecordsError::validation("name", "name is required"));
        }

        let age: u8 = self
            .age
            .trim()
            .parse()
            .ok()
            .filter(|a| (1..=120).contains(a))
            .ok_or_else(|| RecordsError::validation("age", "age must be between 1 and 120"))?;

        let sex = match self.sex.trim() {
            "M" => Sex::Male,
            "F" => Sex::Female,
            "O" => Sex::Other,
            other => {
                return Err(RecordsError::validation(
                    "sex",
                    format!("unknown sex category: {other:?}"),
                ));
            }
        };

        let email = self.email.trim();
        if !validate_email(email) {
            return Err(RecordsError::validation(
                "email",
                "email address is not valid",
            ));
        }

        Ok(PatientDraft {
            rut,
            name: name.to_string(),
            age,
            sex,
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            history: self.history.trim().to_string(),
            diagnoses: split_tags(&self.diagnoses),
            treatments: split_tags(&self.treatments),
        })
    }
}

impl PatientDraft {
    /// The temporary credential for the new account. Must be rotated on
    /// first sign-in; see `kinetra_core::rut::derive_credential_fragment`.
    pub fn credential_fragment(&self) -> String {
        self.rut.credential_fragment()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Materialize the account and profile documents once the identity
    /// provider has handed back the uid. The RUT is stored in display form.
    pub fn into_records(
        self,
        uid: &str,
        professional_id: &str,
        now: Timestamp,
    ) -> (UserAccount, Patient) {
        let rut = self.rut.formatted();

        let account = UserAccount {
            uid: uid.to_string(),
            rut: rut.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            role: Role::Patient,
            active: true,
            created_at: now,
        };

        let patient = Patient {
            uid: uid.to_string(),
            rut,
            name: self.name,
            age: self.age,
            sex: self.sex,
            email: self.email,
            phone: self.phone,
            address: self.address,
            history: self.history,
            diagnoses: self.diagnoses,
            treatments: self.treatments,
            professional_id: professional_id.to_string(),
            registered_at: now,
        };

        (account, patient)
    }
}

/// Assemble a new appointment. Status always starts `Pending`.
pub fn build_appointment(
    id: Uuid,
    patient_id: &str,
    professional_id: &str,
    scheduled_at: Timestamp,
    notes: &str,
    now: Timestamp,
) -> Appointment {
    Appointment {
        id,
        patient_id: patient_id.to_string(),
        professional_id: professional_id.to_string(),
        scheduled_at,
        notes: notes.trim().to_string(),
        status: AppointmentStatus::Pending,
        created_at: now,
    }
}

/// Assemble a new evaluation, deriving the recovery percentage from the
/// clinical triple. Ratings are taken as-is (the form bounds them); the
/// strict scorer is available to callers that need a hard gate.
pub fn build_evaluation(
    id: Uuid,
    patient_id: &str,
    professional_id: &str,
    ratings: ClinicalRating,
    notes: &str,
    now: Timestamp,
) -> Evaluation {
    Evaluation {
        id,
        patient_id: patient_id.to_string(),
        professional_id: professional_id.to_string(),
        recorded_at: now,
        notes: notes.trim().to_string(),
        ratings,
        recovery_percentage: ratings.recovery_percentage(),
    }
}

/// Split a comma-separated free-text field into trimmed, non-empty tokens.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Email shape check: one `@`, no whitespace, dotted domain. Same
/// acceptance as the registration form's client-side check.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
