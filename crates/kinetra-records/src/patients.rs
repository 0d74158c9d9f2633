//! Patient listing and lookup.

use kinetra_core::doc_keys;
use kinetra_core::models::Patient;
use kinetra_storage::documents::{list_documents, load_document};

use crate::context::Context;
use crate::error::RecordsError;

/// Patients owned by one professional, most recently registered first.
pub async fn patients_for_professional(
    ctx: &Context,
    professional_id: &str,
) -> Result<Vec<Patient>, RecordsError> {
    let mut patients: Vec<Patient> =
        list_documents(&ctx.s3, &ctx.bucket, doc_keys::PATIENTS_PREFIX).await?;

    patients.retain(|p| p.professional_id == professional_id);
    patients.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
    Ok(patients)
}

/// Every patient in the practice, most recently registered first. Admin
/// view only; role checks belong to the caller.
pub async fn all_patients(ctx: &Context) -> Result<Vec<Patient>, RecordsError> {
    let mut patients: Vec<Patient> =
        list_documents(&ctx.s3, &ctx.bucket, doc_keys::PATIENTS_PREFIX).await?;

    patients.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
    Ok(patients)
}

/// Look up one patient's profile by account uid.
pub async fn patient_by_uid(ctx: &Context, uid: &str) -> Result<Patient, RecordsError> {
    let (patient, _etag) =
        load_document(&ctx.s3, &ctx.bucket, &doc_keys::patient(uid)).await?;
    Ok(patient)
}
