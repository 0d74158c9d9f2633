//! Patient registration: one identity-provider account plus the `users/`
//! and `patients/` documents.

use jiff::Timestamp;
use tracing::info;

use kinetra_auth::provision::provision_patient_account;
use kinetra_core::doc_keys;
use kinetra_storage::documents::save_document;

use crate::builder::PatientForm;
use crate::context::Context;
use crate::error::RecordsError;

/// Outcome of a successful registration. The temporary credential is shown
/// once to the operator for hand-off to the patient; the identity provider
/// forces rotation on first sign-in.
pub struct RegisteredPatient {
    pub uid: String,
    pub temporary_credential: String,
}

/// Register a new patient.
///
/// The form is validated up front — a bad RUT, email, or age is rejected
/// synchronously and nothing is provisioned. Identity-provider conflicts
/// (email in use, credential rejected) propagate unchanged; there is no
/// retry here.
pub async fn register_patient(
    ctx: &Context,
    form: &PatientForm,
    professional_id: &str,
) -> Result<RegisteredPatient, RecordsError> {
    let draft = form.validate()?;
    let temporary_credential = draft.credential_fragment();

    let uid = provision_patient_account(
        &ctx.cognito,
        &ctx.auth.user_pool_id,
        draft.email(),
        &temporary_credential,
    )
    .await?;

    let now = Timestamp::now();
    let (account, patient) = draft.into_records(&uid, professional_id, now);

    save_document(&ctx.s3, &ctx.bucket, &doc_keys::user(&uid), &account).await?;
    save_document(&ctx.s3, &ctx.bucket, &doc_keys::patient(&uid), &patient).await?;

    info!(uid = uid.as_str(), professional_id, "patient registered");

    Ok(RegisteredPatient {
        uid,
        temporary_credential,
    })
}
