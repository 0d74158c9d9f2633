//! Appointment scheduling and agenda queries.

use jiff::Timestamp;
use tracing::info;
use uuid::Uuid;

use kinetra_core::doc_keys;
use kinetra_core::models::{Appointment, AppointmentStatus};
use kinetra_storage::documents::{
    list_documents, load_document, save_document, save_document_if_match,
};

use crate::builder::build_appointment;
use crate::context::Context;
use crate::error::RecordsError;

/// Create a pending appointment between a patient and a professional.
pub async fn schedule_appointment(
    ctx: &Context,
    patient_id: &str,
    professional_id: &str,
    scheduled_at: Timestamp,
    notes: &str,
) -> Result<Appointment, RecordsError> {
    let appointment = build_appointment(
        Uuid::new_v4(),
        patient_id,
        professional_id,
        scheduled_at,
        notes,
        Timestamp::now(),
    );

    save_document(
        &ctx.s3,
        &ctx.bucket,
        &doc_keys::appointment(appointment.id),
        &appointment,
    )
    .await?;

    info!(
        id = %appointment.id,
        patient_id,
        professional_id,
        "appointment scheduled"
    );

    Ok(appointment)
}

/// Move an appointment to a new status (completed, cancelled, ...).
///
/// Uses the document's ETag so a concurrent update loses cleanly with
/// `StorageError::PreconditionFailed` instead of overwriting.
pub async fn update_appointment_status(
    ctx: &Context,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Appointment, RecordsError> {
    let key = doc_keys::appointment(id);
    let (mut appointment, etag): (Appointment, String) =
        load_document(&ctx.s3, &ctx.bucket, &key).await?;

    appointment.status = status;
    save_document_if_match(&ctx.s3, &ctx.bucket, &key, &appointment, &etag).await?;

    Ok(appointment)
}

/// A professional's agenda, most recent first.
pub async fn appointments_for_professional(
    ctx: &Context,
    professional_id: &str,
) -> Result<Vec<Appointment>, RecordsError> {
    let mut appointments: Vec<Appointment> =
        list_documents(&ctx.s3, &ctx.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;

    appointments.retain(|a| a.professional_id == professional_id);
    appointments.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
    Ok(appointments)
}

/// A patient's appointments, most recent first.
pub async fn appointments_for_patient(
    ctx: &Context,
    patient_id: &str,
) -> Result<Vec<Appointment>, RecordsError> {
    let mut appointments: Vec<Appointment> =
        list_documents(&ctx.s3, &ctx.bucket, doc_keys::APPOINTMENTS_PREFIX).await?;

    appointments.retain(|a| a.patient_id == patient_id);
    appointments.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
    Ok(appointments)
}
