//! Recovery evaluations and trend queries.

use jiff::Timestamp;
use tracing::info;
use uuid::Uuid;

use kinetra_core::doc_keys;
use kinetra_core::models::Evaluation;
use kinetra_core::recovery::ClinicalRating;
use kinetra_storage::documents::{list_documents, save_document};

use crate::builder::build_evaluation;
use crate::context::Context;
use crate::error::RecordsError;

/// Record one evaluation session. The recovery percentage is derived from
/// the ratings at this point and stored with them.
pub async fn record_evaluation(
    ctx: &Context,
    patient_id: &str,
    professional_id: &str,
    ratings: ClinicalRating,
    notes: &str,
) -> Result<Evaluation, RecordsError> {
    let evaluation = build_evaluation(
        Uuid::new_v4(),
        patient_id,
        professional_id,
        ratings,
        notes,
        Timestamp::now(),
    );

    save_document(
        &ctx.s3,
        &ctx.bucket,
        &doc_keys::evaluation(evaluation.id),
        &evaluation,
    )
    .await?;

    info!(
        id = %evaluation.id,
        patient_id,
        recovery_percentage = evaluation.recovery_percentage,
        "evaluation recorded"
    );

    Ok(evaluation)
}

/// A patient's evaluation history, oldest first — the order the trend
/// chart consumes.
pub async fn evaluations_for_patient(
    ctx: &Context,
    patient_id: &str,
) -> Result<Vec<Evaluation>, RecordsError> {
    let mut evaluations: Vec<Evaluation> =
        list_documents(&ctx.s3, &ctx.bucket, doc_keys::EVALUATIONS_PREFIX).await?;

    evaluations.retain(|e| e.patient_id == patient_id);
    evaluations.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
    Ok(evaluations)
}
