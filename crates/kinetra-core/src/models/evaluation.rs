use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::recovery::ClinicalRating;

/// One recovery-tracking session. The percentage is derived from the
/// ratings at build time and stored alongside them so historical trend
/// data survives any future change to the formula.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub patient_id: String,
    pub professional_id: String,
    pub recorded_at: jiff::Timestamp,
    pub notes: String,
    pub ratings: ClinicalRating,
    pub recovery_percentage: i32,
}
