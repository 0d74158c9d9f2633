//! Recovery percentage scoring for clinical evaluations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The rating scale used by evaluation forms: each rating in `[1, 10]`.
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;

/// One evaluation session's clinical triple, as rated by the professional.
///
/// Mobility and strength are higher-is-better; pain is lower-is-better and
/// gets inverted by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRating {
    pub mobility: i32,
    pub strength: i32,
    pub pain: i32,
}

/// A rating fell outside `[1, 10]` in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating '{rating}' out of range: {value} not in [{RATING_MIN}, {RATING_MAX}]")]
pub struct RatingOutOfRange {
    pub rating: &'static str,
    pub value: i32,
}

impl ClinicalRating {
    /// Map the triple to a single percentage for trend charting:
    /// `round((mobility + strength + (10 - pain)) / 30 * 100)`.
    ///
    /// Pain is inverted so all three terms are higher-is-better before
    /// summing. With in-range inputs the result spans 7..=97; the top end
    /// is 97, not 100, because pain bottoms out at 1 and so contributes at
    /// most `10 - 1 = 9` of its 10 points. Inherent to the formula.
    ///
    /// Permissive on purpose: out-of-range ratings are computed with the
    /// same formula and can land outside `[0, 100]`. Existing stored
    /// percentages were computed this way; use
    /// [`recovery_percentage_strict`](Self::recovery_percentage_strict)
    /// when rejecting bad input matters more than compatibility.
    pub fn recovery_percentage(&self) -> i32 {
        let raw = f64::from(self.mobility + self.strength + (10 - self.pain)) / 30.0 * 100.0;
        raw.round() as i32
    }

    /// Range-checked variant: errors on the first rating outside `[1, 10]`.
    pub fn recovery_percentage_strict(&self) -> Result<i32, RatingOutOfRange> {
        for (rating, value) in [
            ("mobility", self.mobility),
            ("strength", self.strength),
            ("pain", self.pain),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(RatingOutOfRange { rating, value });
            }
        }
        Ok(self.recovery_percentage())
    }
}
