//! Movie rating validation and truncation.
//!
//! A [`Rating`] can only be built from a value inside
//! [`MIN_RATING`]..=[`MAX_RATING`] and always carries at most one decimal
//! digit, truncated rather than rounded (`4.99999` becomes `4.9`).

use serde::Serialize;

use crate::error::CoreError;

/// Lowest accepted rating.
pub const MIN_RATING: f32 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f32 = 5.0;

/// A validated movie rating with at most one decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    /// Validate `value` and truncate it to one decimal place.
    pub fn new(value: f32) -> Result<Self, CoreError> {
        validate_rating(value)?;
        // Adding +0.0 turns -0.0 into 0.0 and leaves every other value alone.
        Ok(Self(truncate_to_one_decimal(value) + 0.0))
    }

    /// Wrap a value read back from storage.
    ///
    /// Stored ratings were validated on the way in, so no check is repeated.
    pub fn from_stored(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reject ratings outside `[0.0, 5.0]`. NaN is rejected as well.
pub fn validate_rating(value: f32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(CoreError::InvalidRating(value));
    }
    Ok(())
}

/// Truncate toward negative infinity at the first decimal digit.
///
/// Works on the shortest decimal representation of the float so binary
/// representation error cannot push a value like `0.7` down to `0.6`.
fn truncate_to_one_decimal(value: f32) -> f32 {
    let repr = value.to_string();
    let truncated = match repr.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{}", fraction.get(..1).unwrap_or("0")),
        None => repr,
    };
    truncated.parse().unwrap_or(value)
}
