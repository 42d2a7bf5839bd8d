use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const LIKELIHOOD_LABELS: [&str; 5] = ["Rare", "Unlikely", "Possible", "Likely", "Almost Certain"];
const IMPACT_LABELS: [&str; 5] = ["Negligible", "Minor", "Moderate", "Major", "Severe"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between {min} and {max}, got {0}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingOutOfRange(pub u8);

/// A likelihood or impact rating on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every rating, lowest first.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position of this rating in 0..5, for grid indexing.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }

    pub fn likelihood_label(self) -> &'static str {
        LIKELIHOOD_LABELS[self.index()]
    }

    pub fn impact_label(self) -> &'static str {
        IMPACT_LABELS[self.index()]
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
