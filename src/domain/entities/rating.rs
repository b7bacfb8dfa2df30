use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::types::BigDecimal;
use uuid::Uuid;

/// Largest magnitude a `NUMERIC(2, 1)` column can hold.
const RATING_LIMIT: f64 = 10.0;

/// Score with one fractional digit, stored as `NUMERIC(2, 1)`.
#[derive(Debug, Clone, PartialEq, Default, sqlx::Type)]
#[sqlx(transparent)]
pub struct Rating(BigDecimal);

impl Rating {
    pub fn as_f64(&self) -> f64 {
        self.0.to_string().parse().unwrap_or_default()
    }
}

impl TryFrom<f64> for Rating {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.abs() >= RATING_LIMIT {
            return Err(format!("rating must be greater than -{RATING_LIMIT} and less than {RATING_LIMIT}"));
        }
        let tenths = value * 10.0;
        if (tenths - tenths.round()).abs() > 1e-9 {
            return Err("rating allows at most one decimal place".to_string());
        }

        BigDecimal::from_str(&format!("{value:.1}"))
            .map(Rating)
            .map_err(|e| e.to_string())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f64())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Rating::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Mutual rating between the employer (rater) and the freelancer (ratee) of a task.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserRating {
    pub task_id: Uuid,
    pub employer_id: Uuid,
    pub freelancer_id: Uuid,
    pub employer_rating: Rating,
    pub freelancer_rating: Rating,
}

#[derive(Debug, Deserialize)]
pub struct NewUserRating {
    pub employer_id: Uuid,
    pub freelancer_id: Uuid,
    #[serde(default)]
    pub employer_rating: Rating,
    #[serde(default)]
    pub freelancer_rating: Rating,
}

impl NewUserRating {
    pub fn into_rating(self, task_id: Uuid) -> UserRating {
        UserRating {
            task_id,
            employer_id: self.employer_id,
            freelancer_id: self.freelancer_id,
            employer_rating: self.employer_rating,
            freelancer_rating: self.freelancer_rating,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateUserRatingRequest {
    pub employer_rating: Option<Rating>,
    pub freelancer_rating: Option<Rating>,
}

impl UpdateUserRatingRequest {
    pub fn apply(self, mut rating: UserRating) -> UserRating {
        if let Some(value) = self.employer_rating {
            rating.employer_rating = value;
        }
        if let Some(value) = self.freelancer_rating {
            rating.freelancer_rating = value;
        }
        rating
    }
}
