use std::fmt;

use serde::{Deserialize, Serialize};

/// Cohort a student belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "batch_year")]
pub enum BatchYear {
    #[default]
    #[serde(rename = "None")]
    #[sqlx(rename = "None")]
    Unassigned,
    #[serde(rename = "UG-1")]
    #[sqlx(rename = "UG-1")]
    Ug1,
    #[serde(rename = "UG-2")]
    #[sqlx(rename = "UG-2")]
    Ug2,
    #[serde(rename = "UG-3")]
    #[sqlx(rename = "UG-3")]
    Ug3,
    #[serde(rename = "UG-4")]
    #[sqlx(rename = "UG-4")]
    Ug4,
    #[serde(rename = "MS")]
    #[sqlx(rename = "MS")]
    Ms,
    #[serde(rename = "Ph.D")]
    #[sqlx(rename = "Ph.D")]
    PhD,
}

impl BatchYear {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchYear::Unassigned => "None",
            BatchYear::Ug1 => "UG-1",
            BatchYear::Ug2 => "UG-2",
            BatchYear::Ug3 => "UG-3",
            BatchYear::Ug4 => "UG-4",
            BatchYear::Ms => "MS",
            BatchYear::PhD => "Ph.D",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// How a task is credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "credit_type")]
pub enum CreditType {
    #[default]
    Paid,
    Other,
}

impl fmt::Display for BatchYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_year_uses_cohort_labels_on_the_wire() {
        let parsed: BatchYear = serde_json::from_str("\"Ph.D\"").unwrap();
        assert_eq!(parsed, BatchYear::PhD);
        assert_eq!(serde_json::to_string(&BatchYear::Ug3).unwrap(), "\"UG-3\"");
        assert_eq!(serde_json::to_string(&BatchYear::default()).unwrap(), "\"None\"");
    }

    #[test]
    fn values_outside_the_closed_sets_are_rejected() {
        assert!(serde_json::from_str::<BatchYear>("\"UG-5\"").is_err());
        assert!(serde_json::from_str::<Gender>("\"Other\"").is_err());
        assert!(serde_json::from_str::<CreditType>("\"Barter\"").is_err());
    }

    #[test]
    fn defaults_match_the_schema() {
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(CreditType::default(), CreditType::Paid);
    }
}
