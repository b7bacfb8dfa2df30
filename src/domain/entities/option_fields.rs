use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateLength;

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field absent from the payload
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Fields of this type need `#[serde(default)]` so that an absent key maps to `Unchanged`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T> OptionField<T> {
    /// Merges the patch over the stored value.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            OptionField::Unchanged => current,
            OptionField::SetToNull => None,
            OptionField::SetToValue(v) => Some(v),
        }
    }

    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        mention: OptionField<String>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"mention": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"mention": "Top contributor"}"#).unwrap();

        assert!(absent.mention.is_unchanged());
        assert_eq!(null.mention, OptionField::SetToNull);
        assert_eq!(value.mention.value_ref().map(String::as_str), Some("Top contributor"));
    }

    #[test]
    fn apply_to_merges_over_current_value() {
        let current = Some("old".to_string());

        assert_eq!(OptionField::Unchanged.apply_to(current.clone()), current);
        assert_eq!(OptionField::<String>::SetToNull.apply_to(current.clone()), None);
        assert_eq!(
            OptionField::SetToValue("new".to_string()).apply_to(current),
            Some("new".to_string())
        );
    }

    #[derive(Debug, Deserialize, Validate)]
    struct LimitedPatch {
        #[serde(default)]
        #[validate(length(max = 5, message = "mention is too long"))]
        mention: OptionField<String>,
    }

    #[test]
    fn length_rule_applies_only_to_set_values() {
        let too_long: LimitedPatch = serde_json::from_str(r#"{"mention": "far too long"}"#).unwrap();
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mention"));

        let short: LimitedPatch = serde_json::from_str(r#"{"mention": "ok"}"#).unwrap();
        let null: LimitedPatch = serde_json::from_str(r#"{"mention": null}"#).unwrap();
        let absent: LimitedPatch = serde_json::from_str("{}").unwrap();
        assert!(short.validate().is_ok());
        assert!(null.validate().is_ok());
        assert!(absent.validate().is_ok());
    }
}
