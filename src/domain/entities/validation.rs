use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use super::option_fields::OptionField;

static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{6,11}$").expect("phone number pattern is valid")
});

pub fn new_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if PHONE_NUMBER.is_match(phone) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_phone_number", "Phone number must contain only digits"))
    }
}

pub fn validate_optional_phone_number(phone: &OptionField<String>) -> Result<(), ValidationError> {
    match phone.value_ref() {
        Some(value) => validate_phone_number(value),
        None => Ok(()),
    }
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url(url: &OptionField<String>) -> Result<(), ValidationError> {
    match url.value_ref() {
        Some(value) => validate_url(value),
        None => Ok(()),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(new_validation_error("blank", "Value cannot be blank"))
    } else {
        Ok(())
    }
}

/// Skill, language and requirement levels start at 1; no upper bound is imposed.
pub fn default_level() -> i32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_are_short_digit_strings() {
        assert!(validate_phone_number("08012345678").is_ok());
        assert!(validate_phone_number("+4479460").is_ok());
        assert!(validate_phone_number("0801-234").is_err());
        assert!(validate_phone_number("123").is_err());
    }

    #[test]
    fn urls_must_be_http() {
        assert!(validate_url("https://github.com/portal/task").is_ok());
        assert!(validate_url("ftp://files.example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn optional_validators_skip_unchanged_and_null() {
        assert!(validate_optional_url(&OptionField::Unchanged).is_ok());
        assert!(validate_optional_url(&OptionField::SetToNull).is_ok());
        assert!(validate_optional_phone_number(&OptionField::SetToValue("abc".into())).is_err());
    }
}
