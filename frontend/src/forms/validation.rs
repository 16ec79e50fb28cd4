use regex::Regex;
use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};
use validator::{ValidateEmail, ValidationError, ValidationErrors};

pub static UK_MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+44|0)7\d{9}$").expect("valid UK mobile pattern"));

pub static UK_POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Z][A-HJ-Y]?\d[A-Z\d]? ?\d[A-Z]{2}|GIR ?0AA)$")
        .expect("valid UK postcode pattern")
});

pub static UK_POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9R][0-9A-Z]?\s?[0-9][ABD-HJLNP-UW-Z]{2}$")
        .expect("valid UK postal code pattern")
});

pub const UK_COUNTRIES: &[&str] = &["UK", "England", "Scotland", "Wales", "Northern Ireland"];
pub const GENDERS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];
pub const MIN_PASSWORD_LEN: usize = 8;

/// First message per field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                fields.insert(field.to_string(), message);
            }
        }
        fields
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn uk_country(value: &str) -> Result<(), ValidationError> {
    if UK_COUNTRIES.contains(&value) {
        Ok(())
    } else {
        Err(error("country", "Country must be UK or England/Scotland/Wales/Northern Ireland"))
    }
}

pub fn uk_region(value: &str) -> Result<(), ValidationError> {
    if UK_COUNTRIES.contains(&value) {
        Ok(())
    } else {
        Err(error("country", "Country must be UK or one of its regions"))
    }
}

pub fn gender(value: &str) -> Result<(), ValidationError> {
    if GENDERS.contains(&value) {
        Ok(())
    } else {
        Err(error("gender", "Gender must be Male, Female, Other, or Prefer not to say"))
    }
}

pub fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(error("email", "Invalid email address"))
    }
}

pub fn optional_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(error("password", "Password must be at least 8 characters"))
    }
}

pub fn optional_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.trim().parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(error("number", "Must be a number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(
            length(min = 1, message = "Email is required"),
            email(message = "Invalid email format")
        )]
        email: String,
    }

    #[test]
    fn field_errors_keep_first_message_per_field() {
        let sample = Sample {
            name: String::new(),
            email: String::new(),
        };
        let errors: FieldErrors = sample.validate().unwrap_err().into();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn uk_patterns_accept_and_reject() {
        assert!(UK_MOBILE_RE.is_match("07123456789"));
        assert!(UK_MOBILE_RE.is_match("+447912345678"));
        assert!(!UK_MOBILE_RE.is_match("0212345678"));

        assert!(UK_POSTCODE_RE.is_match("SW1A 1AA"));
        assert!(UK_POSTCODE_RE.is_match("ls1 4ap"));
        assert!(UK_POSTCODE_RE.is_match("GIR 0AA"));
        assert!(!UK_POSTCODE_RE.is_match("12345"));

        assert!(UK_POSTAL_CODE_RE.is_match("M1 1AE"));
        assert!(!UK_POSTAL_CODE_RE.is_match("M1 1AI"));
    }

    #[test]
    fn custom_rules_cover_optional_inputs() {
        assert!(uk_country("Wales").is_ok());
        assert!(uk_country("France").is_err());
        assert!(uk_region("Scotland").is_ok());
        assert!(uk_region("").is_err());
        assert!(gender("Prefer not to say").is_ok());
        assert!(gender("").is_err());
        assert!(optional_email("").is_ok());
        assert!(optional_email("not-an-email").is_err());
        assert!(optional_password("").is_ok());
        assert!(optional_password("short").is_err());
        assert!(optional_number("-1.25").is_ok());
        assert!(optional_number("north").is_err());
    }
}
