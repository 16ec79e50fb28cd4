use crate::{
    api::{Attachment, FormPayload},
    forms::FieldErrors,
};
use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

pub const SIGNUP_ROLES: &[&str] = &["ADMIN", "SUPER_ADMIN"];

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digits pattern"));

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please select a role"))]
    pub role: String,
    #[validate(
        length(min = 10, message = "Phone number must be at least 10 digits"),
        regex(path = *DIGITS_RE, message = "Phone must contain only numbers")
    )]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub img: Option<Attachment>,
    pub accepted_terms: bool,
}

impl SignUpForm {
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(errors),
        };
        if !self.accepted_terms {
            errors.insert("terms", "You must accept the Terms & Conditions to sign up.");
        }
        errors.into_result()
    }

    pub fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .field("name", self.name.trim())
            .field("email", self.email.trim())
            .field("password", self.password.as_str())
            .field("role", self.role.as_str())
            .field("phone", self.phone.trim())
            .field("address", self.address.trim())
            .field("img", self.img.clone())
    }
}
