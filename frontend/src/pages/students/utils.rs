use crate::{
    api::{Attachment, FormPayload, Student},
    forms::{
        dates::opt_date_input,
        validation::{gender, optional_email, optional_password, uk_region, UK_MOBILE_RE, UK_POSTAL_CODE_RE},
        FieldErrors,
    },
};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct StudentFormState {
    #[validate(length(min = 1, message = "Full Name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "optional_password"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "Phone number is required"),
        regex(path = *UK_MOBILE_RE, message = "Phone must be a valid UK mobile number (e.g. +447912345678 or 07123456789)")
    )]
    pub phone: String,
    #[validate(custom(function = "optional_email"))]
    pub second_email: String,
    #[validate(
        length(min = 1, message = "Gender is required"),
        custom(function = "gender")
    )]
    pub gender: String,
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,
    #[validate(length(min = 1, message = "Nationality is required"))]
    pub nationality: String,
    #[validate(custom(function = "uk_region"))]
    pub country: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 2, max = 50, message = "City must be between 2 and 50 characters"))]
    pub city: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(
        length(min = 1, message = "Postal code is required"),
        regex(path = *UK_POSTAL_CODE_RE, message = "Postal code must be a valid UK format (e.g. SW1A 1AA)")
    )]
    pub postal_code: String,
    pub img: Option<Attachment>,
    pub document: Option<Attachment>,
}

impl StudentFormState {
    pub fn from_student(s: &Student) -> Self {
        Self {
            full_name: s.full_name.clone(),
            email: s.email.clone(),
            password: String::new(),
            phone: s.phone.clone(),
            second_email: s.second_email.clone().unwrap_or_default(),
            gender: s.gender.clone(),
            date_of_birth: opt_date_input(s.date_of_birth.as_deref()),
            nationality: s.nationality.clone(),
            country: s.country.clone(),
            state: s.state.clone(),
            city: s.city.clone(),
            address: s.address.clone(),
            postal_code: s.postal_code.clone(),
            img: None,
            document: None,
        }
    }

    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    /// Multipart body for the update endpoint; an empty password leaves the current one unchanged.
    pub fn to_payload(&self, student_id: &str) -> FormPayload {
        FormPayload::new()
            .field("studentId", student_id)
            .field("fullName", self.full_name.trim())
            .field("email", self.email.trim())
            .field("password", self.password.as_str())
            .field("phone", self.phone.trim())
            .field("secondEmail", self.second_email.trim())
            .field("gender", self.gender.as_str())
            .field("dateOfBirth", self.date_of_birth.as_str())
            .field("nationality", self.nationality.trim())
            .field("country", self.country.as_str())
            .field("state", self.state.trim())
            .field("city", self.city.trim())
            .field("address", self.address.trim())
            .field("postalCode", self.postal_code.trim().to_uppercase())
            .field("img", self.img.clone())
            .field("document", self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StudentFormState {
        StudentFormState {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "07123456789".into(),
            gender: "Female".into(),
            date_of_birth: "2001-05-04".into(),
            nationality: "British".into(),
            country: "England".into(),
            state: "West Yorkshire".into(),
            city: "Leeds".into(),
            address: "1 Park Row".into(),
            postal_code: "LS1 5AB".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate_fields().is_ok());
    }

    #[test]
    fn rules_report_first_message_per_field() {
        let form = StudentFormState {
            city: "L".into(),
            country: "France".into(),
            gender: String::new(),
            second_email: "nope".into(),
            password: "short".into(),
            ..valid_form()
        };
        let errors = form.validate_fields().unwrap_err();
        assert_eq!(errors.get("city"), Some("City must be between 2 and 50 characters"));
        assert_eq!(errors.get("country"), Some("Country must be UK or one of its regions"));
        assert_eq!(errors.get("gender"), Some("Gender is required"));
        assert_eq!(errors.get("second_email"), Some("Invalid email address"));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn payload_carries_id_and_skips_empty_optionals() {
        let payload = valid_form().to_payload("s-9");
        assert_eq!(payload.text_value("studentId").as_deref(), Some("s-9"));
        assert_eq!(payload.text_value("postalCode").as_deref(), Some("LS1 5AB"));
        assert!(!payload.has_field("password"));
        assert!(!payload.has_field("secondEmail"));
        assert!(!payload.has_field("img"));
        assert!(!payload.has_field("document"));
    }

    #[test]
    fn from_student_normalises_birth_date() {
        let student = Student {
            full_name: "Ada".into(),
            date_of_birth: Some("2001-05-04T00:00:00.000Z".into()),
            second_email: None,
            ..Default::default()
        };
        let form = StudentFormState::from_student(&student);
        assert_eq!(form.date_of_birth, "2001-05-04");
        assert!(form.password.is_empty());
    }
}
