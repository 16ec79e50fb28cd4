use crate::{api::LoginRequest, forms::FieldErrors};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignInForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl SignInForm {
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_reports_both_fields() {
        let errors = SignInForm::default().validate_fields().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = SignInForm {
            email: "ops.example.com".into(),
            password: "secret1".into(),
        };
        let errors = form.validate_fields().unwrap_err();
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let form = SignInForm {
            email: "ops@example.com".into(),
            password: "secret1".into(),
        };
        assert!(form.validate_fields().is_ok());
        let request = SignInForm {
            email: "  ops@example.com ".into(),
            ..form
        }
        .to_request();
        assert_eq!(request.email, "ops@example.com");
    }
}
