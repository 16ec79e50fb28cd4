use crate::{
    api::{Attachment, FormPayload, Homecare},
    forms::{
        dates::opt_date_input,
        validation::{optional_number, optional_password, uk_country, UK_MOBILE_RE, UK_POSTCODE_RE},
        FieldErrors, ModalMode,
    },
};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct HomecareFormState {
    #[validate(length(min = 1, message = "Homecare name is required"))]
    pub home_care_name: String,
    #[validate(length(min = 1, message = "Provider name is required"))]
    pub provider_name: String,
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub registration_number: String,
    #[validate(length(min = 1, message = "Service type is required"))]
    pub service_type: String,
    #[validate(length(min = 1, message = "Address Line 1 is required"))]
    pub address_line1: String,
    pub address_line2: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(
        length(min = 1, message = "Postcode is required"),
        regex(path = *UK_POSTCODE_RE, message = "Postcode must be a valid UK format (e.g. SW1A 1AA)")
    )]
    pub postcode: String,
    #[validate(
        length(min = 1, message = "Country is required"),
        custom(function = "uk_country")
    )]
    pub country: String,
    pub full_address: String,
    #[validate(
        length(min = 1, message = "Phone number is required"),
        regex(path = *UK_MOBILE_RE, message = "Phone must be a valid UK mobile number (e.g. +447912345678 or 07123456789)")
    )]
    pub phone: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(custom(function = "optional_password"))]
    pub password: String,
    pub website: String,
    pub contact_person: String,
    pub regulated_by_cqc: bool,
    pub registration_date: String,
    #[validate(custom(function = "optional_number"))]
    pub latitude: String,
    #[validate(custom(function = "optional_number"))]
    pub longitude: String,
    pub active: bool,
    pub notes: String,
    pub img: Option<Attachment>,
}

impl Default for HomecareFormState {
    fn default() -> Self {
        Self {
            home_care_name: String::new(),
            provider_name: String::new(),
            registration_number: String::new(),
            service_type: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            postcode: String::new(),
            country: "UK".to_string(),
            full_address: String::new(),
            phone: String::new(),
            email: String::new(),
            password: String::new(),
            website: String::new(),
            contact_person: String::new(),
            regulated_by_cqc: false,
            registration_date: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            active: true,
            notes: String::new(),
            img: None,
        }
    }
}

impl HomecareFormState {
    pub fn from_homecare(h: &Homecare) -> Self {
        Self {
            home_care_name: h.home_care_name.clone(),
            provider_name: h.provider_name.clone(),
            registration_number: h.registration_number.clone(),
            service_type: h.service_type.clone(),
            address_line1: h.address_line1.clone(),
            address_line2: h.address_line2.clone().unwrap_or_default(),
            city: h.city.clone(),
            postcode: h.postcode.clone(),
            country: h.country.clone(),
            full_address: h.full_address.clone().unwrap_or_default(),
            phone: h.phone.clone(),
            email: h.email.clone(),
            password: String::new(),
            website: h.website.clone().unwrap_or_default(),
            contact_person: h.contact_person.clone().unwrap_or_default(),
            regulated_by_cqc: h.regulated_by_cqc,
            registration_date: opt_date_input(h.registration_date.as_deref()),
            latitude: h.latitude.clone().unwrap_or_default(),
            longitude: h.longitude.clone().unwrap_or_default(),
            active: h.active,
            notes: h.notes.clone().unwrap_or_default(),
            img: None,
        }
    }

    /// Password is mandatory when creating and ignored when editing.
    pub fn validate_for(&self, mode: &ModalMode) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(errors),
        };
        match mode {
            ModalMode::Create if self.password.is_empty() => {
                errors.insert("password", "Password is required");
            }
            ModalMode::Edit(_) => errors.remove("password"),
            _ => {}
        }
        errors.into_result()
    }

    pub fn to_payload(&self, mode: &ModalMode) -> FormPayload {
        let mut payload = FormPayload::new();
        if let ModalMode::Edit(id) = mode {
            payload = payload.field("homeCareId", id.as_str());
        }
        payload = payload
            .field("homeCareName", self.home_care_name.trim())
            .field("providerName", self.provider_name.trim())
            .field("registrationNumber", self.registration_number.trim())
            .field("serviceType", self.service_type.trim())
            .field("addressLine1", self.address_line1.trim())
            .field("addressLine2", self.address_line2.trim())
            .field("city", self.city.trim())
            .field("postcode", self.postcode.trim().to_uppercase())
            .field("country", self.country.as_str())
            .field("fullAddress", self.full_address.trim())
            .field("phone", self.phone.trim())
            .field("email", self.email.trim());
        if *mode == ModalMode::Create {
            payload = payload.field("password", self.password.as_str());
        }
        payload
            .field("website", self.website.trim())
            .field("contactPerson", self.contact_person.trim())
            .field("regulatedByCQC", self.regulated_by_cqc)
            .field("registrationDate", self.registration_date.as_str())
            .field("latitude", self.latitude.trim())
            .field("longitude", self.longitude.trim())
            .field("active", self.active)
            .field("notes", self.notes.trim())
            .field("img", self.img.clone())
    }
}
