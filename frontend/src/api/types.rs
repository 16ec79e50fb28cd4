use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::pagination::{Page, PageMetadata};

pub const HOMECARE_STATUSES: &[&str] = &["ACTIVE", "BLOCKED"];
pub const STUDENT_STATUSES: &[&str] = &["APPROVED", "BLOCKED", "REJECTED", "PENDING"];
pub const JOB_REQUEST_STATUSES: &[&str] = &["PENDING", "APPROVED", "REJECTED"];
pub const STUDENT_REQUEST_STATUSES: &[&str] = &["DUE", "ACCEPTED"];
pub const STUDENT_REQUEST_ACCEPTED: &str = "ACCEPTED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        let code = match status {
            400 | 422 => "VALIDATION_ERROR".to_string(),
            401 => "UNAUTHORIZED".to_string(),
            403 => "FORBIDDEN".to_string(),
            404 => "NOT_FOUND".to_string(),
            other => format!("HTTP_{}", other),
        };
        Self::with_code(msg, code)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }
}

/// Response body shared by every backend endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub message: Option<String>,
    pub data: Option<Value>,
    pub metadata: Option<PageMetadata>,
}

impl Envelope {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let data = self
            .data
            .filter(|v| !v.is_null())
            .ok_or_else(|| ApiError::not_found("Response did not include any data"))?;
        serde_json::from_value(data)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Extracts the collection stored under `key` in `data`; a missing collection is an empty page.
    pub fn into_page<T: DeserializeOwned>(self, key: &str) -> Result<Page<T>, ApiError> {
        let items = match self.data.as_ref().and_then(|data| data.get(key)) {
            Some(Value::Null) | None => Vec::new(),
            Some(raw) => serde_json::from_value(raw.clone())
                .map_err(|e| ApiError::unknown(format!("Failed to parse {}: {}", key, e)))?,
        };
        Ok(Page {
            items,
            metadata: self.metadata.unwrap_or_default(),
        })
    }
}

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_string(deserializer)?.unwrap_or_default())
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Homecare {
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_id: String,
    pub img: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub provider_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub registration_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub service_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address_line1: String,
    pub address_line2: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub postcode: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    pub full_address: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    #[serde(rename = "regulatedByCQC", deserialize_with = "lenient::bool")]
    pub regulated_by_cqc: bool,
    pub registration_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub latitude: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub longitude: Option<String>,
    #[serde(deserialize_with = "lenient::bool")]
    pub active: bool,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde(deserialize_with = "lenient::string")]
    pub student_id: String,
    #[serde(alias = "name", deserialize_with = "lenient::string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    pub second_email: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gender: String,
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub nationality: String,
    #[serde(deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub postal_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    pub profile_image: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub document_expiry: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Availability {
    #[serde(deserialize_with = "lenient::string")]
    pub availability_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub student_id: String,
    pub student_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::bool")]
    pub accepted: bool,
    #[serde(deserialize_with = "lenient::bool")]
    pub assigned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRequest {
    #[serde(alias = "id", deserialize_with = "lenient::string")]
    pub request_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

/// A student's shift with a homecare, as seen from the homecare side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentJob {
    #[serde(deserialize_with = "lenient::string")]
    pub attendance_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub home_care_name: String,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    pub formatted_total_hours: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub total_hours: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub total_minutes: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomecareStatusUpdate {
    pub home_care_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusUpdate {
    pub student_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRequestStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequestStatusUpdate {
    pub attendance_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAvailability {
    pub date: String,
    pub student_id: String,
    pub home_care_id: String,
}

impl From<&Availability> for AssignAvailability {
    fn from(availability: &Availability) -> Self {
        Self {
            date: availability.date.clone(),
            student_id: availability.student_id.clone(),
            home_care_id: availability.home_care_id.clone(),
        }
    }
}
