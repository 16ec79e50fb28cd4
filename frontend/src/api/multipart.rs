use reqwest::multipart::{Form, Part};

use super::types::ApiError;

/// File contents read from an `<input type="file">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    File(Option<Attachment>),
    Missing,
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Missing)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Option<Attachment>> for FieldValue {
    fn from(value: Option<Attachment>) -> Self {
        FieldValue::File(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PayloadEntry {
    Text(String),
    File(Attachment),
}

/// Ordered multipart fields. Empty text, absent values and missing files never reach the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, FieldValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn entries(&self) -> Vec<(String, PayloadEntry)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| {
                let entry = match value {
                    FieldValue::Text(text) if text.is_empty() => return None,
                    FieldValue::Text(text) => PayloadEntry::Text(text.clone()),
                    FieldValue::Bool(flag) => {
                        PayloadEntry::Text(if *flag { "true" } else { "false" }.to_string())
                    }
                    FieldValue::File(Some(file)) if !file.file_name.is_empty() => {
                        PayloadEntry::File(file.clone())
                    }
                    FieldValue::File(_) | FieldValue::Missing => return None,
                };
                Some((name.clone(), entry))
            })
            .collect()
    }

    pub fn text_value(&self, name: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find_map(|(key, entry)| match entry {
                PayloadEntry::Text(text) if key == name => Some(text),
                _ => None,
            })
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.entries().iter().any(|(key, _)| key == name)
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, entry) in self.entries() {
            form = match entry {
                PayloadEntry::Text(text) => form.text(name, text),
                PayloadEntry::File(file) => {
                    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                    if !file.mime_type.is_empty() {
                        part = part.mime_str(&file.mime_type).map_err(|e| {
                            ApiError::validation(format!("Unsupported file type: {}", e))
                        })?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
