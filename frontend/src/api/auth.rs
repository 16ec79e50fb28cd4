use crate::api::client::ApiClient;
use crate::api::multipart::FormPayload;
use crate::api::types::{ApiError, LoginRequest, LoginResponse};

/// Which sign-in endpoint a credential pair is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Admin,
    HomeCare,
}

impl Portal {
    pub fn login_path(&self) -> &'static str {
        match self {
            Portal::Admin => "/admin/auth/login",
            Portal::HomeCare => "/homecare/auth/login",
        }
    }
}

impl ApiClient {
    pub async fn login(
        &self,
        portal: Portal,
        request: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.send_public_json(portal.login_path(), request, "Sign in failed")
            .await?
            .into_data()
    }

    pub async fn register(&self, payload: FormPayload) -> Result<String, ApiError> {
        let envelope = self
            .send_public_multipart("/admin/auth/register", payload, "Registration failed")
            .await?;
        Ok(envelope.message_or("Registration successful"))
    }
}
