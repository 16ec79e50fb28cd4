use crate::{
    api::{ApiClient, ApiError, LoginRequest, Portal},
    state::token_store::TokenStore,
    utils::storage::StorageError,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    HomeCare,
    Unknown,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Role::SuperAdmin,
            "ADMIN" => Role::Admin,
            "HOME_CARE" => Role::HomeCare,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::HomeCare => "HOME_CARE",
            Role::Unknown => "UNKNOWN",
        }
    }

    /// Landing page after sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::HomeCare => "/student-request",
            _ => "/",
        }
    }
}

pub const ADMIN_ROLES: &[Role] = &[Role::SuperAdmin, Role::Admin];
pub const HOMECARE_ROLES: &[Role] = &[Role::HomeCare];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl AuthState {
    pub fn from_store(tokens: &TokenStore) -> Self {
        Self {
            token: tokens.token(),
            role: tokens.role().map(|raw| Role::parse(&raw)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.role.map(|role| allowed.contains(&role)).unwrap_or(false)
    }
}

/// Root-scoped view of the persisted token and role. All reads and writes go through here.
#[derive(Clone, Copy)]
pub struct Session {
    tokens: StoredValue<TokenStore>,
    state: RwSignal<AuthState>,
}

impl Session {
    pub fn new(tokens: TokenStore) -> Self {
        let state = create_rw_signal(AuthState::from_store(&tokens));
        Self {
            tokens: store_value(tokens),
            state,
        }
    }

    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn tokens(&self) -> TokenStore {
        self.tokens.get_value()
    }

    pub fn sign_in(&self, token: &str, role: Role) -> Result<(), StorageError> {
        let tokens = self.tokens.get_value();
        tokens.set_token(token)?;
        tokens.set_role(role.as_str())?;
        self.state.set(AuthState {
            token: Some(token.to_string()),
            role: Some(role),
        });
        log::info!("Signed in as {}", role.as_str());
        Ok(())
    }

    pub fn sign_out(&self) {
        let tokens = self.tokens.get_value();
        if let Err(err) = tokens.remove_token().and_then(|_| tokens.remove_role()) {
            log::warn!("Failed to clear session storage: {}", err);
        }
        self.state.set(AuthState::default());
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    provide_context(Session::new(api.tokens()));
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| Session::new(TokenStore::detect()))
}

pub async fn sign_in_request(
    portal: Portal,
    request: LoginRequest,
    api: &ApiClient,
    session: Session,
) -> Result<Role, ApiError> {
    let response = api.login(portal, &request).await?;
    if response.access_token.is_empty() {
        return Err(ApiError::unknown("Sign-in response did not include a token"));
    }
    let role = Role::parse(&response.role);
    session
        .sign_in(&response.access_token, role)
        .map_err(|err| ApiError::unknown(err.to_string()))?;
    Ok(role)
}

pub fn use_sign_in_action(portal: Portal) -> Action<LoginRequest, Result<Role, ApiError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let api = Rc::new(api);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { sign_in_request(portal, payload, &api, session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn sign_in_request_persists_token_and_role() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/admin/auth/login")
                .json_body(json!({ "email": "ops@example.com", "password": "secret1" }));
            then.status(200).json_body(json!({
                "message": "Welcome",
                "data": { "accessToken": "jwt-admin", "role": "SUPER_ADMIN" }
            }));
        });

        let runtime = create_runtime();
        let tokens = TokenStore::in_memory();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_tokens(tokens.clone());
        let session = Session::new(tokens.clone());

        let role = sign_in_request(
            Portal::Admin,
            LoginRequest {
                email: "ops@example.com".into(),
                password: "secret1".into(),
            },
            &api,
            session,
        )
        .await
        .unwrap();

        assert_eq!(role, Role::SuperAdmin);
        assert_eq!(tokens.token().as_deref(), Some("jwt-admin"));
        assert!(session.snapshot().is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_request_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/homecare/auth/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        });

        let runtime = create_runtime();
        let tokens = TokenStore::in_memory();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_tokens(tokens.clone());
        let session = Session::new(tokens.clone());

        let err = sign_in_request(
            Portal::HomeCare,
            LoginRequest {
                email: "care@example.com".into(),
                password: "wrong-pass".into(),
            },
            &api,
            session,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Invalid credentials");
        assert!(err.is_unauthorized());
        assert!(tokens.token().is_none());
        runtime.dispose();
    }
}
