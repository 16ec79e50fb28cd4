#[cfg(test)]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::{
        api::ApiClient,
        state::{
            auth::{Role, Session},
            notify::{provide_notifier, Notifier},
            token_store::TokenStore,
        },
    };
    use leptos::*;

    pub fn signed_in_tokens(role: Role) -> TokenStore {
        let tokens = TokenStore::in_memory();
        let _ = tokens.set_token("test-token");
        let _ = tokens.set_role(role.as_str());
        tokens
    }

    /// Provides an `ApiClient` and `Session` sharing the same in-memory tokens.
    pub fn provide_session(tokens: TokenStore) -> Session {
        let api = ApiClient::new_with_base_url("http://localhost:9/api").with_tokens(tokens.clone());
        provide_context(api);
        let session = Session::new(tokens);
        provide_context(session);
        session
    }

    pub fn provide_admin_session() -> Session {
        provide_session(signed_in_tokens(Role::Admin))
    }

    pub fn provide_homecare_session() -> Session {
        provide_session(signed_in_tokens(Role::HomeCare))
    }

    pub fn provide_page_context(role: Role) -> (Session, Notifier) {
        let session = provide_session(signed_in_tokens(role));
        (session, provide_notifier())
    }
}
