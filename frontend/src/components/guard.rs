use crate::state::auth::{use_session, AuthState, Role};
use leptos::*;

pub const SIGN_IN_PATH: &str = "/signin";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    RedirectToSignIn,
    RedirectToUnauthorized,
    Render,
}

impl GuardDecision {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToSignIn => Some(SIGN_IN_PATH),
            GuardDecision::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
            GuardDecision::Render => None,
        }
    }
}

pub fn evaluate(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if !state.is_authenticated() {
        GuardDecision::RedirectToSignIn
    } else if !state.has_any_role(allowed) {
        GuardDecision::RedirectToUnauthorized
    } else {
        GuardDecision::Render
    }
}

/// Full-page navigation; a no-op off the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::warn!("Redirect to {} failed: {:?}", path, err);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {}", path);
}

#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let decision = create_memo(move |_| state.with(|s| evaluate(s, allowed)));
    create_effect(move |_| {
        if let Some(target) = decision.get().redirect_target() {
            redirect(target);
        }
    });
    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::auth::{ADMIN_ROLES, HOMECARE_ROLES};

    fn state(token: Option<&str>, role: Option<Role>) -> AuthState {
        AuthState {
            token: token.map(str::to_string),
            role,
        }
    }

    #[test]
    fn missing_token_redirects_to_sign_in() {
        assert_eq!(evaluate(&state(None, None), ADMIN_ROLES), GuardDecision::RedirectToSignIn);
        assert_eq!(
            evaluate(&state(None, Some(Role::Admin)), ADMIN_ROLES),
            GuardDecision::RedirectToSignIn
        );
    }

    #[test]
    fn wrong_or_missing_role_redirects_to_unauthorized() {
        assert_eq!(
            evaluate(&state(Some("jwt"), Some(Role::HomeCare)), ADMIN_ROLES),
            GuardDecision::RedirectToUnauthorized
        );
        assert_eq!(
            evaluate(&state(Some("jwt"), None), HOMECARE_ROLES),
            GuardDecision::RedirectToUnauthorized
        );
        assert_eq!(
            evaluate(&state(Some("jwt"), Some(Role::Unknown)), ADMIN_ROLES),
            GuardDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn allowed_role_renders() {
        assert_eq!(
            evaluate(&state(Some("jwt"), Some(Role::SuperAdmin)), ADMIN_ROLES),
            GuardDecision::Render
        );
        assert_eq!(
            evaluate(&state(Some("jwt"), Some(Role::HomeCare)), HOMECARE_ROLES),
            GuardDecision::Render
        );
        assert_eq!(GuardDecision::Render.redirect_target(), None);
        assert_eq!(GuardDecision::RedirectToSignIn.redirect_target(), Some("/signin"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::{ADMIN_ROLES, HOMECARE_ROLES};
    use crate::state::token_store::TokenStore;
    use crate::test_support::helpers::{provide_admin_session, provide_homecare_session, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_children_for_allowed_role() {
        let html = render_to_string(move || {
            provide_admin_session();
            view! { <RequireRole allowed=ADMIN_ROLES><p>"guarded content"</p></RequireRole> }
        });
        assert!(html.contains("guarded content"));
    }

    #[test]
    fn hides_children_for_other_role() {
        let html = render_to_string(move || {
            provide_homecare_session();
            view! { <RequireRole allowed=ADMIN_ROLES><p>"guarded content"</p></RequireRole> }
        });
        assert!(!html.contains("guarded content"));
    }

    #[test]
    fn hides_children_without_token() {
        let html = render_to_string(move || {
            provide_session(TokenStore::in_memory());
            view! { <RequireRole allowed=HOMECARE_ROLES><p>"guarded content"</p></RequireRole> }
        });
        assert!(!html.contains("guarded content"));
    }
}
