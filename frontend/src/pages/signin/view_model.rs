use super::utils::SignInForm;
use crate::{
    api::{ApiError, LoginRequest, Portal},
    components::guard::redirect,
    forms::FieldErrors,
    state::auth::{self, Role},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignInViewModel {
    pub portal: Portal,
    pub form: RwSignal<SignInForm>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub sign_in_action: Action<LoginRequest, Result<Role, ApiError>>,
}

impl SignInViewModel {
    /// Validates locally and dispatches the sign-in request. Returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.sign_in_action.pending().get_untracked() {
            return false;
        }
        let form = self.form.get_untracked();
        if let Err(errors) = form.validate_fields() {
            self.field_errors.set(errors);
            return false;
        }
        self.field_errors.set(FieldErrors::default());
        self.error.set(None);
        self.sign_in_action.dispatch(form.to_request());
        true
    }
}

pub fn use_sign_in_view_model(portal: Portal) -> SignInViewModel {
    let form = create_rw_signal(SignInForm::default());
    let field_errors = create_rw_signal(FieldErrors::default());
    let error = create_rw_signal(None::<ApiError>);
    let sign_in_action = auth::use_sign_in_action(portal);

    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(role) => {
                    error.set(None);
                    form.update(|f| f.password.clear());
                    redirect(role.home_path());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignInViewModel {
        portal,
        form,
        field_errors,
        error,
        sign_in_action,
    }
}
