use super::{repository::SignUpRepository, utils::SignUpForm};
use crate::{
    api::{ApiClient, ApiError, FormPayload},
    components::guard::{redirect, SIGN_IN_PATH},
    forms::FieldErrors,
    state::notify::{use_notifier, TOAST_AUTO_CLOSE_MS},
    utils::timer::sleep_ms,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SignUpViewModel {
    pub form: RwSignal<SignUpForm>,
    pub field_errors: RwSignal<FieldErrors>,
    pub register_action: Action<FormPayload, Result<String, ApiError>>,
}

impl SignUpViewModel {
    pub fn submit(&self) -> bool {
        if self.register_action.pending().get_untracked() {
            return false;
        }
        let form = self.form.get_untracked();
        if let Err(errors) = form.validate_fields() {
            self.field_errors.set(errors);
            return false;
        }
        self.field_errors.set(FieldErrors::default());
        self.register_action.dispatch(form.to_payload());
        true
    }
}

pub fn use_sign_up_view_model() -> SignUpViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignUpRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let form = create_rw_signal(SignUpForm::default());
    let field_errors = create_rw_signal(FieldErrors::default());

    let register_action = create_action(move |payload: &FormPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.register(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(message) => {
                    notifier.success(message);
                    spawn_local(async move {
                        sleep_ms(TOAST_AUTO_CLOSE_MS).await;
                        redirect(SIGN_IN_PATH);
                    });
                }
                Err(err) => notifier.error(err.error),
            }
        }
    });

    SignUpViewModel {
        form,
        field_errors,
        register_action,
    }
}
