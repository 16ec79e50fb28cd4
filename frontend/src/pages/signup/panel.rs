use super::{
    utils::{SignUpForm, SIGNUP_ROLES},
    view_model::use_sign_up_view_model,
};
use crate::{
    components::{
        common::Button,
        error::FieldError,
        fields::{field_error, CheckboxField, FileField, SelectField, TextField},
        toast::ToastHost,
    },
    forms::{
        files::{first_file, read_attachment},
        FieldErrors,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignUpPanel() -> impl IntoView {
    let vm = use_sign_up_view_model();
    let form = vm.form;
    let errors: Signal<FieldErrors> = vm.field_errors.into();
    let pending = vm.register_action.pending();

    let text = move |get: fn(&SignUpForm) -> String| Signal::derive(move || form.with(get));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let on_image = Callback::new(move |ev: ev::Event| {
        let Some(file) = first_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_attachment(&file).await {
                Ok(attachment) => form.update(|f| f.img = Some(attachment)),
                Err(err) => log::warn!("{}", err),
            }
        });
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="w-full max-w-2xl bg-surface-elevated border border-border rounded-lg shadow p-8 space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Sign Up"</h2>
                    <p class="text-sm text-fg-muted">"Enter your details to create an account"</p>
                </div>
                <form class="grid grid-cols-1 gap-4 sm:grid-cols-2" on:submit=on_submit novalidate>
                    <div class="sm:col-span-2">
                        <TextField label="Full Name" required=true value=text(|f| f.name.clone())
                            on_input=Callback::new(move |v| form.update(|f| f.name = v))
                            error=field_error(errors, "name") />
                    </div>
                    <TextField label="Email" input_type="email" required=true value=text(|f| f.email.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=field_error(errors, "email") />
                    <TextField label="Password" input_type="password" required=true value=text(|f| f.password.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        error=field_error(errors, "password") />
                    <SelectField label="Role" required=true value=text(|f| f.role.clone()) options=SIGNUP_ROLES
                        on_change=Callback::new(move |v| form.update(|f| f.role = v))
                        error=field_error(errors, "role") />
                    <TextField label="Phone" required=true value=text(|f| f.phone.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                        error=field_error(errors, "phone") />
                    <div class="sm:col-span-2">
                        <TextField label="Address" required=true value=text(|f| f.address.clone())
                            on_input=Callback::new(move |v| form.update(|f| f.address = v))
                            error=field_error(errors, "address") />
                    </div>
                    <div class="sm:col-span-2">
                        <FileField label="Profile image" accept="image/*" on_change=on_image />
                    </div>
                    <div class="sm:col-span-2">
                        <CheckboxField
                            label="I accept the Terms & Conditions"
                            checked=Signal::derive(move || form.with(|f| f.accepted_terms))
                            on_toggle=Callback::new(move |v| form.update(|f| f.accepted_terms = v))
                        />
                        <FieldError message=field_error(errors, "terms") />
                    </div>
                    <div class="sm:col-span-2">
                        <Button class="w-full" loading=pending attr:type="submit">"Sign Up"</Button>
                    </div>
                </form>
                <p class="text-sm text-fg-muted">
                    "Already have an account? "
                    <a href="/signin" class="text-action-primary-bg hover:underline">"Sign in"</a>
                </p>
            </div>
            <ToastHost />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::{notify::provide_notifier, token_store::TokenStore};
    use crate::test_support::{helpers::provide_session, ssr::render_to_string};

    #[test]
    fn sign_up_renders_fields_and_terms() {
        let html = render_to_string(move || {
            provide_session(TokenStore::in_memory());
            provide_notifier();
            view! { <SignUpPanel /> }
        });
        assert!(html.contains("Full Name"));
        assert!(html.contains("SUPER_ADMIN"));
        assert!(html.contains("Terms &amp; Conditions") || html.contains("Terms & Conditions"));
    }
}
