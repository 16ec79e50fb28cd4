use crate::{api::Portal, pages::signin::view_model::SignInViewModel};
use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        fields::{field_error, TextField},
    },
    forms::FieldErrors,
};
use leptos::{ev::SubmitEvent, *};

fn portal_heading(portal: Portal) -> (&'static str, &'static str, &'static str) {
    match portal {
        Portal::Admin => ("Admin sign in", "/signin-homecare", "Homecare staff? Sign in here"),
        Portal::HomeCare => ("Homecare sign in", "/signin", "Administrator? Sign in here"),
    }
}

#[component]
pub fn SignInCard(vm: SignInViewModel) -> impl IntoView {
    let (heading, switch_href, switch_label) = portal_heading(vm.portal);
    let pending = vm.sign_in_action.pending();
    let errors: Signal<FieldErrors> = vm.field_errors.into();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated border border-border rounded-lg shadow p-8">
                <div>
                    <h2 class="text-center text-2xl font-bold text-fg">{heading}</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Homecare staffing console"</p>
                </div>
                <form class="space-y-4" on:submit=on_submit novalidate>
                    <TextField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                        error=field_error(errors, "email")
                        required=true
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                        error=field_error(errors, "password")
                        required=true
                    />
                    <InlineErrorMessage error=vm.error.into() />
                    <Button class="w-full" loading=pending attr:type="submit">
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
                <div class="flex justify-between text-sm">
                    <a href=switch_href class="text-action-primary-bg hover:underline">{switch_label}</a>
                    {(vm.portal == Portal::Admin).then(|| view! {
                        <a href="/signup" class="text-action-primary-bg hover:underline">"Create an account"</a>
                    })}
                </div>
            </div>
        </div>
    }
}
