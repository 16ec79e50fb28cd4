use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SignInPanel;
use crate::api::Portal;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <SignInPanel portal=Portal::Admin /> }
}

#[component]
pub fn HomecareSignInPage() -> impl IntoView {
    view! { <SignInPanel portal=Portal::HomeCare /> }
}
