use super::{components::form::SignInCard, view_model::use_sign_in_view_model};
use crate::api::Portal;
use leptos::*;

#[component]
pub fn SignInPanel(portal: Portal) -> impl IntoView {
    let vm = use_sign_in_view_model(portal);
    view! { <SignInCard vm=vm /> }
}
