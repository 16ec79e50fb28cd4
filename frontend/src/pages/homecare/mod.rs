pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use leptos::*;

#[component]
pub fn HomecarePage() -> impl IntoView {
    view! { <panel::HomecarePanel /> }
}
