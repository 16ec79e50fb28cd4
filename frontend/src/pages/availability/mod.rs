pub mod components;
pub mod panel;
pub mod repository;
pub mod view_model;

use leptos::*;

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    view! { <panel::AvailabilityPanel /> }
}
