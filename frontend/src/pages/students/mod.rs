pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use leptos::*;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! { <panel::StudentsPanel /> }
}
