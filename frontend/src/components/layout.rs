use crate::{
    components::{guard::{redirect, SIGN_IN_PATH}, toast::ToastHost},
    state::auth::{use_session, Role},
};
use leptos::*;

pub type NavLink = (&'static str, &'static str);

const ADMIN_LINKS: &[NavLink] = &[
    ("/", "Dashboard"),
    ("/homecare", "Homecares"),
    ("/students", "Students"),
    ("/homecare-request", "Job Requests"),
    ("/student-availability", "Availability"),
];

const HOMECARE_LINKS: &[NavLink] = &[
    ("/student-request", "Student Requests"),
    ("/student-assigned", "Assigned Students"),
];

pub fn nav_links(role: Option<Role>) -> &'static [NavLink] {
    match role {
        Some(Role::SuperAdmin | Role::Admin) => ADMIN_LINKS,
        Some(Role::HomeCare) => HOMECARE_LINKS,
        _ => &[],
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let (menu_open, set_menu_open) = create_signal(false);
    let links = move || nav_links(state.with(|s| s.role));
    let role_label = move || state.with(|s| s.role.map(|r| r.as_str()).unwrap_or_default());

    let on_sign_out = move |_| {
        set_menu_open.set(false);
        session.sign_out();
        redirect(SIGN_IN_PATH);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"Homecare Console"</h1>
                        <span class="text-xs text-fg-muted">{role_label}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {move || links().iter().map(|(href, label)| view! {
                                <a href=*href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {*label}
                                </a>
                            }).collect_view()}
                            <button
                                on:click=on_sign_out
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign out"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || links().iter().map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }).collect_view()}
                            <button
                                on:click=on_sign_out
                                class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">{children()}</div>
            </main>
            <ToastHost />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
