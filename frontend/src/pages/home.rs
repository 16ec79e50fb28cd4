use crate::{
    components::layout::nav_links,
    state::auth::{use_session, Role},
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let role = Signal::derive(move || session.state().with(|s| s.role));
    let sections = move || {
        nav_links(role.get())
            .iter()
            .filter(|(href, _)| *href != "/")
            .map(|(href, label)| {
                view! {
                    <a
                        href=*href
                        class="block rounded-lg border border-border bg-surface-elevated p-6 shadow-sm hover:border-action-primary-bg"
                    >
                        <h2 class="text-lg font-semibold text-fg">{*label}</h2>
                        <p class="mt-1 text-sm text-fg-muted">"Open " {label.to_lowercase()}</p>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Dashboard"</h1>
                <p class="text-sm text-fg-muted">
                    {move || match role.get() {
                        Some(Role::SuperAdmin) => "Signed in as super admin.",
                        _ => "Signed in as admin.",
                    }}
                </p>
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">{sections}</div>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let home = move || {
        session
            .state()
            .with(|s| s.role)
            .map(|role| role.home_path())
            .unwrap_or("/signin")
    };
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="text-center space-y-3">
                <p class="text-5xl font-extrabold text-fg">"403"</p>
                <h1 class="text-xl font-semibold text-fg">"Unauthorized"</h1>
                <p class="text-sm text-fg-muted">"Your account does not have access to this page."</p>
                <a href=home class="inline-block text-action-primary-bg hover:underline">"Go back"</a>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="text-center space-y-3">
                <p class="text-5xl font-extrabold text-fg">"404"</p>
                <h1 class="text-xl font-semibold text-fg">"Page not found"</h1>
                <a href="/" class="inline-block text-action-primary-bg hover:underline">"Back to dashboard"</a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_page_context, ssr::render_to_string};

    #[test]
    fn dashboard_links_admin_sections() {
        let html = render_to_string(move || {
            provide_page_context(Role::Admin);
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/homecare\""));
        assert!(html.contains("href=\"/student-availability\""));
        assert!(!html.contains("/student-request"));
    }

    #[test]
    fn unauthorized_links_to_role_home() {
        let html = render_to_string(move || {
            provide_page_context(Role::HomeCare);
            view! { <UnauthorizedPage /> }
        });
        assert!(html.contains("Unauthorized"));
        assert!(html.contains("/student-request"));
    }
}
