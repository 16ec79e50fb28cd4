use crate::state::notify::{use_notifier, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

/// Renders queued toasts in the top-right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();
    view! {
        <div class="fixed top-4 right-4 z-[80] space-y-2 w-80" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            class=format!("flex items-start justify-between gap-3 rounded-md border px-4 py-3 shadow {}", toast_class(toast.kind))
                        >
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-75 hover:opacity-100"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
