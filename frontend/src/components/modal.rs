use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_width = if wide { "max-w-3xl" } else { "max-w-lg" };
    let children = store_value(children);
    let title = store_value(title);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=format!("relative z-[61] w-full {} max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4", panel_width)
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.with_value(|t| t.get())}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

/// Label and value pair for read-only detail views.
#[component]
pub fn DetailItem(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "-".to_string() } else { value };
    view! {
        <div>
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="mt-1 text-sm text-fg break-words">{value}</dd>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_body_when_open() {
        let html = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| true) title="Edit Homecare" on_close=Callback::new(|_| {})>
                    <DetailItem label="City" value="" />
                </Modal>
            }
        });
        assert!(html.contains("Edit Homecare"));
        assert!(html.contains("City"));
        assert!(html.contains(">-<"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| false) title="Edit Homecare" on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(!html.contains("body"));
    }

    #[test]
    fn title_follows_its_signal() {
        let html = render_to_string(move || {
            let (title, set_title) = create_signal("Add Homecare".to_string());
            set_title.set("Edit Homecare".to_string());
            view! {
                <Modal is_open=Signal::derive(|| true) title=title on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(html.contains("Edit Homecare"));
        assert!(!html.contains("Add Homecare"));
    }
}
