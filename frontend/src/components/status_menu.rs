use leptos::*;

/// Inline status changer for a table row. Selecting the current status does nothing.
#[component]
pub fn StatusMenu(
    #[prop(into)] current: String,
    options: &'static [&'static str],
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let current = store_value(current);
    view! {
        <select
            aria-label="Change status"
            class="rounded-md border border-border bg-surface px-2 py-1 text-xs text-fg disabled:opacity-50"
            disabled=move || disabled.get()
            on:change=move |ev| {
                let next = event_target_value(&ev);
                if !next.is_empty() && current.with_value(|c| !c.eq_ignore_ascii_case(&next)) {
                    on_change.call(next);
                }
            }
        >
            {options.iter().map(|opt| {
                let selected = current.with_value(|c| c.eq_ignore_ascii_case(opt));
                view! { <option value=*opt selected=selected>{*opt}</option> }
            }).collect_view()}
        </select>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_menu_lists_options() {
        let html = render_to_string(move || {
            view! {
                <StatusMenu current="ACTIVE" options=&["ACTIVE", "BLOCKED"] on_change=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("ACTIVE"));
        assert!(html.contains("BLOCKED"));
    }
}
