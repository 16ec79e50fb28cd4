use crate::api::PageMetadata;
use leptos::*;

pub fn page_label(metadata: &PageMetadata) -> String {
    if metadata.total_pages <= 0 {
        return String::new();
    }
    format!("Page {} of {}", metadata.current_page + 1, metadata.total_pages)
}

#[component]
pub fn PaginationControls(
    can_prev: Signal<bool>,
    can_next: Signal<bool>,
    metadata: Signal<PageMetadata>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let button = "px-3 py-1.5 rounded-md border border-border text-sm text-fg hover:bg-surface-muted disabled:opacity-50 disabled:cursor-not-allowed";
    view! {
        <div class="flex items-center justify-between mt-4">
            <span class="text-sm text-fg-muted">{move || metadata.with(page_label)}</span>
            <div class="flex gap-2">
                <button
                    type="button"
                    class=button
                    disabled=move || !can_prev.get() || disabled.get()
                    on:click=move |_| on_prev.call(())
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class=button
                    disabled=move || !can_next.get() || disabled.get()
                    on:click=move |_| on_next.call(())
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_label_is_one_based() {
        let metadata = PageMetadata {
            current_page: 0,
            total_pages: 3,
            ..Default::default()
        };
        assert_eq!(page_label(&metadata), "Page 1 of 3");
        assert_eq!(page_label(&PageMetadata::default()), "");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_page_label_and_buttons() {
        let html = render_to_string(move || {
            let metadata = PageMetadata {
                current_page: 0,
                total_pages: 3,
                next_pagination_token: Some("abc".into()),
                ..Default::default()
            };
            view! {
                <PaginationControls
                    can_prev=Signal::derive(|| false)
                    can_next=Signal::derive(|| true)
                    metadata=Signal::derive(move || metadata.clone())
                    on_prev=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 1 of 3"));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }
}
