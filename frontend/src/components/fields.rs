use crate::{components::error::FieldError, forms::FieldErrors};
use leptos::*;

pub fn field_error(errors: Signal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">
                {label}
                {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
            </span>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError message=error />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <textarea
                rows="3"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
            <FieldError message=error />
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: Signal<String>,
    options: &'static [&'static str],
    on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">
                {label}
                {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
            </span>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|opt| view! {
                    <option value=*opt selected=move || value.get() == *opt>{*opt}</option>
                }).collect_view()}
            </select>
            <FieldError message=error />
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2">
            <input
                type="checkbox"
                class="rounded border-border"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
            <span class="text-sm text-fg">{label}</span>
        </label>
    }
}

#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(optional, into)] accept: String,
    on_change: Callback<ev::Event>,
    #[prop(optional, into)] preview: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type="file"
                accept=accept
                class="mt-1 block w-full text-sm text-fg-muted"
                on:change=move |ev| on_change.call(ev)
            />
            {preview.map(|src| view! {
                <Show when=move || src.get().is_some() fallback=|| ()>
                    <img
                        alt="Preview"
                        class="mt-2 h-24 w-24 rounded-md object-cover border border-border"
                        src=move || src.get().unwrap_or_default()
                    />
                </Show>
            })}
        </div>
    }
}

/// Search box and optional status filter above a table.
#[component]
pub fn ListToolbar(
    search_term: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] statuses: &'static [&'static str],
    #[prop(optional, into)] status_filter: Option<Signal<String>>,
    #[prop(optional)] on_status: Option<Callback<String>>,
) -> impl IntoView {
    let status_filter = status_filter.unwrap_or_else(|| Signal::derive(String::new));
    view! {
        <div class="flex flex-col sm:flex-row gap-3 mb-4">
            <input
                type="search"
                class="flex-1 rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                placeholder=placeholder
                prop:value=move || search_term.get()
                on:input=move |ev| on_search.call(event_target_value(&ev))
            />
            {(!statuses.is_empty()).then(|| view! {
                <select
                    aria-label="Filter by status"
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| {
                        if let Some(cb) = on_status {
                            cb.call(event_target_value(&ev));
                        }
                    }
                >
                    <option value="">"All statuses"</option>
                    {statuses.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
            })}
        </div>
    }
}
