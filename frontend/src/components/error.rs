use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Backend validation messages carried in `details.errors`, as a list or a field map.
fn detail_messages(details: Option<&Value>) -> Vec<String> {
    match details.and_then(|d| d.get("errors")) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::Object(fields)) => fields
            .iter()
            .filter_map(|(field, msg)| msg.as_str().map(|m| format!("{}: {}", field, m)))
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = detail_messages(e.details.as_ref());
                    if !messages.is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view();
                    }
                    if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Message under a form input.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-1 text-xs text-status-error-text">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError::from_status(400, "Validation failed").with_details(json!({
                "errors": ["Name is required", "Email is invalid"]
            }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Name is required"));
        assert!(html.contains("Email is invalid"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Request failed")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn field_error_renders_only_with_message() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <FieldError message=Signal::derive(|| Some("Postcode is invalid".to_string())) />
                    <FieldError message=Signal::derive(|| None::<String>) />
                </div>
            }
        });
        assert_eq!(html.matches("text-status-error-text").count(), 1);
        assert!(html.contains("Postcode is invalid"));
    }
}
