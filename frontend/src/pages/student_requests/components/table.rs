use crate::{
    api::StudentJob,
    components::{common::StatusBadge, empty_state::EmptyRow, layout::LoadingSpinner},
    forms::dates::display_date,
    pages::student_requests::view_model::can_accept,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

#[component]
pub fn StudentRequestsTable(
    rows: Signal<Vec<StudentJob>>,
    loading: Signal<bool>,
    on_accept: Callback<StudentJob>,
    #[prop(into)] accepting: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Student"</th>
                        <th class=TH>"Homecare"</th>
                        <th class=TH>"City"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"Status"</th>
                        <th class=TH>"Total Hours"</th>
                        <th class=TH></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=move || {
                            if loading.get() {
                                view! { <tr><td colspan="7"><LoadingSpinner /></td></tr> }.into_view()
                            } else {
                                view! { <EmptyRow colspan=7 message="No student requests found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.attendance_id.clone(), row.status.clone())
                            children=move |row: StudentJob| {
                                let open = can_accept(&row);
                                let target = store_value(row.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{row.student_name.clone().unwrap_or_default()}</td>
                                        <td class=TD>{row.home_care_name.clone()}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class=TD>{display_date(&row.date)}</td>
                                        <td class=TD><StatusBadge status=row.status.clone() /></td>
                                        <td class=TD>{row.formatted_total_hours.clone().unwrap_or_default()}</td>
                                        <td class=TD>
                                            {open.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="rounded-md px-3 py-1 text-xs font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                    disabled=move || accepting.get()
                                                    on:click=move |_| on_accept.call(target.get_value())
                                                >
                                                    "Accept"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn only_due_rows_offer_accept() {
        let html = render_to_string(move || {
            let rows = vec![StudentJob {
                attendance_id: "at1".into(),
                student_name: Some("Ada".into()),
                status: "ACCEPTED".into(),
                ..Default::default()
            }];
            view! {
                <StudentRequestsTable
                    rows=Signal::derive(move || rows.clone())
                    loading=Signal::derive(|| false)
                    on_accept=Callback::new(|_| {})
                    accepting=false
                />
            }
        });
        assert!(html.contains("Ada"));
        assert!(!html.contains(">Accept<"));
    }
}
