use crate::{
    api::{JobRequest, JOB_REQUEST_STATUSES},
    components::{common::StatusBadge, empty_state::EmptyRow, layout::LoadingSpinner, status_menu::StatusMenu},
    forms::dates::display_date,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

#[component]
pub fn JobRequestsTable(
    rows: Signal<Vec<JobRequest>>,
    loading: Signal<bool>,
    on_status: Callback<(String, String)>,
    #[prop(into)] status_busy: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Homecare"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"City"</th>
                        <th class=TH>"Notes"</th>
                        <th class=TH>"Status"</th>
                        <th class=TH>"Change status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=move || {
                            if loading.get() {
                                view! { <tr><td colspan="6"><LoadingSpinner /></td></tr> }.into_view()
                            } else {
                                view! { <EmptyRow colspan=6 message="No job requests found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.request_id.clone(), row.status.clone())
                            children=move |row: JobRequest| {
                                let id = row.request_id.clone();
                                view! {
                                    <tr>
                                        <td class=TD>{row.home_care_name.clone()}</td>
                                        <td class=TD>{display_date(&row.date)}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class="px-4 py-3 text-sm text-fg-muted">{row.notes.clone().unwrap_or_default()}</td>
                                        <td class=TD><StatusBadge status=row.status.clone() /></td>
                                        <td class=TD>
                                            <StatusMenu
                                                current=row.status.clone()
                                                options=JOB_REQUEST_STATUSES
                                                disabled=status_busy
                                                on_change=Callback::new(move |status| on_status.call((id.clone(), status)))
                                            />
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
