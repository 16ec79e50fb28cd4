use crate::{
    api::StudentJob,
    components::{common::StatusBadge, empty_state::EmptyRow, layout::LoadingSpinner},
    forms::dates::display_date,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

#[component]
pub fn AssignedTable(
    rows: Signal<Vec<StudentJob>>,
    loading: Signal<bool>,
    on_view: Callback<StudentJob>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Student"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"City"</th>
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
                                view! { <tr><td colspan="6"><LoadingSpinner /></td></tr> }.into_view()
                            } else {
                                view! { <EmptyRow colspan=6 message="No assigned students found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.attendance_id.clone(), row.status.clone())
                            children=move |row: StudentJob| {
                                let target = store_value(row.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{row.student_name.clone().unwrap_or_default()}</td>
                                        <td class=TD>{display_date(&row.date)}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class=TD><StatusBadge status=row.status.clone() /></td>
                                        <td class=TD>{row.formatted_total_hours.clone().unwrap_or_default()}</td>
                                        <td class=TD>
                                            <button type="button" class="text-action-primary-bg hover:underline"
                                                on:click=move |_| on_view.call(target.get_value())>"View"</button>
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
