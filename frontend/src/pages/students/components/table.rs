use crate::{
    api::{Student, STUDENT_STATUSES},
    components::{
        common::StatusBadge, empty_state::EmptyRow, layout::LoadingSpinner, status_menu::StatusMenu,
    },
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";
const LINK: &str = "text-action-primary-bg hover:underline";

/// Row callbacks receive the student id.
#[derive(Clone, Copy)]
pub struct StudentRowActions {
    pub view: Callback<String>,
    pub edit: Callback<String>,
    pub availability: Callback<String>,
    pub delete: Callback<String>,
    pub status: Callback<(String, String)>,
}

#[component]
pub fn StudentsTable(
    rows: Signal<Vec<Student>>,
    loading: Signal<bool>,
    actions: StudentRowActions,
    #[prop(into)] status_busy: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Name"</th>
                        <th class=TH>"Email"</th>
                        <th class=TH>"City"</th>
                        <th class=TH>"Status"</th>
                        <th class=TH>"Change status"</th>
                        <th class=TH>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=move || {
                            if loading.get() {
                                view! { <tr><td colspan="6"><LoadingSpinner /></td></tr> }.into_view()
                            } else {
                                view! { <EmptyRow colspan=6 message="No students found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.student_id.clone(), row.status.clone())
                            children=move |row: Student| {
                                let id = store_value(row.student_id.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{row.full_name.clone()}</td>
                                        <td class=TD>{row.email.clone()}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class=TD><StatusBadge status=row.status.clone() /></td>
                                        <td class=TD>
                                            <StatusMenu
                                                current=row.status.clone()
                                                options=STUDENT_STATUSES
                                                disabled=status_busy
                                                on_change=Callback::new(move |status| {
                                                    actions.status.call((id.get_value(), status))
                                                })
                                            />
                                        </td>
                                        <td class=TD>
                                            <div class="flex gap-3">
                                                <button type="button" class=LINK
                                                    on:click=move |_| actions.view.call(id.get_value())>"View"</button>
                                                <button type="button" class=LINK
                                                    on:click=move |_| actions.edit.call(id.get_value())>"Edit"</button>
                                                <button type="button" class=LINK
                                                    on:click=move |_| actions.availability.call(id.get_value())>"Availability"</button>
                                                <button type="button" class="text-status-error-text hover:underline"
                                                    on:click=move |_| actions.delete.call(id.get_value())>"Delete"</button>
                                            </div>
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
