use crate::{
    api::{Homecare, HOMECARE_STATUSES},
    components::{
        common::StatusBadge, empty_state::EmptyRow, layout::LoadingSpinner, status_menu::StatusMenu,
    },
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

#[component]
pub fn HomecareTable(
    rows: Signal<Vec<Homecare>>,
    loading: Signal<bool>,
    on_view: Callback<String>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_status: Callback<(String, String)>,
    #[prop(into)] status_busy: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Image"</th>
                        <th class=TH>"Name"</th>
                        <th class=TH>"Provider"</th>
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
                                view! { <tr><td colspan="7"><LoadingSpinner /></td></tr> }.into_view()
                            } else {
                                view! { <EmptyRow colspan=7 message="No homecares found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.home_care_id.clone(), row.status.clone())
                            children=move |row: Homecare| {
                                let id = row.home_care_id.clone();
                                let (view_id, edit_id, delete_id, status_id) =
                                    (id.clone(), id.clone(), id.clone(), id);
                                view! {
                                    <tr>
                                        <td class=TD>
                                            {match row.img.clone().filter(|src| !src.is_empty()) {
                                                Some(src) => view! {
                                                    <img src=src alt="Homecare" class="h-10 w-10 rounded-full object-cover" />
                                                }.into_view(),
                                                None => view! {
                                                    <span class="inline-block h-10 w-10 rounded-full bg-surface-muted"></span>
                                                }.into_view(),
                                            }}
                                        </td>
                                        <td class=TD>{row.home_care_name.clone()}</td>
                                        <td class=TD>{row.provider_name.clone()}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class=TD><StatusBadge status=row.status.clone() /></td>
                                        <td class=TD>
                                            <StatusMenu
                                                current=row.status.clone()
                                                options=HOMECARE_STATUSES
                                                disabled=status_busy
                                                on_change=Callback::new(move |status| {
                                                    on_status.call((status_id.clone(), status))
                                                })
                                            />
                                        </td>
                                        <td class=TD>
                                            <div class="flex gap-3">
                                                <button type="button" class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_view.call(view_id.clone())>"View"</button>
                                                <button type="button" class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(edit_id.clone())>"Edit"</button>
                                                <button type="button" class="text-status-error-text hover:underline"
                                                    on:click=move |_| on_delete.call(delete_id.clone())>"Delete"</button>
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
