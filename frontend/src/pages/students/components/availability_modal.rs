use crate::{
    api::Availability,
    components::{empty_state::EmptyState, layout::LoadingSpinner, modal::Modal},
    forms::dates::display_date,
    pages::students::view_model::AvailabilityModal,
};
use leptos::*;

const TH: &str = "px-3 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TD: &str = "px-3 py-2 text-sm text-fg";

fn flag_badge(on: bool, yes: &'static str, no: &'static str) -> impl IntoView {
    let class = if on {
        "inline-flex rounded-full px-2 py-0.5 text-xs font-medium bg-status-success-bg text-status-success-text"
    } else {
        "inline-flex rounded-full px-2 py-0.5 text-xs font-medium bg-status-warning-bg text-status-warning-text"
    };
    view! { <span class=class>{if on { yes } else { no }}</span> }
}

#[component]
pub fn StudentAvailabilityModal(
    modal: AvailabilityModal,
    on_assign: Callback<Availability>,
    #[prop(into)] assigning: MaybeSignal<bool>,
) -> impl IntoView {
    let rows = modal.rows;
    let items = Signal::derive(move || rows.record.get().unwrap_or_default());
    view! {
        <Modal is_open=modal.is_open() title="Student Availability" on_close=Callback::new(move |_| modal.close()) wide=true>
            <Show when=move || !rows.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| view! {
                        <EmptyState title="No availability" description="This student has not shared any availability yet." />
                    }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=TH>"Date"</th>
                                <th class=TH>"Homecare"</th>
                                <th class=TH>"Accepted"</th>
                                <th class=TH>"Assigned"</th>
                                <th class=TH>"City"</th>
                                <th class=TH></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || items.get()
                                key=|a| (a.availability_id.clone(), a.assigned)
                                children=move |a: Availability| {
                                    let assigned = a.assigned;
                                    let row = store_value(a.clone());
                                    view! {
                                        <tr>
                                            <td class=TD>{display_date(&a.date)}</td>
                                            <td class=TD>{a.home_care_name.clone()}</td>
                                            <td class=TD>{flag_badge(a.accepted, "Accepted", "Pending")}</td>
                                            <td class=TD>{flag_badge(assigned, "Assigned", "Not assigned")}</td>
                                            <td class=TD>{a.city.clone()}</td>
                                            <td class=TD>
                                                <button
                                                    type="button"
                                                    class="rounded-md px-3 py-1 text-xs font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                    disabled=move || assigned || assigning.get()
                                                    on:click=move |_| on_assign.call(row.get_value())
                                                >
                                                    "Assign"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </Modal>
    }
}
