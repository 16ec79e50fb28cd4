use crate::{
    api::Availability,
    components::{empty_state::EmptyRow, layout::LoadingSpinner},
    forms::dates::display_date,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

pub fn state_label(availability: &Availability) -> &'static str {
    match (availability.assigned, availability.accepted) {
        (true, _) => "Assigned",
        (false, true) => "Accepted",
        (false, false) => "Pending",
    }
}

#[component]
pub fn AvailabilityTable(
    rows: Signal<Vec<Availability>>,
    loading: Signal<bool>,
    on_assign: Callback<Availability>,
    #[prop(into)] assigning: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Student"</th>
                        <th class=TH>"Homecare"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"City"</th>
                        <th class=TH>"State"</th>
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
                                view! { <EmptyRow colspan=6 message="No availability found" /> }.into_view()
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.availability_id.clone(), row.assigned)
                            children=move |row: Availability| {
                                let assigned = row.assigned;
                                let label = state_label(&row);
                                let target = store_value(row.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{row.student_name.clone().unwrap_or_else(|| row.student_id.clone())}</td>
                                        <td class=TD>{row.home_care_name.clone()}</td>
                                        <td class=TD>{display_date(&row.date)}</td>
                                        <td class=TD>{row.city.clone()}</td>
                                        <td class=TD>{label}</td>
                                        <td class=TD>
                                            <button
                                                type="button"
                                                class="rounded-md px-3 py-1 text-xs font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                disabled=move || assigned || assigning.get()
                                                on:click=move |_| on_assign.call(target.get_value())
                                            >
                                                "Assign"
                                            </button>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_wins_over_accepted() {
        let mut row = Availability {
            accepted: true,
            ..Default::default()
        };
        assert_eq!(state_label(&row), "Accepted");
        row.assigned = true;
        assert_eq!(state_label(&row), "Assigned");
        assert_eq!(state_label(&Availability::default()), "Pending");
    }
}
