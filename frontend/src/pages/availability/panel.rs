use super::{components::table::AvailabilityTable, view_model::use_availability_view_model};
use crate::components::{error::InlineErrorMessage, fields::ListToolbar, pagination::PaginationControls};
use leptos::*;

#[component]
pub fn AvailabilityPanel() -> impl IntoView {
    let vm = use_availability_view_model();
    let list = vm.list;

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Student Availability"</h1>
                <p class="text-sm text-fg-muted">"Assign available students to homecare shifts."</p>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search by student, homecare or city"
            />
            <InlineErrorMessage error=list.error() />
            <AvailabilityTable
                rows=list.items()
                loading=list.loading()
                on_assign=Callback::new(move |availability| {
                    vm.assign(availability);
                })
                assigning=vm.assign_action.pending()
            />
            <PaginationControls
                metadata=list.metadata()
                can_prev=list.can_prev()
                can_next=list.can_next()
                on_prev=Callback::new(move |_| list.prev_page())
                on_next=Callback::new(move |_| list.next_page())
                disabled=list.loading()
            />
        </div>
    }
}
