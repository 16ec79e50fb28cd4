use super::{
    components::{table::AssignedTable, view_modal::AssignedViewModal},
    view_model::use_assigned_view_model,
};
use crate::components::{error::InlineErrorMessage, fields::ListToolbar, pagination::PaginationControls};
use leptos::*;

#[component]
pub fn AssignedPanel() -> impl IntoView {
    let vm = use_assigned_view_model();
    let list = vm.list;

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Assigned Students"</h1>
                <p class="text-sm text-fg-muted">"Students booked for your shifts."</p>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search assigned students"
            />
            <InlineErrorMessage error=list.error() />
            <AssignedTable
                rows=list.items()
                loading=list.loading()
                on_view=Callback::new(move |job| vm.detail.show(job))
            />
            <PaginationControls
                metadata=list.metadata()
                can_prev=list.can_prev()
                can_next=list.can_next()
                on_prev=Callback::new(move |_| list.prev_page())
                on_next=Callback::new(move |_| list.next_page())
                disabled=list.loading()
            />
            <AssignedViewModal detail=vm.detail />
        </div>
    }
}
