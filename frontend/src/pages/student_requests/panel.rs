use super::{components::table::StudentRequestsTable, view_model::use_student_requests_view_model};
use crate::{
    api::STUDENT_REQUEST_STATUSES,
    components::{error::InlineErrorMessage, fields::ListToolbar, pagination::PaginationControls},
};
use leptos::*;

#[component]
pub fn StudentRequestsPanel() -> impl IntoView {
    let vm = use_student_requests_view_model();
    let list = vm.list;

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Student Requests"</h1>
                <p class="text-sm text-fg-muted">"Students proposed for your shifts. Accept a request to confirm the booking."</p>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search requests"
                statuses=STUDENT_REQUEST_STATUSES
                status_filter=list.status_filter()
                on_status=Callback::new(move |status| list.on_status_change(status))
            />
            <InlineErrorMessage error=list.error() />
            <StudentRequestsTable
                rows=list.items()
                loading=list.loading()
                on_accept=Callback::new(move |job| {
                    vm.accept(&job);
                })
                accepting=vm.accept_action.pending()
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
