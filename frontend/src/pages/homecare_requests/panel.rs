use super::{components::table::JobRequestsTable, view_model::use_job_requests_view_model};
use crate::{
    api::JOB_REQUEST_STATUSES,
    components::{error::InlineErrorMessage, fields::ListToolbar, pagination::PaginationControls},
};
use leptos::*;

#[component]
pub fn JobRequestsPanel() -> impl IntoView {
    let vm = use_job_requests_view_model();
    let list = vm.list;

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Homecare Requests"</h1>
                <p class="text-sm text-fg-muted">"Approve or reject staffing requests raised by homecares."</p>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search requests"
                statuses=JOB_REQUEST_STATUSES
                status_filter=list.status_filter()
                on_status=Callback::new(move |status| list.on_status_change(status))
            />
            <InlineErrorMessage error=list.error() />
            <JobRequestsTable
                rows=list.items()
                loading=list.loading()
                on_status=Callback::new(move |(id, status)| vm.change_status(id, status))
                status_busy=vm.status_action.pending()
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::Role;
    use crate::test_support::{helpers::provide_page_context, ssr::render_to_string};

    #[test]
    fn panel_offers_request_status_filter() {
        let html = render_to_string(move || {
            provide_page_context(Role::SuperAdmin);
            view! { <JobRequestsPanel /> }
        });
        assert!(html.contains("Homecare Requests"));
        assert!(html.contains("REJECTED"));
        assert!(html.contains("No job requests found"));
    }
}
