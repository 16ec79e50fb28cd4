use super::{
    components::{
        availability_modal::StudentAvailabilityModal,
        form_modal::StudentFormModal,
        table::{StudentRowActions, StudentsTable},
        view_modal::StudentViewModal,
    },
    view_model::use_students_view_model,
};
use crate::{
    api::STUDENT_STATUSES,
    components::{
        common::ButtonVariant, confirm_dialog::ConfirmDialog, error::InlineErrorMessage, fields::ListToolbar,
        pagination::PaginationControls,
    },
};
use leptos::*;

#[component]
pub fn StudentsPanel() -> impl IntoView {
    let vm = use_students_view_model();
    let list = vm.list;
    let actions = StudentRowActions {
        view: Callback::new(move |id| vm.open_view(id)),
        edit: Callback::new(move |id| vm.open_edit(id)),
        availability: Callback::new(move |id| vm.open_availability(id)),
        delete: Callback::new(move |id| vm.request_delete(id)),
        status: Callback::new(move |(id, status)| vm.change_status(id, status)),
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Students"</h1>
                <p class="text-sm text-fg-muted">"Review student profiles, availability and approval status."</p>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search students"
                statuses=STUDENT_STATUSES
                status_filter=list.status_filter()
                on_status=Callback::new(move |status| list.on_status_change(status))
            />
            <InlineErrorMessage error=list.error() />
            <StudentsTable
                rows=list.items()
                loading=list.loading()
                actions=actions
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
            <StudentFormModal vm=vm />
            <StudentViewModal detail=vm.detail />
            <StudentAvailabilityModal
                modal=vm.availability
                on_assign=Callback::new(move |availability| vm.assign(&availability))
                assigning=vm.assign_action.pending()
            />
            <ConfirmDialog
                confirmation=vm.delete_confirm
                title="Delete student"
                message="Are you sure you want to delete this student?"
                confirm_label="Delete"
                variant=ButtonVariant::Danger
                busy=vm.delete_action.pending()
                on_confirm=Callback::new(move |id| vm.delete(id))
            />
        </div>
    }
}
