use super::{
    components::{form_modal::HomecareFormModal, table::HomecareTable, view_modal::HomecareViewModal},
    view_model::use_homecare_view_model,
};
use crate::{
    api::HOMECARE_STATUSES,
    components::{
        common::{Button, ButtonVariant}, confirm_dialog::ConfirmDialog, error::InlineErrorMessage, fields::ListToolbar,
        pagination::PaginationControls,
    },
};
use leptos::*;

#[component]
pub fn HomecarePanel() -> impl IntoView {
    let vm = use_homecare_view_model();
    let list = vm.list;

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Homecares"</h1>
                    <p class="text-sm text-fg-muted">"Manage registered homecares and their status."</p>
                </div>
                <Button on:click=move |_| vm.open_create() attr:type="button">"Add Homecare"</Button>
            </div>
            <ListToolbar
                search_term=list.search_term()
                on_search=Callback::new(move |text| list.on_search_change(text))
                placeholder="Search homecares"
                statuses=HOMECARE_STATUSES
                status_filter=list.status_filter()
                on_status=Callback::new(move |status| list.on_status_change(status))
            />
            <InlineErrorMessage error=list.error() />
            <HomecareTable
                rows=list.items()
                loading=list.loading()
                on_view=Callback::new(move |id| vm.open_view(id))
                on_edit=Callback::new(move |id| vm.open_edit(id))
                on_delete=Callback::new(move |id| vm.request_delete(id))
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
            <HomecareFormModal vm=vm />
            <HomecareViewModal detail=vm.detail />
            <ConfirmDialog
                confirmation=vm.delete_confirm
                title="Delete homecare"
                message="Are you sure you want to delete this homecare? This cannot be undone."
                confirm_label="Delete"
                variant=ButtonVariant::Danger
                busy=vm.delete_action.pending()
                on_confirm=Callback::new(move |id| vm.delete(id))
            />
        </div>
    }
}
