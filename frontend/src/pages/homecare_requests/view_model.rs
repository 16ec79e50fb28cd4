use super::repository::JobRequestsRepository;
use crate::{
    api::{ApiClient, ApiError},
    list::{report_mutation, ListViewModel, RefreshPolicy},
    state::notify::use_notifier,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct JobRequestsViewModel {
    pub list: ListViewModel<JobRequestsRepository>,
    pub status_action: Action<(String, String), Result<String, ApiError>>,
}

impl JobRequestsViewModel {
    pub fn change_status(&self, id: String, status: String) {
        self.status_action.dispatch((id, status));
    }
}

pub fn use_job_requests_view_model() -> JobRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = JobRequestsRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let list = ListViewModel::new(repository.clone(), RefreshPolicy::default());

    let status_action = create_action(move |(id, status): &(String, String)| {
        let repo = repository.clone();
        let (id, status) = (id.clone(), status.clone());
        async move {
            let result = repo.update_status(&id, &status).await;
            report_mutation(notifier, &result, || list.on_mutation_complete());
            result
        }
    });

    create_effect(move |_| list.load_first_page());

    JobRequestsViewModel { list, status_action }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notify::{provide_notifier, ToastKind};
    use crate::state::token_store::TokenStore;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn status_change_toasts_and_refreshes_current_page() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/admin/manage/homecare/request/r1/status")
                .json_body(json!({ "status": "APPROVED" }));
            then.status(200).json_body(json!({ "message": "Request approved" }));
        });
        let listing = server.mock(|when, then| {
            when.method(GET).path("/api/admin/manage/homecare/request/jobs");
            then.status(200).json_body(json!({
                "data": { "requests": [ { "requestId": "r1", "homeCareName": "Oak House", "status": "APPROVED" } ] },
                "metadata": { "currentPage": 0, "totalPages": 1 }
            }));
        });

        let base_url = server.url("/api");
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let runtime = create_runtime();
                provide_context(ApiClient::new_with_base_url(base_url).with_tokens(TokenStore::in_memory()));
                let notifier = provide_notifier();
                let vm = use_job_requests_view_model();

                vm.change_status("r1".into(), "APPROVED".into());
                for _ in 0..200 {
                    let settled = vm.status_action.value().get_untracked().is_some()
                        && !vm.list.loading().get_untracked();
                    if settled {
                        break;
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                }
                let toast = notifier.toasts().get_untracked()[0].clone();
                assert_eq!(toast.message, "Request approved");
                assert_eq!(toast.kind, ToastKind::Success);
                assert_eq!(vm.list.items().get_untracked()[0].status, "APPROVED");
                runtime.dispose();
            })
            .await;

        update.assert_hits(1);
        listing.assert_hits(1);
    }
}
