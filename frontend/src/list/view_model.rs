use leptos::*;
use std::future::Future;

use crate::{
    api::{ApiError, Page, PageMetadata, PageRequest},
    utils::timer::sleep_ms,
};

use super::{
    controller::{ListController, LoadOutcome, PendingLoad, RefreshPolicy},
    debounce::{DebounceTicket, SEARCH_DEBOUNCE_MS},
};

/// Backend collection a list page reads from.
pub trait ListSource: Clone + 'static {
    type Item: Clone + 'static;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<Self::Item>, ApiError>> + 'static;
}

pub struct ListViewModel<S: ListSource> {
    pub state: RwSignal<ListController<S::Item>>,
    source: StoredValue<S>,
}

impl<S: ListSource> Clone for ListViewModel<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ListSource> Copy for ListViewModel<S> {}

impl<S: ListSource> ListViewModel<S> {
    pub fn new(source: S, policy: RefreshPolicy) -> Self {
        let vm = Self {
            state: create_rw_signal(ListController::new(policy)),
            source: store_value(source),
        };
        let state = vm.state;
        on_cleanup(move || {
            let _ = state.try_update(|c| c.cancel_debounce());
        });
        vm
    }

    pub fn items(&self) -> Signal<Vec<S::Item>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.items().to_vec()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.error().cloned()))
    }

    pub fn can_next(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.can_next()))
    }

    pub fn can_prev(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.can_prev()))
    }

    pub fn metadata(&self) -> Signal<PageMetadata> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.metadata().clone()))
    }

    pub fn search_term(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.filters().search_term.clone()))
    }

    pub fn status_filter(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.filters().status.clone()))
    }

    pub fn load_first_page(&self) {
        if let Some(pending) = self.state.try_update(|c| c.initial_load()) {
            self.dispatch(pending);
        }
    }

    pub fn next_page(&self) {
        if let Some(Some(pending)) = self.state.try_update(|c| c.next_page()) {
            self.dispatch(pending);
        }
    }

    pub fn prev_page(&self) {
        if let Some(Some(pending)) = self.state.try_update(|c| c.prev_page()) {
            self.dispatch(pending);
        }
    }

    pub fn on_search_change(&self, text: String) {
        if let Some(ticket) = self.state.try_update(|c| c.set_search_term(text)) {
            self.debounce(ticket);
        }
    }

    pub fn on_status_change(&self, status: String) {
        if let Some(ticket) = self.state.try_update(|c| c.set_status_filter(status)) {
            self.debounce(ticket);
        }
    }

    pub fn on_mutation_complete(&self) {
        if let Some(pending) = self.state.try_update(|c| c.refresh_after_mutation()) {
            self.dispatch(pending);
        }
    }

    fn debounce(&self, ticket: DebounceTicket) {
        let vm = *self;
        spawn_local(async move {
            sleep_ms(SEARCH_DEBOUNCE_MS).await;
            if let Some(Some(pending)) = vm.state.try_update(|c| c.fire_debounced(ticket)) {
                vm.dispatch(pending);
            }
        });
    }

    fn dispatch(&self, pending: PendingLoad) {
        let Some(source) = self.source.try_get_value() else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let PendingLoad { seq, request } = pending;
            let result = source.fetch(request).await;
            if let Err(err) = &result {
                log::warn!("List load failed: {}", err);
            }
            match state.try_update(|c| c.apply(seq, result)) {
                Some(LoadOutcome::Stale) => log::debug!("Discarded stale list response #{}", seq),
                Some(_) => {}
                None => log::debug!("List disposed before response #{} arrived", seq),
            }
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, Homecare};
    use crate::state::token_store::TokenStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    #[derive(Clone)]
    struct HomecareSource(Rc<ApiClient>);

    impl ListSource for HomecareSource {
        type Item = Homecare;

        fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<Homecare>, ApiError>> + 'static {
            let api = self.0.clone();
            async move { api.search_homecares(&request).await }
        }
    }

    async fn wait_until_idle(vm: ListViewModel<HomecareSource>) {
        for _ in 0..200 {
            if !vm.state.with_untracked(|c| c.is_loading() || c.has_pending_search()) {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("list never settled");
    }

    fn homecare_page(names: &[&str], next: Option<&str>) -> serde_json::Value {
        let rows: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "homeCareId": format!("h{}", i), "homeCareName": name }))
            .collect();
        json!({
            "data": { "homeCares": rows },
            "metadata": { "currentPage": 0, "totalPages": 2, "nextPaginationToken": next }
        })
    }

    #[tokio::test]
    async fn loads_pages_and_debounced_search_through_backend() {
        let server = MockServer::start_async().await;
        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/manage/homecare/search")
                .query_param("direction", "next")
                .query_param_exists("paginationToken");
            then.status(200).json_body(homecare_page(&["Elm Court"], None));
        });
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/manage/homecare/search")
                .query_param("searchTerm", "oak");
            then.status(200).json_body(homecare_page(&["Oak House"], None));
        });
        let initial = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/manage/homecare/search");
            then.status(200)
                .json_body(homecare_page(&["Ash Lodge", "Birch View"], Some("tok-2")));
        });

        let base_url = server.url("/api");
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let runtime = create_runtime();
                let api = ApiClient::new_with_base_url(base_url)
                    .with_tokens(TokenStore::in_memory());
                let vm = ListViewModel::new(HomecareSource(Rc::new(api)), RefreshPolicy::CurrentPage);

                vm.load_first_page();
                wait_until_idle(vm).await;
                assert_eq!(vm.items().get_untracked().len(), 2);
                assert!(vm.can_next().get_untracked());

                vm.next_page();
                wait_until_idle(vm).await;
                assert_eq!(vm.items().get_untracked()[0].home_care_name, "Elm Court");

                for text in ["o", "oa", "oak"] {
                    vm.on_search_change(text.to_string());
                }
                wait_until_idle(vm).await;
                assert_eq!(vm.items().get_untracked()[0].home_care_name, "Oak House");
                runtime.dispose();
            })
            .await;

        initial.assert_hits(1);
        first.assert_hits(1);
        search.assert_hits(1);
    }
}
