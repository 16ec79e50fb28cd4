use super::{repository::HomecareRepository, utils::HomecareFormState};
use crate::{
    api::{ApiClient, ApiError, FormPayload, Homecare},
    forms::{DetailModal, FormModal, ModalMode},
    list::{report_mutation, Confirmation, ListViewModel, RefreshPolicy},
    state::notify::{use_notifier, Notifier},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct HomecareViewModel {
    pub list: ListViewModel<HomecareRepository>,
    pub form: FormModal<HomecareFormState>,
    pub detail: DetailModal<Homecare>,
    pub delete_confirm: RwSignal<Confirmation<String>>,
    pub save_action: Action<(ModalMode, FormPayload), Result<String, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub status_action: Action<(String, String), Result<String, ApiError>>,
    repository: StoredValue<HomecareRepository>,
    notifier: Notifier,
}

impl HomecareViewModel {
    pub fn open_create(&self) {
        self.form.open_create();
    }

    pub fn open_edit(&self, id: String) {
        let repo = self.repository.get_value();
        self.form.open_edit(
            id,
            move |id| async move { repo.load_form(&id).await },
            self.notifier,
        );
    }

    pub fn open_view(&self, id: String) {
        let repo = self.repository.get_value();
        self.detail
            .open(async move { repo.get(&id).await }, self.notifier);
    }

    /// Validates the open form and sends it. Returns whether a request went out.
    pub fn submit(&self) -> bool {
        let started = self
            .form
            .state
            .try_update(|s| s.begin_submit(HomecareFormState::validate_for))
            .unwrap_or(false);
        if !started {
            return false;
        }
        let (mode, payload) = self
            .form
            .state
            .with_untracked(|s| (s.mode.clone(), s.form.to_payload(&s.mode)));
        self.save_action.dispatch((mode, payload));
        true
    }

    pub fn request_delete(&self, id: String) {
        self.delete_confirm.update(|c| c.request(id));
    }

    pub fn delete(&self, id: String) {
        self.delete_action.dispatch(id);
    }

    pub fn change_status(&self, id: String, status: String) {
        self.status_action.dispatch((id, status));
    }
}

pub fn use_homecare_view_model() -> HomecareViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HomecareRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();

    let list = ListViewModel::new(repository.clone(), RefreshPolicy::default());
    let form = FormModal::<HomecareFormState>::new();
    let detail = DetailModal::<Homecare>::new();
    let delete_confirm = create_rw_signal(Confirmation::<String>::default());

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(mode, payload): &(ModalMode, FormPayload)| {
        let repo = repo_for_save.clone();
        let mode = mode.clone();
        let payload = payload.clone();
        async move {
            let result = repo.save(&mode, payload).await;
            let _ = form.state.try_update(|s| s.finish_submit());
            report_mutation(notifier, &result, || {
                form.close();
                list.on_mutation_complete();
            });
            result
        }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move {
            let result = repo.delete(&id).await;
            report_mutation(notifier, &result, || list.on_mutation_complete());
            result
        }
    });

    let repo_for_status = repository.clone();
    let status_action = create_action(move |(id, status): &(String, String)| {
        let repo = repo_for_status.clone();
        let (id, status) = (id.clone(), status.clone());
        async move {
            let result = repo.update_status(&id, &status).await;
            report_mutation(notifier, &result, || list.on_mutation_complete());
            result
        }
    });

    create_effect(move |_| list.load_first_page());

    HomecareViewModel {
        list,
        form,
        detail,
        delete_confirm,
        save_action,
        delete_action,
        status_action,
        repository: store_value(repository),
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::Role;
    use crate::test_support::{helpers::provide_page_context, ssr::with_runtime};

    #[test]
    fn invalid_form_blocks_submit() {
        with_runtime(|| {
            provide_page_context(Role::Admin);
            let vm = use_homecare_view_model();
            vm.open_create();
            assert!(!vm.submit());
            let errors = vm.form.errors().get();
            assert_eq!(errors.get("home_care_name"), Some("Homecare name is required"));
            assert!(vm.save_action.value().get().is_none());
        });
    }

    #[test]
    fn declined_delete_sends_nothing() {
        with_runtime(|| {
            provide_page_context(Role::Admin);
            let vm = use_homecare_view_model();
            let before = vm.list.state.get_untracked();
            vm.request_delete("h1".into());
            assert!(vm.delete_confirm.get().is_pending());
            crate::components::confirm_dialog::decline(vm.delete_confirm);
            assert!(!vm.delete_confirm.get().is_pending());
            assert!(vm.delete_action.value().get().is_none());
            assert_eq!(vm.list.state.get_untracked(), before);
        });
    }
}
