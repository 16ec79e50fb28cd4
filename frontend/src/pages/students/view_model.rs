use super::{repository::StudentsRepository, utils::StudentFormState};
use crate::{
    api::{ApiClient, ApiError, AssignAvailability, Availability, FormPayload, Student},
    forms::{DetailModal, FormModal},
    list::{report_mutation, Confirmation, ListViewModel, RefreshPolicy},
    state::notify::{use_notifier, Notifier},
};
use leptos::*;
use std::rc::Rc;

/// Availability of the student whose calendar modal is open.
#[derive(Clone, Copy)]
pub struct AvailabilityModal {
    pub student_id: RwSignal<Option<String>>,
    pub rows: DetailModal<Vec<Availability>>,
}

impl AvailabilityModal {
    fn new() -> Self {
        Self {
            student_id: create_rw_signal(None),
            rows: DetailModal::new(),
        }
    }

    pub fn is_open(&self) -> Signal<bool> {
        let student_id = self.student_id;
        Signal::derive(move || student_id.with(Option::is_some))
    }

    pub fn close(&self) {
        self.student_id.set(None);
        self.rows.close();
    }

    fn load(&self, repo: StudentsRepository, notifier: Notifier) {
        let Some(student_id) = self.student_id.get_untracked() else {
            return;
        };
        self.rows
            .open(async move { repo.availabilities(&student_id).await }, notifier);
    }
}

#[derive(Clone, Copy)]
pub struct StudentsViewModel {
    pub list: ListViewModel<StudentsRepository>,
    pub form: FormModal<StudentFormState>,
    pub detail: DetailModal<Student>,
    pub availability: AvailabilityModal,
    pub delete_confirm: RwSignal<Confirmation<String>>,
    pub save_action: Action<FormPayload, Result<String, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub status_action: Action<(String, String), Result<String, ApiError>>,
    pub assign_action: Action<AssignAvailability, Result<String, ApiError>>,
    repository: StoredValue<StudentsRepository>,
    notifier: Notifier,
}

impl StudentsViewModel {
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

    pub fn submit(&self) -> bool {
        let started = self
            .form
            .state
            .try_update(|s| s.begin_submit(|form, _| form.validate_fields()))
            .unwrap_or(false);
        if !started {
            return false;
        }
        let payload = self.form.state.with_untracked(|s| {
            s.editing_id()
                .map(|id| s.form.to_payload(id))
                .unwrap_or_default()
        });
        self.save_action.dispatch(payload);
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

    pub fn open_availability(&self, student_id: String) {
        self.availability.student_id.set(Some(student_id));
        self.availability
            .load(self.repository.get_value(), self.notifier);
    }

    /// Assigns the open student to the availability's homecare on its date.
    pub fn assign(&self, availability: &Availability) {
        if availability.assigned {
            return;
        }
        let Some(student_id) = self.availability.student_id.get_untracked() else {
            return;
        };
        let body = AssignAvailability {
            student_id,
            ..AssignAvailability::from(availability)
        };
        self.assign_action.dispatch(body);
    }
}

pub fn use_students_view_model() -> StudentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentsRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();

    let list = ListViewModel::new(repository.clone(), RefreshPolicy::default());
    let form = FormModal::<StudentFormState>::new();
    let detail = DetailModal::<Student>::new();
    let availability = AvailabilityModal::new();
    let delete_confirm = create_rw_signal(Confirmation::<String>::default());

    let repo_for_save = repository.clone();
    let save_action = create_action(move |payload: &FormPayload| {
        let repo = repo_for_save.clone();
        let payload = payload.clone();
        async move {
            let result = repo.update(payload).await;
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

    let repo_for_assign = repository.clone();
    let assign_action = create_action(move |body: &AssignAvailability| {
        let repo = repo_for_assign.clone();
        let body = body.clone();
        async move {
            let result = repo.clone().assign(body).await;
            report_mutation(notifier, &result, || availability.load(repo, notifier));
            result
        }
    });

    create_effect(move |_| list.load_first_page());

    StudentsViewModel {
        list,
        form,
        detail,
        availability,
        delete_confirm,
        save_action,
        delete_action,
        status_action,
        assign_action,
        repository: store_value(repository),
        notifier,
    }
}
