use super::repository::StudentRequestsRepository;
use crate::{
    api::{ApiClient, ApiError, StudentJob, STUDENT_REQUEST_ACCEPTED},
    list::{report_mutation, ListViewModel, RefreshPolicy},
    state::notify::use_notifier,
};
use leptos::*;
use std::rc::Rc;

pub fn can_accept(job: &StudentJob) -> bool {
    !job.status.eq_ignore_ascii_case(STUDENT_REQUEST_ACCEPTED)
}

#[derive(Clone, Copy)]
pub struct StudentRequestsViewModel {
    pub list: ListViewModel<StudentRequestsRepository>,
    pub accept_action: Action<String, Result<String, ApiError>>,
}

impl StudentRequestsViewModel {
    pub fn accept(&self, job: &StudentJob) -> bool {
        if !can_accept(job) {
            return false;
        }
        self.accept_action.dispatch(job.attendance_id.clone());
        true
    }
}

pub fn use_student_requests_view_model() -> StudentRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentRequestsRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let list = ListViewModel::new(repository.clone(), RefreshPolicy::default());

    let accept_action = create_action(move |attendance_id: &String| {
        let repo = repository.clone();
        let attendance_id = attendance_id.clone();
        async move {
            let result = repo.accept(&attendance_id).await;
            report_mutation(notifier, &result, || list.on_mutation_complete());
            result
        }
    });

    create_effect(move |_| list.load_first_page());

    StudentRequestsViewModel { list, accept_action }
}
