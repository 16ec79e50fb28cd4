use super::repository::AvailabilityRepository;
use crate::{
    api::{ApiClient, ApiError, Availability},
    list::{report_mutation, ListViewModel, RefreshPolicy},
    state::notify::use_notifier,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AvailabilityViewModel {
    pub list: ListViewModel<AvailabilityRepository>,
    pub assign_action: Action<Availability, Result<String, ApiError>>,
}

impl AvailabilityViewModel {
    /// Already-assigned rows are left alone.
    pub fn assign(&self, availability: Availability) -> bool {
        if availability.assigned {
            return false;
        }
        self.assign_action.dispatch(availability);
        true
    }
}

pub fn use_availability_view_model() -> AvailabilityViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AvailabilityRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let list = ListViewModel::new(repository.clone(), RefreshPolicy::default());

    let assign_action = create_action(move |availability: &Availability| {
        let repo = repository.clone();
        let availability = availability.clone();
        async move {
            let result = repo.assign(&availability).await;
            report_mutation(notifier, &result, || list.on_mutation_complete());
            result
        }
    });

    create_effect(move |_| list.load_first_page());

    AvailabilityViewModel { list, assign_action }
}
