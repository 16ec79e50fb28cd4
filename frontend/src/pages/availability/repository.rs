use crate::{
    api::{ApiClient, ApiError, AssignAvailability, Availability, Page, PageRequest},
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct AvailabilityRepository {
    client: Rc<ApiClient>,
}

impl AvailabilityRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn assign(&self, availability: &Availability) -> Result<String, ApiError> {
        self.client
            .assign_availability(&AssignAvailability::from(availability))
            .await
    }
}

impl ListSource for AvailabilityRepository {
    type Item = Availability;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<Availability>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_availabilities(&request).await }
    }
}
