use crate::{
    api::{ApiClient, ApiError, JobRequest, Page, PageRequest},
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct JobRequestsRepository {
    client: Rc<ApiClient>,
}

impl JobRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        self.client.update_job_request_status(id, status).await
    }
}

impl ListSource for JobRequestsRepository {
    type Item = JobRequest;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<JobRequest>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_job_requests(&request).await }
    }
}
