use crate::{
    api::{ApiClient, ApiError, Page, PageRequest, StudentJob},
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct StudentRequestsRepository {
    client: Rc<ApiClient>,
}

impl StudentRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn accept(&self, attendance_id: &str) -> Result<String, ApiError> {
        self.client.accept_student_request(attendance_id).await
    }
}

impl ListSource for StudentRequestsRepository {
    type Item = StudentJob;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<StudentJob>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_student_requests(&request).await }
    }
}
