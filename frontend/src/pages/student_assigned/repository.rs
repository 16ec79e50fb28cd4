use crate::{
    api::{ApiClient, ApiError, Page, PageRequest, StudentJob},
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct AssignedRepository {
    client: Rc<ApiClient>,
}

impl AssignedRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ListSource for AssignedRepository {
    type Item = StudentJob;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<StudentJob>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_assigned_students(&request).await }
    }
}
