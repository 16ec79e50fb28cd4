use crate::api::{ApiClient, ApiError, FormPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignUpRepository {
    client: Rc<ApiClient>,
}

impl SignUpRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, payload: FormPayload) -> Result<String, ApiError> {
        self.client.register(payload).await
    }
}
