use super::utils::HomecareFormState;
use crate::{
    api::{ApiClient, ApiError, FormPayload, Homecare, Page, PageRequest},
    forms::{
        preview::{remote_image, Preview},
        ModalMode,
    },
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct HomecareRepository {
    client: Rc<ApiClient>,
}

impl HomecareRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Homecare, ApiError> {
        self.client.get_homecare(id).await
    }

    /// Loads a homecare as edit-form state plus the image it already has.
    pub async fn load_form(&self, id: &str) -> Result<(HomecareFormState, Option<Preview>), ApiError> {
        let homecare = self.get(id).await?;
        let image = remote_image(homecare.img.as_deref());
        Ok((HomecareFormState::from_homecare(&homecare), image))
    }

    pub async fn save(&self, mode: &ModalMode, payload: FormPayload) -> Result<String, ApiError> {
        match mode {
            ModalMode::Create => self.client.add_homecare(payload).await,
            ModalMode::Edit(_) => self.client.update_homecare(payload).await,
            ModalMode::Closed => Err(ApiError::validation("No homecare form is open")),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        self.client.delete_homecare(id).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        self.client.update_homecare_status(id, status).await
    }
}

impl ListSource for HomecareRepository {
    type Item = Homecare;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<Homecare>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_homecares(&request).await }
    }
}
