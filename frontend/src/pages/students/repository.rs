use super::utils::StudentFormState;
use crate::{
    api::{ApiClient, ApiError, AssignAvailability, Availability, FormPayload, Page, PageRequest, Student},
    forms::preview::{remote_image, Preview},
    list::ListSource,
};
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct StudentsRepository {
    client: Rc<ApiClient>,
}

impl StudentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Student, ApiError> {
        self.client.get_student(id).await
    }

    pub async fn load_form(&self, id: &str) -> Result<(StudentFormState, Option<Preview>), ApiError> {
        let student = self.get(id).await?;
        let image = remote_image(student.profile_image.as_deref());
        Ok((StudentFormState::from_student(&student), image))
    }

    pub async fn update(&self, payload: FormPayload) -> Result<String, ApiError> {
        self.client.update_student(payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        self.client.delete_student(id).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        self.client.update_student_status(id, status).await
    }

    pub async fn availabilities(&self, student_id: &str) -> Result<Vec<Availability>, ApiError> {
        self.client.student_availabilities(student_id).await
    }

    pub async fn assign(&self, body: AssignAvailability) -> Result<String, ApiError> {
        self.client.assign_availability(&body).await
    }
}

impl ListSource for StudentsRepository {
    type Item = Student;

    fn fetch(&self, request: PageRequest) -> impl Future<Output = Result<Page<Student>, ApiError>> + 'static {
        let client = self.client.clone();
        async move { client.search_students(&request).await }
    }
}
