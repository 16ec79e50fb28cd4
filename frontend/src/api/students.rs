use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::multipart::FormPayload;
use crate::api::pagination::{Page, PageRequest};
use crate::api::types::{ApiError, AssignAvailability, Availability, Student, StudentStatusUpdate};

impl ApiClient {
    pub async fn search_students(&self, request: &PageRequest) -> Result<Page<Student>, ApiError> {
        self.get_envelope(
            "/admin/student/all",
            &request.query_params(),
            "Failed to fetch students",
        )
        .await?
        .into_page("students")
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        self.get_envelope(
            &format!("/admin/student/{}", id),
            &[],
            "Failed to fetch student details",
        )
        .await?
        .into_data()
    }

    pub async fn update_student(&self, payload: FormPayload) -> Result<String, ApiError> {
        let envelope = self
            .send_multipart(
                Method::PUT,
                "/admin/student/update",
                payload,
                "Failed to update student",
            )
            .await?;
        Ok(envelope.message_or("Student updated successfully"))
    }

    pub async fn delete_student(&self, id: &str) -> Result<String, ApiError> {
        let envelope = self
            .delete_resource(&format!("/admin/student/{}", id), "Failed to delete student")
            .await?;
        Ok(envelope.message_or("Student deleted successfully"))
    }

    pub async fn update_student_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        let body = StudentStatusUpdate {
            student_id: id.to_string(),
            status: status.to_string(),
        };
        let envelope = self
            .send_json(
                Method::PUT,
                "/admin/student/status/update",
                &body,
                "Failed to update status",
            )
            .await?;
        Ok(envelope.message_or("Status updated successfully"))
    }

    pub async fn student_availabilities(&self, student_id: &str) -> Result<Vec<Availability>, ApiError> {
        let page = self
            .get_envelope(
                &format!("/admin/manage/student/availability/get/all/{}", student_id),
                &[],
                "Failed to fetch availability",
            )
            .await?
            .into_page::<Availability>("availabilities")?;
        Ok(page.items)
    }

    pub async fn search_availabilities(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Availability>, ApiError> {
        self.get_envelope(
            "/admin/manage/student/availability/search",
            &request.query_params(),
            "Failed to fetch availability",
        )
        .await?
        .into_page("availabilities")
    }

    pub async fn assign_availability(&self, body: &AssignAvailability) -> Result<String, ApiError> {
        let envelope = self
            .send_json(
                Method::POST,
                "/admin/manage/student/availability/assign",
                body,
                "Failed to assign student",
            )
            .await?;
        Ok(envelope.message_or("Student assigned successfully"))
    }
}
