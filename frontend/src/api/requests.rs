use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::pagination::{Page, PageRequest};
use crate::api::types::{
    ApiError, JobRequest, JobRequestStatusUpdate, StudentJob, StudentRequestStatusUpdate,
    STUDENT_REQUEST_ACCEPTED,
};

impl ApiClient {
    pub async fn search_job_requests(&self, request: &PageRequest) -> Result<Page<JobRequest>, ApiError> {
        self.get_envelope(
            "/admin/manage/homecare/request/jobs",
            &request.query_params(),
            "Failed to fetch requests",
        )
        .await?
        .into_page("requests")
    }

    pub async fn update_job_request_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        let body = JobRequestStatusUpdate {
            status: status.to_string(),
        };
        let envelope = self
            .send_json(
                Method::PUT,
                &format!("/admin/manage/homecare/request/{}/status", id),
                &body,
                "Failed to update status",
            )
            .await?;
        Ok(envelope.message_or("Request status updated successfully"))
    }

    pub async fn search_student_requests(&self, request: &PageRequest) -> Result<Page<StudentJob>, ApiError> {
        self.get_envelope(
            "/homecare/manage/student/request/staff",
            &request.query_params(),
            "Failed to fetch student requests",
        )
        .await?
        .into_page("jobAssigned")
    }

    pub async fn accept_student_request(&self, attendance_id: &str) -> Result<String, ApiError> {
        let body = StudentRequestStatusUpdate {
            attendance_id: attendance_id.to_string(),
            status: STUDENT_REQUEST_ACCEPTED.to_string(),
        };
        let envelope = self
            .send_json(
                Method::PUT,
                "/homecare/manage/student/request/status/update",
                &body,
                "Failed to accept request",
            )
            .await?;
        Ok(envelope.message_or("Request accepted"))
    }

    pub async fn search_assigned_students(&self, request: &PageRequest) -> Result<Page<StudentJob>, ApiError> {
        self.get_envelope(
            "/homecare/manage/student/assigned",
            &request.query_params(),
            "Failed to fetch assigned students",
        )
        .await?
        .into_page("jobAssigned")
    }
}
