use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::multipart::FormPayload;
use crate::api::pagination::{Page, PageRequest};
use crate::api::types::{ApiError, Homecare, HomecareStatusUpdate};

impl ApiClient {
    pub async fn search_homecares(&self, request: &PageRequest) -> Result<Page<Homecare>, ApiError> {
        self.get_envelope(
            "/admin/manage/homecare/search",
            &request.query_params(),
            "Failed to fetch homecares",
        )
        .await?
        .into_page("homeCares")
    }

    pub async fn get_homecare(&self, id: &str) -> Result<Homecare, ApiError> {
        self.get_envelope(
            &format!("/admin/manage/homecare/{}", id),
            &[],
            "Failed to fetch homecare details",
        )
        .await?
        .into_data()
    }

    pub async fn add_homecare(&self, payload: FormPayload) -> Result<String, ApiError> {
        let envelope = self
            .send_multipart(
                Method::POST,
                "/admin/manage/homecare/add",
                payload,
                "Failed to add homecare",
            )
            .await?;
        Ok(envelope.message_or("Homecare added successfully"))
    }

    pub async fn update_homecare(&self, payload: FormPayload) -> Result<String, ApiError> {
        let envelope = self
            .send_multipart(
                Method::PUT,
                "/admin/manage/homecare/update",
                payload,
                "Failed to update homecare",
            )
            .await?;
        Ok(envelope.message_or("Homecare updated successfully"))
    }

    pub async fn delete_homecare(&self, id: &str) -> Result<String, ApiError> {
        let envelope = self
            .delete_resource(
                &format!("/admin/manage/homecare/{}", id),
                "Failed to delete homecare",
            )
            .await?;
        Ok(envelope.message_or("Homecare deleted successfully"))
    }

    pub async fn update_homecare_status(&self, id: &str, status: &str) -> Result<String, ApiError> {
        let body = HomecareStatusUpdate {
            home_care_id: id.to_string(),
            status: status.to_string(),
        };
        let envelope = self
            .send_json(
                Method::PUT,
                "/admin/manage/homecare/status/update",
                &body,
                "Failed to update status",
            )
            .await?;
        Ok(envelope.message_or("Status updated successfully"))
    }
}
