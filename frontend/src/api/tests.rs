#![cfg(not(coverage))]

use super::*;
use crate::state::token_store::TokenStore;
use httpmock::prelude::*;
use serde_json::json;

fn homecare_json(id: &str) -> serde_json::Value {
    json!({
        "homeCareId": id,
        "homeCareName": "Oak House",
        "providerName": "Oak Group",
        "registrationNumber": "REG-1",
        "serviceType": "Residential",
        "addressLine1": "1 High Street",
        "city": "Leeds",
        "postcode": "LS1 4AP",
        "country": "England",
        "phone": "07123456789",
        "email": "oak@example.com",
        "regulatedByCQC": true,
        "registrationDate": "2024-02-01T00:00:00.000Z",
        "status": "ACTIVE"
    })
}

fn student_json(id: &str) -> serde_json::Value {
    json!({
        "studentId": id,
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "07123456789",
        "gender": "Female",
        "dateOfBirth": "2001-05-04T00:00:00Z",
        "status": "PENDING"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    let tokens = TokenStore::in_memory();
    tokens.set_token("jwt-1").unwrap();
    ApiClient::new_with_base_url(server.url("/api")).with_tokens(tokens)
}

#[tokio::test]
async fn search_homecares_sends_paging_params_and_bearer_header() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/manage/homecare/search")
            .header("Authorization", "Bearer jwt-1")
            .query_param("sortBy", "createdAt")
            .query_param("pageSize", "10")
            .query_param("direction", "next")
            .query_param("paginationToken", "abc")
            .query_param("searchTerm", "oak")
            .query_param("status", "ACTIVE");
        then.status(200).json_body(json!({
            "message": "ok",
            "data": { "homeCares": [homecare_json("h1"), homecare_json("h2")] },
            "metadata": {
                "currentPage": 1,
                "totalPages": 3,
                "nextPaginationToken": "def",
                "prevPaginationToken": "xyz",
                "totalItems": 22
            }
        }));
    });

    let request = PageRequest {
        token: Some("abc".into()),
        search_term: "oak".into(),
        status_filter: "ACTIVE".into(),
        ..PageRequest::default()
    };
    let page = api_client(&server).search_homecares(&request).await.unwrap();

    mock.assert();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.metadata.next_pagination_token.as_deref(), Some("def"));
    assert_eq!(page.metadata.prev_pagination_token.as_deref(), Some("xyz"));
    assert_eq!(page.metadata.total_items, 22);
}

#[tokio::test]
async fn unauthorized_response_maps_backend_message() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/student/all");
        then.status(401).json_body(json!({ "message": "Unauthorized" }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api")).with_tokens(TokenStore::in_memory());
    let err = api
        .search_students(&PageRequest::default())
        .await
        .unwrap_err();

    mock.assert();
    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Unauthorized");
}

#[tokio::test]
async fn homecare_crud_and_status_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/admin/manage/homecare/h1");
        then.status(200)
            .json_body(json!({ "data": homecare_json("h1") }));
    });
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/manage/homecare/add")
            .body_contains("name=\"homeCareName\"")
            .body_contains("name=\"regulatedByCQC\"");
        then.status(201).json_body(json!({ "message": "Homecare created" }));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/manage/homecare/update")
            .body_contains("name=\"homeCareId\"");
        then.status(200).json_body(json!({}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/manage/homecare/h1");
        then.status(200).json_body(json!({ "message": "Deleted" }));
    });
    let status = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/manage/homecare/status/update")
            .json_body(json!({ "homeCareId": "h1", "status": "BLOCKED" }));
        then.status(200).json_body(json!({ "message": "Status changed" }));
    });

    let api = api_client(&server);
    let homecare = api.get_homecare("h1").await.unwrap();
    assert_eq!(homecare.home_care_name, "Oak House");
    assert!(homecare.regulated_by_cqc);

    let payload = FormPayload::new()
        .field("homeCareName", "Oak House")
        .field("regulatedByCQC", false);
    assert_eq!(api.add_homecare(payload).await.unwrap(), "Homecare created");

    let payload = FormPayload::new().field("homeCareId", "h1");
    assert_eq!(
        api.update_homecare(payload).await.unwrap(),
        "Homecare updated successfully"
    );
    assert_eq!(api.delete_homecare("h1").await.unwrap(), "Deleted");
    assert_eq!(
        api.update_homecare_status("h1", "BLOCKED").await.unwrap(),
        "Status changed"
    );

    get.assert();
    add.assert();
    update.assert();
    delete.assert();
    status.assert();
}

#[tokio::test]
async fn missing_homecare_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/manage/homecare/missing");
        then.status(404).json_body(json!({ "message": "Homecare not found" }));
    });

    let err = api_client(&server).get_homecare("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error, "Homecare not found");
}

#[tokio::test]
async fn server_error_without_body_uses_fallback_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/student/s1");
        then.status(500).body("");
    });

    let err = api_client(&server).delete_student("s1").await.unwrap_err();
    assert_eq!(err.code, "HTTP_500");
    assert_eq!(err.error, "Failed to delete student");
}

#[tokio::test]
async fn student_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/student/all");
        then.status(200).json_body(json!({
            "data": { "students": [student_json("s1")] },
            "metadata": { "currentPage": 0, "totalPages": 1 }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/student/s1");
        then.status(200).json_body(json!({ "data": student_json("s1") }));
    });
    let status = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/student/status/update")
            .json_body(json!({ "studentId": "s1", "status": "APPROVED" }));
        then.status(200).json_body(json!({ "message": "Approved" }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/manage/student/availability/get/all/s1");
        then.status(200).json_body(json!({
            "data": { "availabilities": [{
                "availabilityId": 4,
                "studentId": "s1",
                "homeCareId": "h1",
                "homeCareName": "Oak House",
                "date": "2025-03-01",
                "city": "Leeds",
                "accepted": true,
                "assigned": false
            }]}
        }));
    });
    let assign = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/manage/student/availability/assign")
            .json_body(json!({ "date": "2025-03-01", "studentId": "s1", "homeCareId": "h1" }));
        then.status(200).json_body(json!({ "message": "Assigned" }));
    });

    let api = api_client(&server);
    let page = api.search_students(&PageRequest::default()).await.unwrap();
    assert_eq!(page.items[0].full_name, "Ada Lovelace");
    assert!(!page.metadata.has_next());

    let student = api.get_student("s1").await.unwrap();
    assert_eq!(student.gender, "Female");

    assert_eq!(
        api.update_student_status("s1", "APPROVED").await.unwrap(),
        "Approved"
    );

    let availabilities = api.student_availabilities("s1").await.unwrap();
    assert_eq!(availabilities.len(), 1);
    assert_eq!(availabilities[0].availability_id, "4");
    assert!(availabilities[0].accepted);

    let body = AssignAvailability::from(&availabilities[0]);
    assert_eq!(api.assign_availability(&body).await.unwrap(), "Assigned");

    status.assert();
    assign.assert();
}

#[tokio::test]
async fn homecare_side_request_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/homecare/manage/student/request/staff");
        then.status(200).json_body(json!({
            "data": { "jobAssigned": [{
                "attendanceId": 12,
                "homeCareName": "Oak House",
                "city": "Leeds",
                "date": "2025-03-01",
                "status": "DUE",
                "formattedTotalHours": "8h 0m"
            }]}
        }));
    });
    let accept = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/homecare/manage/student/request/status/update")
            .json_body(json!({ "attendanceId": "12", "status": "ACCEPTED" }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/homecare/manage/student/assigned");
        then.status(200).json_body(json!({ "data": {} }));
    });
    let job_status = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/manage/homecare/request/r9/status")
            .json_body(json!({ "status": "APPROVED" }));
        then.status(200).json_body(json!({}));
    });

    let api = api_client(&server);
    let requests = api
        .search_student_requests(&PageRequest::default())
        .await
        .unwrap();
    assert_eq!(requests.items[0].attendance_id, "12");
    assert_eq!(requests.items[0].status, "DUE");

    assert_eq!(api.accept_student_request("12").await.unwrap(), "Request accepted");

    let assigned = api
        .search_assigned_students(&PageRequest::default())
        .await
        .unwrap();
    assert!(assigned.items.is_empty());

    api.update_job_request_status("r9", "APPROVED").await.unwrap();

    accept.assert();
    job_status.assert();
}

#[tokio::test]
async fn register_posts_multipart_form() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/auth/register")
            .body_contains("name=\"email\"");
        then.status(200).json_body(json!({ "message": "Account created" }));
    });

    let payload = FormPayload::new()
        .field("name", "Ops Lead")
        .field("email", "ops@example.com");
    let message = api_client(&server).register(payload).await.unwrap();

    mock.assert();
    assert_eq!(message, "Account created");
}

#[tokio::test]
async fn transport_failure_maps_to_request_failed() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
        .with_tokens(TokenStore::in_memory());
    let err = api.get_student("s1").await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
