use httpmock::prelude::*;
use serde_json::json;

use super::client::{ApiClient, TOKEN_KEY, USER_KEY};
use super::types::*;
use crate::utils::storage;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn seed_session(token: &str) {
    storage::set_item(TOKEN_KEY, token);
    storage::set_item(
        USER_KEY,
        &json!({
            "id": "u1",
            "name": "Taro Yamada",
            "email": "taro@example.com",
            "role": "STAFF",
            "department": "Engineering"
        })
        .to_string(),
    );
}

fn leave_request_body(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "u1",
        "userName": "Taro Yamada",
        "department": "Engineering",
        "leaveType": "ANNUAL",
        "startDate": "2026-02-10",
        "endDate": "2026-02-12",
        "halfDay": false,
        "reason": "family trip to Hokkaido",
        "status": status,
        "documentUrl": null,
        "adminComment": null,
        "createdAt": "2026-02-01T09:00:00Z",
        "updatedAt": "2026-02-01T09:00:00Z"
    })
}

#[tokio::test]
async fn login_persists_session_on_success() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({ "email": "taro@example.com", "password": "secret" }));
        then.status(200).json_body(json!({
            "token": "token-xyz",
            "user": {
                "id": "u1",
                "name": "Taro Yamada",
                "email": "taro@example.com",
                "role": "ADMIN",
                "department": null
            }
        }));
    });

    ApiClient::clear_session();
    let response = client(&server)
        .login(LoginRequest {
            email: "taro@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.role, Role::Admin);
    assert_eq!(ApiClient::bearer_token().as_deref(), Some("token-xyz"));
    assert!(ApiClient::restore_session().is_some());
    ApiClient::clear_session();
}

#[tokio::test]
async fn login_failure_is_not_treated_as_session_expiry() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({ "message": "メールアドレスまたはパスワードが正しくありません。" }));
    });

    ApiClient::clear_session();
    let _ = ApiClient::take_session_expired_notice();
    let error = client(&server)
        .login(LoginRequest {
            email: "taro@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(
        error.message(),
        "メールアドレスまたはパスワードが正しくありません。"
    );
    // Bad credentials must not raise the one-shot expiry notice.
    assert!(!ApiClient::take_session_expired_notice());
}

#[tokio::test]
async fn my_requests_carry_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/leave/user")
            .header("authorization", "Bearer token-abc");
        then.status(200)
            .json_body(json!([leave_request_body("lr-1", "PENDING")]));
    });

    seed_session("token-abc");
    let requests = client(&server).get_my_leave_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, LeaveStatus::Pending);
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn all_requests_forward_filter_query_params() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/leave")
            .query_param("status", "APPROVED")
            .query_param("leaveType", "SICK")
            .query_param("department", "Sales");
        then.status(200).json_body(json!([]));
    });

    seed_session("token-abc");
    let filters = LeaveFilters {
        department: Some("Sales".into()),
        status: Some(LeaveStatus::Approved),
        leave_type: Some(LeaveType::Sick),
        start_date: None,
        end_date: None,
    };
    let requests = client(&server).get_all_leave_requests(&filters).await.unwrap();
    assert!(requests.is_empty());
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn empty_filters_issue_an_unconstrained_fetch() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/leave");
        then.status(200)
            .json_body(json!([leave_request_body("lr-1", "PENDING")]));
    });

    seed_session("token-abc");
    let requests = client(&server)
        .get_all_leave_requests(&LeaveFilters::default())
        .await
        .unwrap();
    assert_eq!(requests.len(), 1);
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn create_leave_request_posts_multipart() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/leave")
            .header_exists("content-type");
        then.status(201)
            .json_body(leave_request_body("lr-9", "PENDING"));
    });

    seed_session("token-abc");
    let created = client(&server)
        .create_leave_request(CreateLeaveRequest {
            leave_type: LeaveType::Annual,
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            half_day: false,
            reason: "family trip to Hokkaido".into(),
            document: Some(DocumentUpload {
                file_name: "certificate.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: vec![0x25, 0x50, 0x44, 0x46],
            }),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "lr-9");
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn update_status_patches_decision_and_comment() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/api/leave/lr-1/status")
            .json_body(json!({ "status": "REJECTED", "adminComment": "overlaps release week" }));
        then.status(200)
            .json_body(leave_request_body("lr-1", "REJECTED"));
    });

    seed_session("token-abc");
    let updated = client(&server)
        .update_leave_status(
            "lr-1",
            &UpdateLeaveStatusRequest {
                status: LeaveStatus::Rejected,
                admin_comment: Some("overlaps release week".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, LeaveStatus::Rejected);
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn statistics_decode_camel_case_fields() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave/statistics");
        then.status(200).json_body(json!({
            "totalDays": 20.0,
            "usedDays": 5.5,
            "pendingDays": 2.0,
            "availableDays": 12.5
        }));
    });

    seed_session("token-abc");
    let stats = client(&server).get_leave_statistics().await.unwrap();
    assert_eq!(stats.total_days, 20.0);
    assert_eq!(stats.available_days, 12.5);
    ApiClient::clear_session();
}

#[tokio::test]
async fn export_returns_raw_csv_bytes() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/reports/leave")
            .query_param("status", "PENDING");
        then.status(200).body("id,userName,status\nlr-1,Taro,PENDING\n");
    });

    seed_session("token-abc");
    let filters = LeaveFilters {
        status: Some(LeaveStatus::Pending),
        ..LeaveFilters::default()
    };
    let bytes = client(&server).export_leave_report(&filters).await.unwrap();
    assert_eq!(bytes, b"id,userName,status\nlr-1,Taro,PENDING\n");
    mock.assert_async().await;
    ApiClient::clear_session();
}

#[tokio::test]
async fn document_download_returns_binary_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave/lr-1/document");
        then.status(200).body(&[0x25u8, 0x50, 0x44, 0x46][..]);
    });

    seed_session("token-abc");
    let bytes = client(&server).download_leave_document("lr-1").await.unwrap();
    assert_eq!(bytes, vec![0x25, 0x50, 0x44, 0x46]);
    ApiClient::clear_session();
}

#[tokio::test]
async fn unauthorized_response_tears_down_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave/user");
        then.status(401).json_body(json!({ "message": "token expired" }));
    });

    seed_session("token-old");
    let _ = ApiClient::take_session_expired_notice();
    let error = client(&server).get_my_leave_requests().await.unwrap_err();
    assert!(error.is_unauthorized());
    assert!(ApiClient::bearer_token().is_none());
    assert!(ApiClient::restore_session().is_none());
    assert!(ApiClient::take_session_expired_notice());
}

#[tokio::test]
async fn server_error_surfaces_message_and_keeps_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave/statistics");
        then.status(500).json_body(json!({ "message": "backend unavailable" }));
    });

    seed_session("token-abc");
    let error = client(&server).get_leave_statistics().await.unwrap_err();
    assert_eq!(error, ApiError::Api { status: 500, message: "backend unavailable".into() });
    assert!(ApiClient::bearer_token().is_some());
    ApiClient::clear_session();
}

#[tokio::test]
async fn error_without_message_falls_back_to_generic_text() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave/lr-404");
        then.status(404).body("");
    });

    seed_session("token-abc");
    let error = client(&server).get_leave_request("lr-404").await.unwrap_err();
    assert_eq!(
        error,
        ApiError::Api { status: 404, message: "エラーが発生しました。".into() }
    );
    ApiClient::clear_session();
}
