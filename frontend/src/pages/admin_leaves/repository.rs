use crate::api::{
    ApiClient, ApiError, LeaveFilters, LeaveRequestResponse, UpdateLeaveStatusRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminLeavesRepository {
    client: Rc<ApiClient>,
}

impl AdminLeavesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &LeaveFilters) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_all_leave_requests(filters).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        payload: &UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.update_leave_status(id, payload).await
    }

    pub async fn export(&self, filters: &LeaveFilters) -> Result<Vec<u8>, ApiError> {
        self.client.export_leave_report(filters).await
    }

    pub async fn download_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client.download_leave_document(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn admin_repository_covers_review_flow() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave").query_param("status", "PENDING");
            then.status(200).json_body(serde_json::json!([{
                "id": "lr-1",
                "userId": "u1",
                "userName": "Taro Yamada",
                "department": "Sales",
                "leaveType": "PERSONAL",
                "startDate": "2026-05-01",
                "endDate": "2026-05-02",
                "halfDay": false,
                "reason": "役所での手続きのため",
                "status": "PENDING",
                "documentUrl": null,
                "adminComment": null,
                "createdAt": "2026-04-20T09:00:00Z",
                "updatedAt": "2026-04-20T09:00:00Z"
            }]));
        });
        server.mock(|when, then| {
            when.method(httpmock::Method::PATCH).path("/api/leave/lr-1/status");
            then.status(200).json_body(serde_json::json!({
                "id": "lr-1",
                "userId": "u1",
                "userName": "Taro Yamada",
                "department": "Sales",
                "leaveType": "PERSONAL",
                "startDate": "2026-05-01",
                "endDate": "2026-05-02",
                "halfDay": false,
                "reason": "役所での手続きのため",
                "status": "APPROVED",
                "documentUrl": null,
                "adminComment": "問題ありません",
                "createdAt": "2026-04-20T09:00:00Z",
                "updatedAt": "2026-04-21T09:00:00Z"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/leave");
            then.status(200).body("id,status\nlr-1,APPROVED\n");
        });

        let repo = AdminLeavesRepository::new_with_client(std::rc::Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));

        let filters = LeaveFilters {
            status: Some(LeaveStatus::Pending),
            ..LeaveFilters::default()
        };
        let requests = repo.list(&filters).await.unwrap();
        assert_eq!(requests.len(), 1);

        let updated = repo
            .update_status(
                "lr-1",
                &UpdateLeaveStatusRequest {
                    status: LeaveStatus::Approved,
                    admin_comment: Some("問題ありません".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, LeaveStatus::Approved);

        let csv = repo.export(&LeaveFilters::default()).await.unwrap();
        assert!(csv.starts_with(b"id,status"));
    }
}
