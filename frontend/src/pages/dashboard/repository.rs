use crate::api::{ApiClient, ApiError, LeaveStatistics};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_statistics(&self) -> Result<LeaveStatistics, ApiError> {
        self.client.get_leave_statistics().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn fetches_statistics() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/statistics");
            then.status(200).json_body(serde_json::json!({
                "totalDays": 20.0,
                "usedDays": 4.0,
                "pendingDays": 1.0,
                "availableDays": 15.0
            }));
        });

        let repo = DashboardRepository::new_with_client(std::rc::Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let stats = repo.fetch_statistics().await.unwrap();
        assert_eq!(stats.available_days, 15.0);
    }
}
