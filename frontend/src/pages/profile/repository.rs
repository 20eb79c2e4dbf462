use crate::api::{ApiClient, ApiError, LeaveStatistics};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_statistics(&self) -> Result<LeaveStatistics, ApiError> {
        self.client.get_leave_statistics().await
    }
}
