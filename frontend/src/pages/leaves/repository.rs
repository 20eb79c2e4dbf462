use crate::api::{ApiClient, ApiError, LeaveRequestResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_my_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_my_leave_requests().await
    }

    pub async fn download_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client.download_leave_document(id).await
    }
}
