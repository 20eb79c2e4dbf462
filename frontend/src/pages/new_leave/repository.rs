use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct NewLeaveRepository {
    client: Rc<ApiClient>,
}

impl NewLeaveRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(
        &self,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.create_leave_request(payload).await
    }
}
