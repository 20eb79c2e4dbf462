use crate::api::{ApiError, LeaveRequestResponse, LeaveStatus};

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Tab filter over the already-fetched list; `None` keeps every request.
pub fn filter_by_status(
    requests: &[LeaveRequestResponse],
    status: Option<LeaveStatus>,
) -> Vec<LeaveRequestResponse> {
    match status {
        None => requests.to_vec(),
        Some(status) => requests
            .iter()
            .filter(|request| request.status == status)
            .cloned()
            .collect(),
    }
}
