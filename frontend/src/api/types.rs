use chrono::NaiveDate;
use leptos::IntoView;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed role set; authorization decisions match on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Staff,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Staff => "一般",
            Role::Admin => "管理者",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Unpaid,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Unpaid,
        LeaveType::Other,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            LeaveType::Annual => "ANNUAL",
            LeaveType::Sick => "SICK",
            LeaveType::Personal => "PERSONAL",
            LeaveType::Unpaid => "UNPAID",
            LeaveType::Other => "OTHER",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_wire() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "年次有給",
            LeaveType::Sick => "病気休暇",
            LeaveType::Personal => "私用休暇",
            LeaveType::Unpaid => "無給休暇",
            LeaveType::Other => "その他",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(LeaveStatus::Pending),
            "APPROVED" => Some(LeaveStatus::Approved),
            "REJECTED" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub department: Option<String>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub half_day: bool,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub admin_comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatistics {
    pub total_days: f64,
    pub used_days: f64,
    pub pending_days: f64,
    pub available_days: f64,
}

/// Multipart payload for a new leave request. The document part is already
/// read into memory; metadata validation happens before the bytes are loaded.
#[derive(Debug, Clone)]
pub struct CreateLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub half_day: bool,
    pub reason: String,
    pub document: Option<DocumentUpload>,
}

#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
}

/// Optional list constraints; empty fields are dropped before the query is
/// built so an empty filter form is identical to an unfiltered fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveFilters {
    pub department: Option<String>,
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl LeaveFilters {
    pub fn is_empty(&self) -> bool {
        self.department.is_none()
            && self.status.is_none()
            && self.leave_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(department) = &self.department {
            params.push(("department", department.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_wire().to_string()));
        }
        if let Some(leave_type) = self.leave_type {
            params.push(("leaveType", leave_type.as_wire().to_string()));
        }
        if let Some(start) = self.start_date {
            params.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// 401 from the backend; the wrapper has already torn the session down.
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success status, with the server-supplied message.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body did not match the documented shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> leptos::View {
        self.message().into_view()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_update_status_request_camel_case_fields() {
        let request = UpdateLeaveStatusRequest {
            status: LeaveStatus::Approved,
            admin_comment: Some("ok".into()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["status"], serde_json::json!("APPROVED"));
        assert_eq!(value["adminComment"], serde_json::json!("ok"));
    }

    #[wasm_bindgen_test]
    fn deserialize_statistics_camel_case_fields() {
        let raw = r#"{"totalDays":20,"usedDays":5,"pendingDays":2,"availableDays":13}"#;
        let stats: LeaveStatistics = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.available_days, 13.0);
    }
}
