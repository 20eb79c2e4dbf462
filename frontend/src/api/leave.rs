use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{
        ApiError, CreateLeaveRequest, LeaveFilters, LeaveRequestResponse, LeaveStatistics,
        UpdateLeaveStatusRequest,
    },
};

fn multipart_form(payload: CreateLeaveRequest) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("leaveType", payload.leave_type.as_wire())
        .text("startDate", payload.start_date.format("%Y-%m-%d").to_string())
        .text("endDate", payload.end_date.format("%Y-%m-%d").to_string())
        .text("halfDay", payload.half_day.to_string())
        .text("reason", payload.reason);
    if let Some(document) = payload.document {
        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.content_type)
            .map_err(|e| ApiError::network(format!("Invalid document type: {}", e)))?;
        form = form.part("document", part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn create_leave_request(
        &self,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let form = multipart_form(payload)?;
        let request = Self::authorize(
            self.http_client()
                .post(format!("{}/leave", base_url))
                .multipart(form),
        );
        let response = self.send(request).await?;
        Self::map_json_response(response).await
    }

    pub async fn get_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorize(self.http_client().get(format!("{}/leave/user", base_url)));
        let response = self.send(request).await?;
        Self::map_json_response(response).await
    }

    pub async fn get_all_leave_requests(
        &self,
        filters: &LeaveFilters,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().get(format!("{}/leave", base_url));
        let params = filters.to_query();
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(Self::authorize(request)).await?;
        Self::map_json_response(response).await
    }

    pub async fn get_leave_request(&self, id: &str) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request =
            Self::authorize(self.http_client().get(format!("{}/leave/{}", base_url, id)));
        let response = self.send(request).await?;
        Self::map_json_response(response).await
    }

    pub async fn update_leave_status(
        &self,
        id: &str,
        payload: &UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorize(
            self.http_client()
                .patch(format!("{}/leave/{}/status", base_url, id))
                .json(payload),
        );
        let response = self.send(request).await?;
        Self::map_json_response(response).await
    }

    pub async fn get_leave_statistics(&self) -> Result<LeaveStatistics, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorize(
            self.http_client()
                .get(format!("{}/leave/statistics", base_url)),
        );
        let response = self.send(request).await?;
        Self::map_json_response(response).await
    }

    /// Filtered CSV report as raw bytes; the caller names and saves the file.
    pub async fn export_leave_report(&self, filters: &LeaveFilters) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().get(format!("{}/reports/leave", base_url));
        let params = filters.to_query();
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(Self::authorize(request)).await?;
        Self::map_bytes_response(response).await
    }

    pub async fn download_leave_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorize(
            self.http_client()
                .get(format!("{}/leave/{}/document", base_url, id)),
        );
        let response = self.send(request).await?;
        Self::map_bytes_response(response).await
    }
}
