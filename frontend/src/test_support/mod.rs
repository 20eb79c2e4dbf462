#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{LeaveRequestResponse, LeaveStatus, LeaveType, Role, UserResponse};
    use crate::state::auth::AuthState;
    use chrono::NaiveDate;
    use leptos::*;

    pub fn user_with_role(role: Role) -> UserResponse {
        UserResponse {
            id: "u-test".into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            role,
            department: Some("Engineering".into()),
        }
    }

    pub fn provide_auth_user(
        role: Option<Role>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let user = role.map(user_with_role);
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn leave_request(id: &str, status: LeaveStatus) -> LeaveRequestResponse {
        LeaveRequestResponse {
            id: id.into(),
            user_id: "u-test".into(),
            user_name: "Test User".into(),
            department: Some("Engineering".into()),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            half_day: false,
            reason: "family trip to Hokkaido".into(),
            status,
            document_url: None,
            admin_comment: None,
            created_at: "2026-02-01T09:00:00Z".into(),
            updated_at: "2026-02-01T09:00:00Z".into(),
        }
    }
}
