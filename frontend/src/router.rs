use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        admin_leaves::AdminLeaveRequestsPage, dashboard::DashboardPage, home::HomePage,
        leaves::LeaveRequestsPage, login::LoginPage, new_leave::NewLeaveRequestPage,
        not_found::NotFoundPage, profile::ProfilePage, team_calendar::TeamCalendarPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/leave-requests",
    "/leave-requests/new",
    "/profile",
    "/team-calendar",
    "/admin/leave-requests",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/leave-requests",
    "/leave-requests/new",
    "/profile",
    "/team-calendar",
    "/admin/leave-requests",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/leave-requests"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/leave-requests" view=ProtectedLeaveRequests/>
                    <Route path="/leave-requests/new" view=ProtectedNewLeaveRequest/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/team-calendar" view=ProtectedTeamCalendar/>
                    <Route path="/admin/leave-requests" view=ProtectedAdminLeaveRequests/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveRequests() -> impl IntoView {
    view! { <RequireAuth><LeaveRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedNewLeaveRequest() -> impl IntoView {
    view! { <RequireAuth><NewLeaveRequestPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedTeamCalendar() -> impl IntoView {
    view! { <RequireAuth><TeamCalendarPage/></RequireAuth> }
}

#[component]
fn ProtectedAdminLeaveRequests() -> impl IntoView {
    view! { <RequireAdmin><AdminLeaveRequestsPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_admin_console() {
        assert!(ROUTE_PATHS.contains(&"/admin/leave-requests"));
        assert!(ROUTE_PATHS.contains(&"/leave-requests/new"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn admin_routes_are_subset_of_protected() {
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        for path in ADMIN_ROUTE_PATHS {
            assert!(protected.contains(path));
        }
    }

    #[test]
    fn public_and_protected_routes_do_not_overlap() {
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        for path in PUBLIC_ROUTE_PATHS {
            assert!(!protected.contains(path));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
