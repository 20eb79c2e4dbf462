use crate::{
    components::layout::{Layout, LoadingSpinner},
    state::auth::{use_auth, AuthState},
};
use leptos::*;

/// Resolved route-guard policy for one auth snapshot. Terminal per
/// navigation; recomputed whenever the session store changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Rehydration still pending: block with a spinner, no navigation.
    Loading,
    RedirectToLogin,
    /// Authenticated but lacking the admin role on an admin-only route.
    RedirectToDashboard,
    /// Render the requested page inside the shared shell.
    Render,
}

pub fn guard_outcome(state: &AuthState, admin_only: bool) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Loading
    } else if !state.is_authenticated {
        GuardOutcome::RedirectToLogin
    } else if admin_only && !state.is_admin() {
        GuardOutcome::RedirectToDashboard
    } else {
        GuardOutcome::Render
    }
}

fn redirect(target: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = target;
}

fn guarded_view(outcome: Memo<GuardOutcome>, children: ChildrenFn) -> impl IntoView {
    create_effect(move |_| match outcome.get() {
        GuardOutcome::RedirectToLogin => redirect("/login"),
        GuardOutcome::RedirectToDashboard => redirect("/dashboard"),
        GuardOutcome::Loading | GuardOutcome::Render => {}
    });
    move || match outcome.get() {
        GuardOutcome::Render => {
            let children = children.clone();
            view! { <Layout>{children()}</Layout> }.into_view()
        }
        GuardOutcome::Loading => view! { <LoadingSpinner /> }.into_view(),
        GuardOutcome::RedirectToLogin | GuardOutcome::RedirectToDashboard => ().into_view(),
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let outcome = create_memo(move |_| guard_outcome(&auth.get(), false));
    guarded_view(outcome, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let outcome = create_memo(move |_| guard_outcome(&auth.get(), true));
    guarded_view(outcome, children)
}

#[cfg(test)]
mod tests {
    use super::{guard_outcome, GuardOutcome};
    use crate::api::{Role, UserResponse};
    use crate::state::auth::AuthState;

    fn user(role: Role) -> UserResponse {
        UserResponse {
            id: "u1".into(),
            name: "Taro Yamada".into(),
            email: "taro@example.com".into(),
            role,
            department: None,
        }
    }

    fn auth_state(user: Option<UserResponse>, loading: bool) -> AuthState {
        AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        }
    }

    #[test]
    fn loading_blocks_any_route_without_navigation() {
        let state = auth_state(None, true);
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Loading);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::Loading);
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        let state = auth_state(None, false);
        assert_eq!(guard_outcome(&state, false), GuardOutcome::RedirectToLogin);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn staff_on_admin_route_redirects_to_dashboard() {
        let state = auth_state(Some(user(Role::Staff)), false);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::RedirectToDashboard);
    }

    #[test]
    fn staff_on_normal_route_renders() {
        let state = auth_state(Some(user(Role::Staff)), false);
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Render);
    }

    #[test]
    fn admin_renders_on_any_route() {
        let state = auth_state(Some(user(Role::Admin)), false);
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Render);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::Render);
    }
}
