use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, UserResponse},
    pages::login::repository::SessionRepository,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        match &self.user {
            Some(user) => match user.role {
                Role::Admin => true,
                Role::Staff => false,
            },
            None => false,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    // Rehydrate the persisted session; no authorization decision is made
    // while `loading` is still set.
    let restored = ApiClient::restore_session();
    set_auth_state.update(|state| {
        match restored {
            Some(user) => {
                state.user = Some(user);
                state.is_authenticated = true;
            }
            None => {
                state.user = None;
                state.is_authenticated = false;
            }
        }
        state.loading = false;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &SessionRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &SessionRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = SessionRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = SessionRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn admin_flag_matches_role_exhaustively() {
        let staff = AuthState {
            user: Some(UserResponse {
                id: "u1".into(),
                name: "Taro".into(),
                email: "taro@example.com".into(),
                role: Role::Staff,
                department: None,
            }),
            is_authenticated: true,
            loading: false,
        };
        assert!(!staff.is_admin());

        let admin = AuthState {
            user: staff.user.clone().map(|mut user| {
                user.role = Role::Admin;
                user
            }),
            ..staff.clone()
        };
        assert!(admin.is_admin());
        assert!(!AuthState::default().is_admin());
    }
}
