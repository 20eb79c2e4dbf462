use crate::{
    api::{ApiClient, LoginRequest},
    pages::login::{components::form::LoginForm, utils},
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    // One-shot notice left behind by the 401 handling.
    let (notice, _set_notice) = create_signal(if ApiClient::take_session_expired_notice() {
        Some(crate::api::client::SESSION_EXPIRED_MESSAGE.to_string())
    } else {
        None
    });

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        #[cfg(target_arch = "wasm32")]
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => set_error.set(Some(err.message())),
                }
            }
        });
    }

    let handle_submit = {
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            if pending.get_untracked() {
                return;
            }
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();

            if let Err(msg) = utils::validate_credentials(&email_value, &password_value) {
                set_error.set(Some(msg));
                return;
            }
            set_error.set(None);

            login_action.dispatch(LoginRequest {
                email: email_value.trim().to_string(),
                password: password_value,
            });
        })
    };

    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <LoginForm
            email=email
            password=password
            error=error
            notice=notice
            pending=pending.into()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
