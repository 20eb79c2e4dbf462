use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    error: ReadSignal<Option<String>>,
    notice: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-fg">"LeaveFlow"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"休暇申請の管理にログイン"</p>
                </div>
                {move || notice.get().map(|message| view! {
                    <div class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded text-sm">
                        {message}
                    </div>
                })}
                {move || error.get().map(|message| view! {
                    <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm">
                        {message}
                    </div>
                })}
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"メールアドレス"</label>
                        <input
                            type="email"
                            class="mt-1 block w-full border rounded px-3 py-2 bg-form-control-bg"
                            prop:value=move || email.get()
                            on:input=move |ev| on_email_input.call(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"パスワード"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border rounded px-3 py-2 bg-form-control-bg"
                            prop:value=move || password.get()
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full px-4 py-2 rounded bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "ログイン中..." } else { "ログイン" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
