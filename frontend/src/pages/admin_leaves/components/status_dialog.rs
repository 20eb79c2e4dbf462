use crate::{
    api::{LeaveRequestResponse, LeaveStatus},
    pages::admin_leaves::utils::StatusFormState,
    utils::format::date_range_label,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn StatusDecisionDialog(
    deciding: RwSignal<Option<LeaveRequestResponse>>,
    state: StatusFormState,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let decision = state.decision;
    let comment = state.comment;
    let close = move || {
        deciding.set(None);
        state.reset();
    };

    view! {
        <Show when=move || deciding.get().is_some()>
            {move || {
                deciding
                    .get()
                    .map(|request| {
                        view! {
                            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                                <button
                                    type="button"
                                    aria-label="閉じる"
                                    class="absolute inset-0 bg-overlay-backdrop"
                                    on:click=move |_| close()
                                ></button>
                                <div
                                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                >
                                    <div class="flex items-start justify-between gap-3">
                                        <h2 class="text-lg font-semibold text-fg">"申請の審査"</h2>
                                        <button
                                            type="button"
                                            aria-label="閉じる"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| close()
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <p class="text-sm text-fg-muted">
                                        {format!(
                                            "{} さんの {} の申請を審査します。",
                                            request.user_name,
                                            date_range_label(request.start_date, request.end_date, request.half_day)
                                        )}
                                    </p>
                                    <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                                        <div>
                                            <label class="block text-sm font-medium text-fg-muted">"決定"</label>
                                            <select
                                                class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                                                prop:value=move || decision.get()
                                                on:change=move |ev| decision.set(event_target_value(&ev))
                                            >
                                                <option value="">"選択してください"</option>
                                                <option value=LeaveStatus::Approved.as_wire()>"承認"</option>
                                                <option value=LeaveStatus::Rejected.as_wire()>"却下"</option>
                                            </select>
                                            {move || state.decision_error().map(|message| view! {
                                                <p class="mt-1 text-xs text-status-error-text">{message}</p>
                                            })}
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-fg-muted">"コメント（任意）"</label>
                                            <textarea
                                                rows=3
                                                class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                                                prop:value=move || comment.get()
                                                on:input=move |ev| comment.set(event_target_value(&ev))
                                            ></textarea>
                                        </div>
                                        <div class="flex justify-end gap-2">
                                            <button
                                                type="button"
                                                class="px-4 py-2 rounded border border-border text-sm font-medium text-fg"
                                                on:click=move |_| close()
                                            >
                                                "キャンセル"
                                            </button>
                                            <button
                                                type="submit"
                                                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                                                disabled=move || pending.get()
                                            >
                                                {move || if pending.get() { "更新中..." } else { "決定を保存" }}
                                            </button>
                                        </div>
                                    </form>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
