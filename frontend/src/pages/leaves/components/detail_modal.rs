use crate::{
    api::LeaveRequestResponse,
    components::status_badge::StatusBadge,
    utils::format::date_range_label,
};
use leptos::*;

#[component]
pub fn LeaveDetailModal(selected: RwSignal<Option<LeaveRequestResponse>>) -> impl IntoView {
    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|request| {
                        view! {
                            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                                <button
                                    type="button"
                                    aria-label="閉じる"
                                    class="absolute inset-0 bg-overlay-backdrop"
                                    on:click=move |_| selected.set(None)
                                ></button>
                                <div
                                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                >
                                    <div class="flex items-start justify-between gap-3">
                                        <h2 class="text-lg font-semibold text-fg">"申請の詳細"</h2>
                                        <button
                                            type="button"
                                            aria-label="閉じる"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| selected.set(None)
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <dl class="space-y-2 text-sm">
                                        <div class="flex justify-between">
                                            <dt class="text-fg-muted">"期間"</dt>
                                            <dd class="text-fg">
                                                {date_range_label(request.start_date, request.end_date, request.half_day)}
                                            </dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-fg-muted">"種類"</dt>
                                            <dd class="text-fg">{request.leave_type.label()}</dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-fg-muted">"ステータス"</dt>
                                            <dd><StatusBadge status=request.status /></dd>
                                        </div>
                                        <div>
                                            <dt class="text-fg-muted">"理由"</dt>
                                            <dd class="text-fg mt-1 whitespace-pre-wrap">{request.reason.clone()}</dd>
                                        </div>
                                        {request.admin_comment.clone().map(|comment| view! {
                                            <div>
                                                <dt class="text-fg-muted">"管理者コメント"</dt>
                                                <dd class="text-fg mt-1 whitespace-pre-wrap">{comment}</dd>
                                            </div>
                                        })}
                                    </dl>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
