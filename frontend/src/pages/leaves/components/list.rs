use crate::{
    api::{ApiError, LeaveRequestResponse, LeaveStatus},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
        status_badge::StatusBadge,
    },
    pages::leaves::utils::MessageState,
    utils::format::date_range_label,
};
use leptos::*;

const TABS: [(Option<LeaveStatus>, &str); 4] = [
    (None, "すべて"),
    (Some(LeaveStatus::Pending), "承認待ち"),
    (Some(LeaveStatus::Approved), "承認済み"),
    (Some(LeaveStatus::Rejected), "却下"),
];

#[component]
pub fn LeaveRequestsList(
    requests: Signal<Vec<LeaveRequestResponse>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    active_tab: RwSignal<Option<LeaveStatus>>,
    message: RwSignal<MessageState>,
    on_select: Callback<LeaveRequestResponse>,
    on_download: Callback<LeaveRequestResponse>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-fg">"休暇申請の一覧"</h3>
                <a
                    href="/leave-requests/new"
                    class="px-3 py-1.5 rounded bg-action-primary-bg text-action-primary-text text-sm font-medium"
                >
                    "新規申請"
                </a>
            </div>
            <div class="flex gap-2 border-b border-border pb-2">
                {TABS
                    .into_iter()
                    .map(|(status, label)| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == status {
                                        "px-3 py-1.5 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "px-3 py-1.5 rounded-md text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
                                    }
                                }
                                on:click=move |_| active_tab.set(status)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message={message.get().error.map(|e| e.message()).unwrap_or_default()} />
            </Show>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    if let Some(err) = error.get() {
                        return view! { <ErrorMessage message=err.message() /> }.into_view();
                    }
                    let rows = requests.get();
                    if rows.is_empty() {
                        return view! {
                            <EmptyState
                                title="休暇申請はまだありません"
                                description="新規申請から最初の休暇申請を作成できます。"
                            />
                        }
                        .into_view();
                    }
                    view! {
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead>
                                <tr class="text-left text-fg-muted">
                                    <th class="py-2 pr-4 font-medium">"期間"</th>
                                    <th class="py-2 pr-4 font-medium">"種類"</th>
                                    <th class="py-2 pr-4 font-medium">"ステータス"</th>
                                    <th class="py-2 pr-4 font-medium">"申請日"</th>
                                    <th class="py-2 font-medium"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || requests.get()
                                    key=|request| request.id.clone()
                                    children=move |request: LeaveRequestResponse| {
                                        let select_target = request.clone();
                                        let download_target = request.clone();
                                        let has_document = request.document_url.is_some();
                                        view! {
                                            <tr>
                                                <td class="py-2 pr-4 text-fg">
                                                    {date_range_label(request.start_date, request.end_date, request.half_day)}
                                                </td>
                                                <td class="py-2 pr-4 text-fg">{request.leave_type.label()}</td>
                                                <td class="py-2 pr-4"><StatusBadge status=request.status /></td>
                                                <td class="py-2 pr-4 text-fg-muted">{request.created_at.clone()}</td>
                                                <td class="py-2 text-right space-x-2">
                                                    <button
                                                        class="text-action-primary-bg underline"
                                                        on:click=move |_| on_select.call(select_target.clone())
                                                    >
                                                        "詳細"
                                                    </button>
                                                    <Show when=move || has_document>
                                                        {
                                                            let download_target = download_target.clone();
                                                            view! {
                                                                <button
                                                                    class="text-action-primary-bg underline"
                                                                    on:click=move |_| on_download.call(download_target.clone())
                                                                >
                                                                    "書類"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </Show>
        </div>
    }
}
