use crate::{
    api::{ApiError, LeaveRequestResponse},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
        status_badge::StatusBadge,
    },
    pages::admin_leaves::utils::can_decide,
    utils::format::date_range_label,
};
use leptos::*;

#[component]
pub fn AdminRequestsTable(
    requests: Signal<Vec<LeaveRequestResponse>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    on_select: Callback<LeaveRequestResponse>,
    on_decide: Callback<LeaveRequestResponse>,
    on_download: Callback<LeaveRequestResponse>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"従業員の休暇申請"</h3>
            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    if let Some(err) = error.get() {
                        return view! { <ErrorMessage message=err.message() /> }.into_view();
                    }
                    let rows = requests.get();
                    if rows.is_empty() {
                        return view! {
                            <EmptyState
                                title="該当する申請はありません"
                                description="絞り込み条件を変更して再度お試しください。"
                            />
                        }
                        .into_view();
                    }
                    view! {
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead>
                                <tr class="text-left text-fg-muted">
                                    <th class="py-2 pr-4 font-medium">"申請者"</th>
                                    <th class="py-2 pr-4 font-medium">"部署"</th>
                                    <th class="py-2 pr-4 font-medium">"期間"</th>
                                    <th class="py-2 pr-4 font-medium">"種類"</th>
                                    <th class="py-2 pr-4 font-medium">"ステータス"</th>
                                    <th class="py-2 font-medium"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || requests.get()
                                    key=|request| request.id.clone()
                                    children=move |request: LeaveRequestResponse| {
                                        let select_target = request.clone();
                                        let decide_target = request.clone();
                                        let download_target = request.clone();
                                        let decidable = can_decide(&request);
                                        let has_document = request.document_url.is_some();
                                        view! {
                                            <tr>
                                                <td class="py-2 pr-4 text-fg">{request.user_name.clone()}</td>
                                                <td class="py-2 pr-4 text-fg-muted">
                                                    {request.department.clone().unwrap_or_else(|| "-".into())}
                                                </td>
                                                <td class="py-2 pr-4 text-fg">
                                                    {date_range_label(request.start_date, request.end_date, request.half_day)}
                                                </td>
                                                <td class="py-2 pr-4 text-fg">{request.leave_type.label()}</td>
                                                <td class="py-2 pr-4"><StatusBadge status=request.status /></td>
                                                <td class="py-2 text-right space-x-2">
                                                    <button
                                                        class="text-action-primary-bg underline"
                                                        on:click=move |_| on_select.call(select_target.clone())
                                                    >
                                                        "詳細"
                                                    </button>
                                                    <Show when=move || decidable>
                                                        {
                                                            let decide_target = decide_target.clone();
                                                            view! {
                                                                <button
                                                                    class="text-action-primary-bg underline"
                                                                    on:click=move |_| on_decide.call(decide_target.clone())
                                                                >
                                                                    "審査"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
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
