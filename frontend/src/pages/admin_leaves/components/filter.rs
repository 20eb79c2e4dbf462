use crate::{
    api::{LeaveStatus, LeaveType},
    components::status_badge::leave_status_label,
    pages::admin_leaves::utils::{FilterField, FilterFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn FilterFieldError(state: FilterFormState, field: FilterField) -> impl IntoView {
    view! {
        {move || state.error_for(field).map(|message| view! {
            <p class="mt-1 text-xs text-status-error-text">{message}</p>
        })}
    }
}

const STATUS_OPTIONS: [LeaveStatus; 3] = [
    LeaveStatus::Pending,
    LeaveStatus::Approved,
    LeaveStatus::Rejected,
];

#[component]
pub fn AdminRequestsFilter(
    state: FilterFormState,
    export_pending: Signal<bool>,
    on_apply: Callback<SubmitEvent>,
    on_export: Callback<()>,
) -> impl IntoView {
    let department = state.department;
    let status = state.status;
    let leave_type = state.leave_type;
    let start_date = state.start_date;
    let end_date = state.end_date;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-sm font-semibold text-fg">"申請の絞り込み"</h3>
                    <p class="text-xs text-fg-muted">"条件を指定して一覧とCSVエクスポートを絞り込みます。"</p>
                </div>
                <button
                    class="px-3 py-1.5 rounded border border-border text-sm font-medium text-fg disabled:opacity-50"
                    disabled=move || export_pending.get()
                    on:click=move |_| on_export.call(())
                >
                    {move || if export_pending.get() { "エクスポート中..." } else { "CSVエクスポート" }}
                </button>
            </div>
            <form class="grid grid-cols-1 gap-4 md:grid-cols-5" on:submit=move |ev| on_apply.call(ev)>
                <div>
                    <label class="block text-xs font-medium text-fg-muted">"部署"</label>
                    <input
                        type="text"
                        class="mt-1 block w-full border rounded px-2 py-1 text-sm bg-form-control-bg"
                        prop:value=move || department.get()
                        on:input=move |ev| department.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-xs font-medium text-fg-muted">"ステータス"</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1 text-sm bg-form-control-bg"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="">"すべて"</option>
                        {STATUS_OPTIONS
                            .into_iter()
                            .map(|s| view! { <option value=s.as_wire()>{leave_status_label(s)}</option> })
                            .collect_view()}
                    </select>
                    <FilterFieldError state=state field=FilterField::Status />
                </div>
                <div>
                    <label class="block text-xs font-medium text-fg-muted">"種類"</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1 text-sm bg-form-control-bg"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        <option value="">"すべて"</option>
                        {LeaveType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_wire()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                    <FilterFieldError state=state field=FilterField::LeaveType />
                </div>
                <div>
                    <label class="block text-xs font-medium text-fg-muted">"開始日"</label>
                    <input
                        type="date"
                        class="mt-1 block w-full border rounded px-2 py-1 text-sm bg-form-control-bg"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                    <FilterFieldError state=state field=FilterField::StartDate />
                </div>
                <div>
                    <label class="block text-xs font-medium text-fg-muted">"終了日"</label>
                    <input
                        type="date"
                        class="mt-1 block w-full border rounded px-2 py-1 text-sm bg-form-control-bg"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                    <FilterFieldError state=state field=FilterField::EndDate />
                </div>
                <div class="md:col-span-5 flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded text-sm font-medium text-fg-muted underline"
                        on:click=move |_| state.clear()
                    >
                        "クリア"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-1.5 rounded bg-action-primary-bg text-action-primary-text text-sm font-medium"
                    >
                        "絞り込み"
                    </button>
                </div>
            </form>
        </div>
    }
}
