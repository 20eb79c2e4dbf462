use crate::{
    api::LeaveType,
    components::layout::{ErrorMessage, SuccessMessage},
    pages::leaves::utils::MessageState,
    pages::new_leave::utils::{LeaveField, LeaveFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn FieldError(state: LeaveFormState, field: LeaveField) -> impl IntoView {
    view! {
        {move || state.error_for(field).map(|message| view! {
            <p class="mt-1 text-xs text-status-error-text">{message}</p>
        })}
    }
}

#[component]
pub fn LeaveRequestForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let leave_type = state.leave_type;
    let start_date = state.start_date;
    let end_date = state.end_date;
    let half_day = state.half_day;
    let reason = state.reason;
    let document = state.document;

    let document_name = move || document.get().map(|file| file.name());

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        document.set(file);
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">"新規休暇申請"</h3>
                <p class="text-sm text-fg-muted">"休暇の種類と期間、理由を入力して申請を送信します。"</p>
            </div>
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message={message.get().error.map(|e| e.message()).unwrap_or_default()} />
            </Show>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
            </Show>
            <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"種類"</label>
                        <select
                            class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                            prop:value=move || leave_type.get()
                            on:change=move |ev| leave_type.set(event_target_value(&ev))
                        >
                            <option value="">"選択してください"</option>
                            {LeaveType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.as_wire()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldError state=state field=LeaveField::LeaveType />
                    </div>
                    <div class="flex items-center justify-between rounded border border-border p-3">
                        <div>
                            <label class="block text-sm font-medium text-fg">"半日休暇"</label>
                            <p class="text-xs text-fg-muted">"半日のみ取得する場合にオンにします。"</p>
                        </div>
                        <input
                            type="checkbox"
                            class="h-4 w-4"
                            prop:checked=move || half_day.get()
                            on:change=move |ev| half_day.set(event_target_checked(&ev))
                        />
                    </div>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"開始日"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                        <FieldError state=state field=LeaveField::StartDate />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"終了日"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                        <FieldError state=state field=LeaveField::EndDate />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"理由"</label>
                    <textarea
                        rows=4
                        class="mt-1 block w-full border rounded px-2 py-1 bg-form-control-bg"
                        placeholder="休暇が必要な理由を入力してください（10文字以上）"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                    <FieldError state=state field=LeaveField::Reason />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"添付書類（任意）"</label>
                    <label class="mt-1 flex cursor-pointer flex-col items-center justify-center rounded-md border-2 border-dashed border-border-strong p-6 text-center">
                        <span class="text-sm font-medium text-fg">"クリックしてファイルを選択"</span>
                        <span class="mt-1 text-xs text-fg-muted">"PDF・JPEG・PNG（5MBまで）"</span>
                        {move || document_name().map(|name| view! {
                            <span class="mt-2 rounded-md bg-surface-muted px-3 py-1 text-sm">{name}</span>
                        })}
                        <input
                            type="file"
                            class="hidden"
                            accept=".pdf,.jpg,.jpeg,.png"
                            on:change=on_file_change
                        />
                    </label>
                    <FieldError state=state field=LeaveField::Document />
                </div>
                <div class="flex justify-end gap-3">
                    <a
                        href="/leave-requests"
                        class="px-4 py-2 rounded border border-border text-sm font-medium text-fg"
                    >
                        "キャンセル"
                    </a>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "送信中..." } else { "申請を送信" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
