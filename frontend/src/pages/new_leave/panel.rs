use crate::{
    api::{ApiClient, CreateLeaveRequest},
    pages::leaves::utils::MessageState,
    pages::new_leave::{
        components::form::LeaveRequestForm,
        repository::NewLeaveRepository,
        utils::{build_payload, read_document, validate_leave_form, LeaveFormState},
    },
};
use leptos::{ev::SubmitEvent, *};
use std::rc::Rc;

#[component]
pub fn NewLeaveRequestPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(NewLeaveRepository::new_with_client(Rc::new(api)));

    let state = LeaveFormState::default();
    let message = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |payload: &CreateLeaveRequest| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.submit(payload).await.map(|_| ()) }
    });
    let pending = submit_action.pending();

    {
        let state = state;
        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(_) => {
                        message.update(|msg| msg.set_success("休暇申請を送信しました。"));
                        state.reset();
                        #[cfg(target_arch = "wasm32")]
                        if let Some(win) = web_sys::window() {
                            let _ = win.location().set_href("/leave-requests");
                        }
                    }
                    Err(err) => message.update(|msg| msg.set_error(err)),
                }
            }
        });
    }

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        message.update(|msg| msg.clear());

        // Validation blocks submission: no network call while any rule fails.
        let validated = match validate_leave_form(&state.snapshot()) {
            Ok(validated) => {
                state.errors.set(Default::default());
                validated
            }
            Err(errors) => {
                state.errors.set(errors);
                return;
            }
        };

        let document = state
            .document
            .get_untracked()
            .filter(|file| file.size() as u64 > 0);
        spawn_local(async move {
            let upload = match document {
                Some(file) => match read_document(&file).await {
                    Ok(upload) => Some(upload),
                    Err(err) => {
                        message.update(|msg| msg.set_error(err));
                        return;
                    }
                },
                None => None,
            };
            submit_action.dispatch(build_payload(validated, upload));
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"新規休暇申請"</h1>
                <p class="text-fg-muted text-sm mt-1">"休暇の申請内容を入力して送信してください。"</p>
            </div>
            <LeaveRequestForm
                state=state
                message=message
                pending=pending.into()
                on_submit=on_submit
            />
        </div>
    }
}
