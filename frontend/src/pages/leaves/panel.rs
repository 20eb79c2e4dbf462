use crate::{
    api::{ApiClient, LeaveRequestResponse, LeaveStatus},
    pages::leaves::{
        components::{detail_modal::LeaveDetailModal, list::LeaveRequestsList},
        repository::LeavesRepository,
        utils::{filter_by_status, MessageState},
    },
    utils::download::{document_filename, trigger_binary_download},
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeavesRepository::new_with_client(Rc::new(api)));

    let active_tab = create_rw_signal(None::<LeaveStatus>);
    let message = create_rw_signal(MessageState::default());
    let selected_request = create_rw_signal(None::<LeaveRequestResponse>);

    let requests_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_my_requests().await }
        },
    );
    let loading = requests_resource.loading();
    let error = Signal::derive(move || requests_resource.get().and_then(|result| result.err()));
    let filtered = Signal::derive(move || {
        let requests = requests_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        filter_by_status(&requests, active_tab.get())
    });

    let download_action = create_action(move |request: &LeaveRequestResponse| {
        let repo = repository.get_value();
        let id = request.id.clone();
        async move {
            let bytes = repo.download_document(&id).await?;
            trigger_binary_download(&document_filename(&id), &bytes)
                .map_err(crate::api::ApiError::network)?;
            Ok::<(), crate::api::ApiError>(())
        }
    });

    {
        create_effect(move |_| {
            if let Some(result) = download_action.value().get() {
                match result {
                    Ok(_) => message.update(|msg| msg.set_success("書類をダウンロードしました。")),
                    Err(err) => message.update(|msg| msg.set_error(err)),
                }
            }
        });
    }

    let on_select = Callback::new(move |request: LeaveRequestResponse| {
        selected_request.set(Some(request));
    });
    let on_download = Callback::new(move |request: LeaveRequestResponse| {
        message.update(|msg| msg.clear());
        download_action.dispatch(request);
    });

    view! {
        <>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"休暇申請"</h1>
                    <p class="text-fg-muted text-sm mt-1">"自分の休暇申請を確認・作成します。"</p>
                </div>
                <LeaveRequestsList
                    requests=filtered
                    loading=loading.into()
                    error=error
                    active_tab=active_tab
                    message=message
                    on_select=on_select
                    on_download=on_download
                />
            </div>
            <LeaveDetailModal selected=selected_request />
        </>
    }
}
