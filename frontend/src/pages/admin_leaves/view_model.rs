use crate::{
    api::{
        ApiClient, ApiError, LeaveFilters, LeaveRequestResponse, UpdateLeaveStatusRequest,
    },
    pages::admin_leaves::{
        repository::AdminLeavesRepository,
        utils::{FilterFormState, StatusFormState},
    },
    pages::leaves::utils::MessageState,
    utils::download::{document_filename, report_filename, trigger_binary_download},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct StatusActionPayload {
    pub id: String,
    pub payload: UpdateLeaveStatusRequest,
}

#[derive(Clone, Copy)]
pub struct AdminLeavesViewModel {
    pub filter_state: FilterFormState,
    pub status_state: StatusFormState,
    pub applied_filters: RwSignal<LeaveFilters>,
    pub message: RwSignal<MessageState>,
    pub selected_request: RwSignal<Option<LeaveRequestResponse>>,
    pub deciding_request: RwSignal<Option<LeaveRequestResponse>>,
    pub reload: RwSignal<u32>,
    pub requests_resource: Resource<(LeaveFilters, u32), Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub status_action: Action<StatusActionPayload, Result<(), ApiError>>,
    pub export_action: Action<LeaveFilters, Result<Vec<u8>, ApiError>>,
    pub download_action: Action<String, Result<Vec<u8>, ApiError>>,
}

fn apply_status_action_result(
    result: Option<Result<(), ApiError>>,
    message: RwSignal<MessageState>,
    deciding_request: RwSignal<Option<LeaveRequestResponse>>,
    status_state: StatusFormState,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success("申請のステータスを更新しました。"));
                deciding_request.set(None);
                status_state.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_export_action_result(
    result: Option<Result<Vec<u8>, ApiError>>,
    message: RwSignal<MessageState>,
) {
    if let Some(result) = result {
        match result {
            Ok(bytes) => {
                let today = chrono::Utc::now().date_naive();
                match trigger_binary_download(&report_filename(today), &bytes) {
                    Ok(()) => message
                        .update(|msg| msg.set_success("CSVレポートをダウンロードしました。")),
                    Err(err) => message.update(|msg| msg.set_error(ApiError::network(err))),
                }
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_download_action_result(
    result: Option<Result<Vec<u8>, ApiError>>,
    request_id: Option<String>,
    message: RwSignal<MessageState>,
) {
    if let Some(result) = result {
        match result {
            Ok(bytes) => {
                let filename = document_filename(request_id.as_deref().unwrap_or("unknown"));
                match trigger_binary_download(&filename, &bytes) {
                    Ok(()) => {
                        message.update(|msg| msg.set_success("書類をダウンロードしました。"))
                    }
                    Err(err) => message.update(|msg| msg.set_error(ApiError::network(err))),
                }
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl AdminLeavesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdminLeavesRepository::new_with_client(Rc::new(api)));

        let filter_state = FilterFormState::default();
        let status_state = StatusFormState::default();
        let applied_filters = create_rw_signal(LeaveFilters::default());
        let message = create_rw_signal(MessageState::default());
        let selected_request = create_rw_signal(None::<LeaveRequestResponse>);
        let deciding_request = create_rw_signal(None::<LeaveRequestResponse>);
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || (applied_filters.get(), reload.get()),
            move |(filters, _)| {
                let repo = repository.get_value();
                async move { repo.list(&filters).await }
            },
        );

        let status_action = create_action(move |payload: &StatusActionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                repo.update_status(&payload.id, &payload.payload)
                    .await
                    .map(|_| ())
            }
        });

        let export_action = create_action(move |filters: &LeaveFilters| {
            let repo = repository.get_value();
            let filters = filters.clone();
            async move { repo.export(&filters).await }
        });

        let download_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.download_document(&id).await }
        });

        {
            create_effect(move |_| {
                apply_status_action_result(
                    status_action.value().get(),
                    message,
                    deciding_request,
                    status_state,
                    reload,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_export_action_result(export_action.value().get(), message);
            });
        }

        {
            create_effect(move |_| {
                let request_id = download_action.input().get();
                apply_download_action_result(download_action.value().get(), request_id, message);
            });
        }

        Self {
            filter_state,
            status_state,
            applied_filters,
            message,
            selected_request,
            deciding_request,
            reload,
            requests_resource,
            status_action,
            export_action,
            download_action,
        }
    }

    pub fn requests(&self) -> Signal<Vec<LeaveRequestResponse>> {
        let resource = self.requests_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn list_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }
}

pub fn use_admin_leaves_view_model() -> AdminLeavesViewModel {
    match use_context::<AdminLeavesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminLeavesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
