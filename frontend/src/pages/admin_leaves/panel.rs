use crate::{
    api::LeaveRequestResponse,
    components::{error::InlineErrorMessage, layout::SuccessMessage},
    pages::admin_leaves::{
        components::{
            detail_dialog::AdminDetailDialog, filter::AdminRequestsFilter,
            status_dialog::StatusDecisionDialog, table::AdminRequestsTable,
        },
        utils::{build_filters, build_status_update},
        view_model::{use_admin_leaves_view_model, StatusActionPayload},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminLeaveRequestsPage() -> impl IntoView {
    let vm = use_admin_leaves_view_model();

    let loading = vm.requests_resource.loading();
    let requests = vm.requests();
    let list_error = vm.list_error();
    let message = vm.message;

    let on_apply = {
        let vm = vm;
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            match build_filters(&vm.filter_state.snapshot()) {
                Ok(filters) => {
                    vm.filter_state.errors.set(Default::default());
                    vm.applied_filters.set(filters);
                }
                Err(errors) => vm.filter_state.errors.set(errors),
            }
        })
    };

    let on_export = {
        let vm = vm;
        Callback::new(move |_: ()| {
            if vm.export_action.pending().get_untracked() {
                return;
            }
            match build_filters(&vm.filter_state.snapshot()) {
                Ok(filters) => {
                    vm.filter_state.errors.set(Default::default());
                    message.update(|msg| msg.clear());
                    vm.export_action.dispatch(filters);
                }
                Err(errors) => vm.filter_state.errors.set(errors),
            }
        })
    };

    let on_select = {
        let vm = vm;
        Callback::new(move |request: LeaveRequestResponse| {
            vm.selected_request.set(Some(request));
        })
    };

    let on_decide = {
        let vm = vm;
        Callback::new(move |request: LeaveRequestResponse| {
            message.update(|msg| msg.clear());
            vm.status_state.reset();
            vm.deciding_request.set(Some(request));
        })
    };

    let on_download = {
        let vm = vm;
        Callback::new(move |request: LeaveRequestResponse| {
            message.update(|msg| msg.clear());
            vm.download_action.dispatch(request.id);
        })
    };

    let on_submit_decision = {
        let vm = vm;
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            if vm.status_action.pending().get_untracked() {
                return;
            }
            let Some(request) = vm.deciding_request.get_untracked() else {
                return;
            };
            match build_status_update(&vm.status_state.snapshot()) {
                Ok(payload) => {
                    vm.status_state.errors.set(Default::default());
                    vm.status_action.dispatch(StatusActionPayload {
                        id: request.id,
                        payload,
                    });
                }
                Err(errors) => vm.status_state.errors.set(errors),
            }
        })
    };

    view! {
        <>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"申請管理"</h1>
                    <p class="text-fg-muted text-sm mt-1">"従業員の休暇申請を確認し、承認・却下を行います。"</p>
                </div>
                <InlineErrorMessage error=Signal::derive(move || message.get().error) />
                <Show when=move || message.get().success.is_some()>
                    <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
                </Show>
                <AdminRequestsFilter
                    state=vm.filter_state
                    export_pending=vm.export_action.pending().into()
                    on_apply=on_apply
                    on_export=on_export
                />
                <AdminRequestsTable
                    requests=requests
                    loading=loading.into()
                    error=list_error
                    on_select=on_select
                    on_decide=on_decide
                    on_download=on_download
                />
            </div>
            <AdminDetailDialog selected=vm.selected_request />
            <StatusDecisionDialog
                deciding=vm.deciding_request
                state=vm.status_state
                pending=vm.status_action.pending().into()
                on_submit=on_submit_decision
            />
        </>
    }
}
