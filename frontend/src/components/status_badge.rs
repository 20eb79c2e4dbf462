use crate::api::LeaveStatus;
use leptos::*;

pub fn leave_status_label(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "承認待ち",
        LeaveStatus::Approved => "承認済み",
        LeaveStatus::Rejected => "却下",
    }
}

pub fn leave_status_classes(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            leave_status_classes(status)
        )>
            {leave_status_label(status)}
        </span>
    }
}
