use crate::api::{
    LeaveFilters, LeaveRequestResponse, LeaveStatus, LeaveType, UpdateLeaveStatusRequest,
};
use crate::utils::validation::{optional_trimmed, parse_date, FieldErrors};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    LeaveType,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Default)]
pub struct FilterFormInput {
    pub department: String,
    pub status: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
}

/// Normalizes the filter form: empty strings become "no constraint", filled
/// fields must parse. An all-empty form yields `LeaveFilters::default()`.
pub fn build_filters(input: &FilterFormInput) -> Result<LeaveFilters, FieldErrors<FilterField>> {
    let mut errors = FieldErrors::default();

    let status = match optional_trimmed(&input.status) {
        None => None,
        Some(raw) => {
            let parsed = LeaveStatus::from_wire(&raw);
            if parsed.is_none() {
                errors.push(FilterField::Status, "ステータスの指定が不正です。");
            }
            parsed
        }
    };

    let leave_type = match optional_trimmed(&input.leave_type) {
        None => None,
        Some(raw) => {
            let parsed = LeaveType::from_wire(&raw);
            if parsed.is_none() {
                errors.push(FilterField::LeaveType, "休暇種類の指定が不正です。");
            }
            parsed
        }
    };

    let start_date = parse_optional_date(&input.start_date, FilterField::StartDate, &mut errors);
    let end_date = parse_optional_date(&input.end_date, FilterField::EndDate, &mut errors);
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            errors.push(
                FilterField::EndDate,
                "終了日は開始日以降の日付を指定してください。",
            );
        }
    }

    errors.into_result().map(|_| LeaveFilters {
        department: optional_trimmed(&input.department),
        status,
        leave_type,
        start_date,
        end_date,
    })
}

fn parse_optional_date(
    raw: &str,
    field: FilterField,
    errors: &mut FieldErrors<FilterField>,
) -> Option<chrono::NaiveDate> {
    let raw = optional_trimmed(raw)?;
    let parsed = parse_date(&raw);
    if parsed.is_none() {
        errors.push(field, "日付は YYYY-MM-DD 形式で入力してください。");
    }
    parsed
}

#[derive(Clone, Copy)]
pub struct FilterFormState {
    pub department: RwSignal<String>,
    pub status: RwSignal<String>,
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub errors: RwSignal<FieldErrors<FilterField>>,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self {
            department: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl FilterFormState {
    pub fn snapshot(&self) -> FilterFormInput {
        FilterFormInput {
            department: self.department.get_untracked(),
            status: self.status.get_untracked(),
            leave_type: self.leave_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
        }
    }

    pub fn error_for(&self, field: FilterField) -> Option<String> {
        self.errors.get().get(field).map(|message| message.to_string())
    }

    pub fn clear(&self) {
        self.department.set(String::new());
        self.status.set(String::new());
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.errors.set(FieldErrors::default());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Decision,
}

#[derive(Debug, Clone, Default)]
pub struct StatusFormInput {
    pub decision: String,
    pub comment: String,
}

/// The decision is restricted to the two terminal values; the comment stays
/// optional and unbounded client-side.
pub fn build_status_update(
    input: &StatusFormInput,
) -> Result<UpdateLeaveStatusRequest, FieldErrors<StatusField>> {
    let mut errors = FieldErrors::default();
    let status = match optional_trimmed(&input.decision) {
        None => {
            errors.push(StatusField::Decision, "承認または却下を選択してください。");
            None
        }
        Some(raw) => match LeaveStatus::from_wire(&raw) {
            Some(LeaveStatus::Approved) => Some(LeaveStatus::Approved),
            Some(LeaveStatus::Rejected) => Some(LeaveStatus::Rejected),
            _ => {
                errors.push(StatusField::Decision, "承認または却下を選択してください。");
                None
            }
        },
    };

    match (status, errors.into_result()) {
        (Some(status), Ok(())) => Ok(UpdateLeaveStatusRequest {
            status,
            admin_comment: optional_trimmed(&input.comment),
        }),
        (_, Err(errors)) => Err(errors),
        // Unreachable: a missing status always records an error above.
        (None, Ok(())) => Err(FieldErrors::default()),
    }
}

/// Only awaiting-decision requests may be transitioned.
pub fn can_decide(request: &LeaveRequestResponse) -> bool {
    matches!(request.status, LeaveStatus::Pending)
}

#[derive(Clone, Copy)]
pub struct StatusFormState {
    pub decision: RwSignal<String>,
    pub comment: RwSignal<String>,
    pub errors: RwSignal<FieldErrors<StatusField>>,
}

impl Default for StatusFormState {
    fn default() -> Self {
        Self {
            decision: create_rw_signal(String::new()),
            comment: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl StatusFormState {
    pub fn snapshot(&self) -> StatusFormInput {
        StatusFormInput {
            decision: self.decision.get_untracked(),
            comment: self.comment.get_untracked(),
        }
    }

    pub fn decision_error(&self) -> Option<String> {
        self.errors
            .get()
            .get(StatusField::Decision)
            .map(|message| message.to_string())
    }

    pub fn reset(&self) {
        self.decision.set(String::new());
        self.comment.set(String::new());
        self.errors.set(FieldErrors::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::leave_request;

    #[test]
    fn empty_filter_form_builds_unconstrained_query() {
        let filters = build_filters(&FilterFormInput::default()).unwrap();
        assert!(filters.is_empty());
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn filled_filter_fields_are_normalized() {
        let input = FilterFormInput {
            department: "  Sales  ".into(),
            status: "PENDING".into(),
            leave_type: "ANNUAL".into(),
            start_date: "2026-01-01".into(),
            end_date: "2026-01-31".into(),
        };
        let filters = build_filters(&input).unwrap();
        assert_eq!(filters.department.as_deref(), Some("Sales"));
        assert_eq!(filters.status, Some(LeaveStatus::Pending));
        assert_eq!(filters.leave_type, Some(LeaveType::Annual));
    }

    #[test]
    fn malformed_filter_date_is_rejected() {
        let input = FilterFormInput {
            start_date: "01/02/2026".into(),
            ..FilterFormInput::default()
        };
        let errors = build_filters(&input).unwrap_err();
        assert!(errors.get(FilterField::StartDate).is_some());
    }

    #[test]
    fn filter_range_must_be_ordered() {
        let input = FilterFormInput {
            start_date: "2026-02-01".into(),
            end_date: "2026-01-01".into(),
            ..FilterFormInput::default()
        };
        let errors = build_filters(&input).unwrap_err();
        assert!(errors.get(FilterField::EndDate).is_some());
    }

    #[test]
    fn status_update_requires_a_decision() {
        let errors = build_status_update(&StatusFormInput::default()).unwrap_err();
        assert_eq!(
            errors.get(StatusField::Decision),
            Some("承認または却下を選択してください。")
        );
    }

    #[test]
    fn pending_is_not_a_valid_decision() {
        let input = StatusFormInput {
            decision: "PENDING".into(),
            comment: String::new(),
        };
        assert!(build_status_update(&input).is_err());
    }

    #[test]
    fn decision_accepted_with_and_without_comment() {
        let approved = build_status_update(&StatusFormInput {
            decision: "APPROVED".into(),
            comment: String::new(),
        })
        .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert!(approved.admin_comment.is_none());

        let rejected = build_status_update(&StatusFormInput {
            decision: "REJECTED".into(),
            comment: "  繁忙期のため  ".into(),
        })
        .unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.admin_comment.as_deref(), Some("繁忙期のため"));
    }

    #[test]
    fn only_pending_requests_are_decidable() {
        assert!(can_decide(&leave_request("lr-1", LeaveStatus::Pending)));
        assert!(!can_decide(&leave_request("lr-2", LeaveStatus::Approved)));
        assert!(!can_decide(&leave_request("lr-3", LeaveStatus::Rejected)));
    }
}
