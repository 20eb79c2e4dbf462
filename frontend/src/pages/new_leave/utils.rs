use crate::api::{ApiError, CreateLeaveRequest, DocumentUpload, LeaveType};
use crate::utils::validation::{parse_date, FieldErrors};
use chrono::NaiveDate;
use leptos::*;

pub const MAX_DOCUMENT_SIZE: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_DOCUMENT_TYPES: [&str; 4] =
    ["application/pdf", "image/jpeg", "image/jpg", "image/png"];

pub const REASON_MIN_CHARS: usize = 10;
pub const REASON_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveField {
    LeaveType,
    StartDate,
    EndDate,
    Reason,
    Document,
}

/// File metadata as reported by the picker; checked before any bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

/// Raw form snapshot, decoupled from the reactive state for validation.
#[derive(Debug, Clone, Default)]
pub struct LeaveFormInput {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub half_day: bool,
    pub reason: String,
    pub document: Option<DocumentMeta>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLeaveForm {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub half_day: bool,
    pub reason: String,
}

pub fn validate_leave_form(
    input: &LeaveFormInput,
) -> Result<ValidatedLeaveForm, FieldErrors<LeaveField>> {
    let mut errors = FieldErrors::default();

    let leave_type = LeaveType::from_wire(input.leave_type.trim());
    if leave_type.is_none() {
        errors.push(LeaveField::LeaveType, "休暇の種類を選択してください。");
    }

    let start_date = validate_date(&input.start_date, LeaveField::StartDate, "開始日", &mut errors);
    let end_date = validate_date(&input.end_date, LeaveField::EndDate, "終了日", &mut errors);

    // Cross-field rule; the message belongs to the end-date field.
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.push(
                LeaveField::EndDate,
                "終了日は開始日以降の日付を指定してください。",
            );
        }
    }

    let reason = input.reason.trim();
    let reason_chars = reason.chars().count();
    if reason_chars < REASON_MIN_CHARS {
        errors.push(
            LeaveField::Reason,
            format!("理由は{}文字以上で入力してください。", REASON_MIN_CHARS),
        );
    } else if reason_chars > REASON_MAX_CHARS {
        errors.push(
            LeaveField::Reason,
            format!("理由は{}文字以内で入力してください。", REASON_MAX_CHARS),
        );
    }

    // A zero-byte selection counts as "no file".
    if let Some(document) = input.document.as_ref().filter(|doc| doc.size > 0) {
        if document.size > MAX_DOCUMENT_SIZE {
            errors.push(LeaveField::Document, "ファイルサイズは5MB以下にしてください。");
        } else if !ACCEPTED_DOCUMENT_TYPES.contains(&document.content_type.as_str()) {
            errors.push(
                LeaveField::Document,
                "PDF・JPEG・PNG のファイルのみ添付できます。",
            );
        }
    }

    match (leave_type, start_date, end_date, errors.is_empty()) {
        (Some(leave_type), Some(start_date), Some(end_date), true) => Ok(ValidatedLeaveForm {
            leave_type,
            start_date,
            end_date,
            half_day: input.half_day,
            reason: reason.to_string(),
        }),
        _ => Err(errors),
    }
}

fn validate_date(
    raw: &str,
    field: LeaveField,
    label: &str,
    errors: &mut FieldErrors<LeaveField>,
) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.push(field, format!("{}を入力してください。", label));
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.push(field, format!("{}は YYYY-MM-DD 形式で入力してください。", label));
    }
    parsed
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub half_day: RwSignal<bool>,
    pub reason: RwSignal<String>,
    pub document: RwSignal<Option<web_sys::File>>,
    pub errors: RwSignal<FieldErrors<LeaveField>>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            half_day: create_rw_signal(false),
            reason: create_rw_signal(String::new()),
            document: create_rw_signal(None),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl LeaveFormState {
    pub fn snapshot(&self) -> LeaveFormInput {
        LeaveFormInput {
            leave_type: self.leave_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            half_day: self.half_day.get_untracked(),
            reason: self.reason.get_untracked(),
            document: self.document.get_untracked().map(|file| document_meta(&file)),
        }
    }

    pub fn error_for(&self, field: LeaveField) -> Option<String> {
        self.errors.get().get(field).map(|message| message.to_string())
    }

    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.half_day.set(false);
        self.reason.set(String::new());
        self.document.set(None);
        self.errors.set(FieldErrors::default());
    }
}

pub fn document_meta(file: &web_sys::File) -> DocumentMeta {
    DocumentMeta {
        file_name: file.name(),
        content_type: file.type_(),
        size: file.size() as u64,
    }
}

/// Loads the picked file into memory for the multipart part. Only reachable
/// after metadata validation passed.
#[cfg(target_arch = "wasm32")]
pub async fn read_document(file: &web_sys::File) -> Result<DocumentUpload, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::network("ファイルの読み込みに失敗しました。"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(DocumentUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_document(_file: &web_sys::File) -> Result<DocumentUpload, ApiError> {
    Err(ApiError::network("ファイルの読み込みに失敗しました。"))
}

pub fn build_payload(form: ValidatedLeaveForm, document: Option<DocumentUpload>) -> CreateLeaveRequest {
    CreateLeaveRequest {
        leave_type: form.leave_type,
        start_date: form.start_date,
        end_date: form.end_date,
        half_day: form.half_day,
        reason: form.reason,
        document,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> LeaveFormInput {
        LeaveFormInput {
            leave_type: "ANNUAL".into(),
            start_date: "2026-02-10".into(),
            end_date: "2026-02-12".into(),
            half_day: false,
            reason: "帰省のため一週間ほど休暇を取得します。".into(),
            document: None,
        }
    }

    #[test]
    fn accepts_complete_input_without_document() {
        let validated = validate_leave_form(&valid_input()).unwrap();
        assert_eq!(validated.leave_type, LeaveType::Annual);
        assert_eq!(validated.reason, "帰省のため一週間ほど休暇を取得します。");
    }

    #[test]
    fn requires_leave_type_from_closed_set() {
        let mut input = valid_input();
        input.leave_type = String::new();
        let errors = validate_leave_form(&input).unwrap_err();
        assert!(errors.get(LeaveField::LeaveType).is_some());

        input.leave_type = "HOLIDAY".into();
        let errors = validate_leave_form(&input).unwrap_err();
        assert!(errors.get(LeaveField::LeaveType).is_some());
    }

    #[test]
    fn requires_both_dates() {
        let mut input = valid_input();
        input.start_date = String::new();
        input.end_date = String::new();
        let errors = validate_leave_form(&input).unwrap_err();
        assert!(errors.get(LeaveField::StartDate).is_some());
        assert!(errors.get(LeaveField::EndDate).is_some());
    }

    #[test]
    fn end_before_start_attaches_error_to_end_date() {
        let mut input = valid_input();
        input.start_date = "2026-02-12".into();
        input.end_date = "2026-02-10".into();
        let errors = validate_leave_form(&input).unwrap_err();
        assert!(errors.get(LeaveField::StartDate).is_none());
        assert_eq!(
            errors.get(LeaveField::EndDate),
            Some("終了日は開始日以降の日付を指定してください。")
        );
    }

    #[test]
    fn equal_start_and_end_dates_are_accepted() {
        let mut input = valid_input();
        input.start_date = "2026-02-10".into();
        input.end_date = "2026-02-10".into();
        assert!(validate_leave_form(&input).is_ok());
    }

    #[test]
    fn reason_length_boundaries() {
        let mut input = valid_input();

        input.reason = "あ".repeat(9);
        assert!(validate_leave_form(&input)
            .unwrap_err()
            .get(LeaveField::Reason)
            .is_some());

        input.reason = "あ".repeat(10);
        assert!(validate_leave_form(&input).is_ok());

        input.reason = "あ".repeat(500);
        assert!(validate_leave_form(&input).is_ok());

        input.reason = "あ".repeat(501);
        assert!(validate_leave_form(&input)
            .unwrap_err()
            .get(LeaveField::Reason)
            .is_some());
    }

    #[test]
    fn oversized_document_is_rejected() {
        let mut input = valid_input();
        input.document = Some(DocumentMeta {
            file_name: "certificate.pdf".into(),
            content_type: "application/pdf".into(),
            size: MAX_DOCUMENT_SIZE + 1,
        });
        let errors = validate_leave_form(&input).unwrap_err();
        assert!(errors.get(LeaveField::Document).is_some());
    }

    #[test]
    fn document_at_size_limit_is_accepted() {
        let mut input = valid_input();
        input.document = Some(DocumentMeta {
            file_name: "certificate.pdf".into(),
            content_type: "application/pdf".into(),
            size: MAX_DOCUMENT_SIZE,
        });
        assert!(validate_leave_form(&input).is_ok());
    }

    #[test]
    fn disallowed_content_type_is_rejected() {
        let mut input = valid_input();
        input.document = Some(DocumentMeta {
            file_name: "notes.txt".into(),
            content_type: "text/plain".into(),
            size: 1024,
        });
        let errors = validate_leave_form(&input).unwrap_err();
        assert_eq!(
            errors.get(LeaveField::Document),
            Some("PDF・JPEG・PNG のファイルのみ添付できます。")
        );
    }

    #[test]
    fn zero_byte_selection_counts_as_no_file() {
        let mut input = valid_input();
        input.document = Some(DocumentMeta {
            file_name: "empty.bin".into(),
            content_type: "application/octet-stream".into(),
            size: 0,
        });
        assert!(validate_leave_form(&input).is_ok());
    }
}
