use chrono::NaiveDate;

/// Field-keyed validation outcome: one message per offending field, in the
/// order the rules ran. UI-independent so forms stay unit-testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Copy + PartialEq> {
    entries: Vec<(F, String)>,
}

impl<F: Copy + PartialEq> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: Copy + PartialEq> FieldErrors<F> {
    pub fn push(&mut self, field: F, message: impl Into<String>) {
        // First message per field wins.
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn optional_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        A,
        B,
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.push(Field::A, "first");
        errors.push(Field::A, "second");
        errors.push(Field::B, "other");
        assert_eq!(errors.get(Field::A), Some("first"));
        assert_eq!(errors.len(), 2);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn empty_errors_resolve_ok() {
        let errors: FieldErrors<Field> = FieldErrors::default();
        assert!(errors.get(Field::A).is_none());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn optional_trimmed_drops_blank_strings() {
        assert_eq!(optional_trimmed("  "), None);
        assert_eq!(optional_trimmed(" x "), Some("x".to_string()));
    }

    #[test]
    fn parse_date_accepts_iso_format_only() {
        assert!(parse_date("2026-02-10").is_some());
        assert!(parse_date("2026/02/10").is_none());
        assert!(parse_date("").is_none());
    }
}
