use chrono::NaiveDate;

pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn date_range_label(start: NaiveDate, end: NaiveDate, half_day: bool) -> String {
    let range = if start == end {
        date_label(start)
    } else {
        format!("{} 〜 {}", date_label(start), date_label(end))
    };
    if half_day {
        format!("{}（半日）", range)
    } else {
        range
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_range_collapses() {
        assert_eq!(
            date_range_label(date(2026, 1, 10), date(2026, 1, 10), false),
            "2026-01-10"
        );
    }

    #[test]
    fn multi_day_range_shows_both_dates() {
        assert_eq!(
            date_range_label(date(2026, 1, 10), date(2026, 1, 12), false),
            "2026-01-10 〜 2026-01-12"
        );
    }

    #[test]
    fn half_day_is_annotated() {
        assert_eq!(
            date_range_label(date(2026, 1, 10), date(2026, 1, 10), true),
            "2026-01-10（半日）"
        );
    }

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Taro Yamada"), "TY");
        assert_eq!(initials("single"), "S");
        assert_eq!(initials(""), "");
    }
}
