use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub struct Holiday {
    pub name: &'static str,
    pub date: NaiveDate,
}

pub struct TeamLeave {
    pub name: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static calendar date")
}

// Demo data; the calendar has no backing endpoint yet.
pub fn demo_holidays() -> Vec<Holiday> {
    vec![
        Holiday {
            name: "元日",
            date: date(2026, 1, 1),
        },
        Holiday {
            name: "建国記念の日",
            date: date(2026, 2, 11),
        },
        Holiday {
            name: "春分の日",
            date: date(2026, 3, 20),
        },
        Holiday {
            name: "昭和の日",
            date: date(2026, 4, 29),
        },
    ]
}

pub fn demo_team_leaves() -> Vec<TeamLeave> {
    vec![
        TeamLeave {
            name: "山田 太郎",
            start_date: date(2026, 4, 25),
            end_date: date(2026, 4, 28),
        },
        TeamLeave {
            name: "鈴木 花子",
            start_date: date(2026, 5, 1),
            end_date: date(2026, 5, 5),
        },
    ]
}

pub fn holiday_on(holidays: &[Holiday], day: NaiveDate) -> Option<&'static str> {
    holidays
        .iter()
        .find(|holiday| holiday.date == day)
        .map(|holiday| holiday.name)
}

pub fn members_on_leave(leaves: &[TeamLeave], day: NaiveDate) -> Vec<&'static str> {
    leaves
        .iter()
        .filter(|leave| leave.start_date <= day && day <= leave.end_date)
        .map(|leave| leave.name)
        .collect()
}

/// Calendar cells for one month: leading `None`s pad the first week so
/// Monday starts the grid.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first,
        None => return Vec::new(),
    };
    let mut cells: Vec<Option<NaiveDate>> =
        vec![None; first.weekday().num_days_from_monday() as usize];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        day += Duration::days(1);
    }
    cells
}

pub fn weekday_headers() -> [&'static str; 7] {
    ["月", "火", "水", "木", "金", "土", "日"]
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_lookup_matches_exact_date() {
        let holidays = demo_holidays();
        assert_eq!(holiday_on(&holidays, date(2026, 1, 1)), Some("元日"));
        assert_eq!(holiday_on(&holidays, date(2026, 1, 2)), None);
    }

    #[test]
    fn members_on_leave_includes_range_bounds() {
        let leaves = demo_team_leaves();
        assert_eq!(members_on_leave(&leaves, date(2026, 4, 25)), vec!["山田 太郎"]);
        assert_eq!(members_on_leave(&leaves, date(2026, 4, 28)), vec!["山田 太郎"]);
        assert!(members_on_leave(&leaves, date(2026, 4, 29)).is_empty());
    }

    #[test]
    fn month_grid_pads_to_monday_start() {
        // 2026-05-01 is a Friday: four leading pads.
        let grid = month_grid(2026, 5);
        assert_eq!(grid.iter().take_while(|cell| cell.is_none()).count(), 4);
        assert_eq!(grid.iter().flatten().count(), 31);
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2026, 13).is_empty());
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(date(2026, 5, 2)));
        assert!(!is_weekend(date(2026, 5, 4)));
    }
}
