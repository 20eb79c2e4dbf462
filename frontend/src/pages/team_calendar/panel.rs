use crate::pages::team_calendar::utils::{
    demo_holidays, demo_team_leaves, holiday_on, is_weekend, members_on_leave, month_grid,
    weekday_headers,
};
use chrono::Datelike;
use leptos::*;

#[component]
pub fn TeamCalendarPage() -> impl IntoView {
    let (year, set_year) = create_signal(2026i32);
    let (month, set_month) = create_signal(4u32);

    let prev_month = move |_| {
        if month.get_untracked() == 1 {
            set_month.set(12);
            set_year.update(|y| *y -= 1);
        } else {
            set_month.update(|m| *m -= 1);
        }
    };
    let next_month = move |_| {
        if month.get_untracked() == 12 {
            set_month.set(1);
            set_year.update(|y| *y += 1);
        } else {
            set_month.update(|m| *m += 1);
        }
    };

    let cells = move || month_grid(year.get(), month.get());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"チームカレンダー"</h1>
                <p class="text-fg-muted text-sm mt-1">"祝日とチームメンバーの休暇予定（デモデータ）を表示します。"</p>
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <button
                        class="px-3 py-1.5 rounded border border-border text-sm text-fg"
                        on:click=prev_month
                    >
                        "前の月"
                    </button>
                    <h3 class="text-lg font-medium text-fg">
                        {move || format!("{}年{}月", year.get(), month.get())}
                    </h3>
                    <button
                        class="px-3 py-1.5 rounded border border-border text-sm text-fg"
                        on:click=next_month
                    >
                        "次の月"
                    </button>
                </div>
                <div class="grid grid-cols-7 gap-1 text-center text-xs font-medium text-fg-muted">
                    {weekday_headers()
                        .into_iter()
                        .map(|label| view! { <div class="py-1">{label}</div> })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-7 gap-1">
                    {move || {
                        let holidays = demo_holidays();
                        let leaves = demo_team_leaves();
                        cells()
                            .into_iter()
                            .map(|cell| match cell {
                                None => view! { <div class="h-20"></div> }.into_view(),
                                Some(day) => {
                                    let holiday = holiday_on(&holidays, day);
                                    let members = members_on_leave(&leaves, day);
                                    let mut classes =
                                        String::from("h-20 rounded border border-border p-1 text-left text-xs");
                                    if holiday.is_some() {
                                        classes.push_str(" bg-status-error-bg");
                                    } else if !members.is_empty() {
                                        classes.push_str(" bg-status-success-bg");
                                    } else if is_weekend(day) {
                                        classes.push_str(" bg-surface-muted");
                                    }
                                    view! {
                                        <div class=classes>
                                            <div class="font-semibold text-fg">{day.day()}</div>
                                            {holiday.map(|name| view! {
                                                <div class="text-status-error-text">{name}</div>
                                            })}
                                            {members
                                                .into_iter()
                                                .map(|name| view! {
                                                    <div class="truncate text-status-success-text">{name}</div>
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                    .into_view()
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="flex gap-4 text-xs text-fg-muted">
                    <span class="inline-flex items-center gap-1">
                        <span class="h-3 w-3 rounded bg-status-error-bg border border-status-error-border"></span>
                        "祝日"
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <span class="h-3 w-3 rounded bg-status-success-bg border border-status-success-border"></span>
                        "休暇中のメンバー"
                    </span>
                </div>
            </div>
        </div>
    }
}
