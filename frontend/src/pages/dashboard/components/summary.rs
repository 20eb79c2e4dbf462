use crate::api::LeaveStatistics;
use leptos::*;

/// Fraction of the allowance already consumed, clamped to [0, 1].
pub fn used_ratio(stats: &LeaveStatistics) -> f64 {
    if stats.total_days <= 0.0 {
        return 0.0;
    }
    ((stats.total_days - stats.available_days) / stats.total_days).clamp(0.0, 1.0)
}

fn format_days(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[component]
fn StatCard(#[prop(into)] title: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <p class="text-sm font-medium text-fg-muted">{title}</p>
            <p class="mt-2 text-2xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn StatisticsSummary(stats: LeaveStatistics) -> impl IntoView {
    let ratio_percent = (used_ratio(&stats) * 100.0).round();
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard title="残り日数" value=format!("{} 日", format_days(stats.available_days)) />
                <StatCard title="取得済み" value=format!("{} 日", format_days(stats.used_days)) />
                <StatCard title="承認待ち" value=format!("{} 日", format_days(stats.pending_days)) />
                <StatCard title="年間付与" value=format!("{} 日", format_days(stats.total_days)) />
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <div class="mb-2 flex items-center justify-between">
                    <span class="text-sm font-medium text-fg">"休暇の消化状況"</span>
                    <span class="text-sm text-fg-muted">
                        {format!("{} / {} 日", format_days(stats.available_days), format_days(stats.total_days))}
                    </span>
                </div>
                <div class="h-2 w-full rounded-full bg-surface-muted">
                    <div
                        class="h-2 rounded-full bg-action-primary-bg"
                        style=format!("width: {}%", ratio_percent)
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: f64, available: f64) -> LeaveStatistics {
        LeaveStatistics {
            total_days: total,
            used_days: total - available,
            pending_days: 0.0,
            available_days: available,
        }
    }

    #[test]
    fn used_ratio_spans_zero_to_one() {
        assert_eq!(used_ratio(&stats(20.0, 20.0)), 0.0);
        assert_eq!(used_ratio(&stats(20.0, 10.0)), 0.5);
        assert_eq!(used_ratio(&stats(20.0, 0.0)), 1.0);
    }

    #[test]
    fn zero_allowance_does_not_divide_by_zero() {
        assert_eq!(used_ratio(&stats(0.0, 0.0)), 0.0);
    }

    #[test]
    fn whole_days_render_without_decimals() {
        assert_eq!(format_days(12.0), "12");
        assert_eq!(format_days(2.5), "2.5");
    }
}
