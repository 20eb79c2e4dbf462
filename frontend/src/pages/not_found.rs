use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-surface">
            <h1 class="text-4xl font-bold text-fg">"404"</h1>
            <p class="text-fg-muted">"ページが見つかりませんでした。"</p>
            <a href="/dashboard" class="text-action-primary-bg underline text-sm font-medium">
                "ダッシュボードへ戻る"
            </a>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_links_back_to_dashboard() {
        let html = render_to_string(|| view! { <NotFoundPage /> });
        assert!(html.contains("404"));
        assert!(html.contains("/dashboard"));
    }
}
