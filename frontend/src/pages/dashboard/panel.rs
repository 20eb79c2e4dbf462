use crate::{
    api::ApiClient,
    components::layout::LoadingSpinner,
    pages::dashboard::{components::summary::StatisticsSummary, repository::DashboardRepository},
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let stats_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_statistics().await }
        },
    );
    let loading = stats_resource.loading();
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col justify-between gap-4 md:flex-row md:items-center">
                <div>
                    <h1 class="text-2xl font-bold text-fg">
                        {move || format!("ようこそ、{}さん", user_name())}
                    </h1>
                    <p class="text-fg-muted text-sm mt-1">"休暇の取得状況と申請をここで確認できます。"</p>
                </div>
                <a
                    href="/leave-requests/new"
                    class="inline-flex items-center justify-center px-4 py-2 rounded bg-action-primary-bg text-action-primary-text text-sm font-medium"
                >
                    "新規休暇申請"
                </a>
            </div>
            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                {move || match stats_resource.get() {
                    Some(Ok(stats)) => view! { <StatisticsSummary stats=stats /> }.into_view(),
                    Some(Err(err)) => view! {
                        <crate::components::layout::ErrorMessage message=err.message() />
                    }
                    .into_view(),
                    None => ().into_view(),
                }}
            </Show>
        </div>
    }
}
