use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::profile::repository::ProfileRepository,
    state::auth::use_auth,
    utils::format::initials,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProfileRepository::new_with_client(Rc::new(api));

    let stats_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_statistics().await }
        },
    );
    let loading = stats_resource.loading();

    let user = create_memo(move |_| auth.get().user);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"プロフィール"</h1>
                <p class="text-fg-muted text-sm mt-1">"アカウント情報と休暇の取得状況を確認できます。"</p>
            </div>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                    <h3 class="text-lg font-medium text-fg">"基本情報"</h3>
                    {move || user.get().map(|user| view! {
                        <div class="space-y-4">
                            <div class="flex items-center gap-4">
                                <span class="inline-flex h-16 w-16 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-lg font-bold">
                                    {initials(&user.name)}
                                </span>
                                <div>
                                    <h4 class="text-xl font-medium text-fg">{user.name.clone()}</h4>
                                    <p class="text-sm text-fg-muted">{user.role.label()}</p>
                                    {user.department.clone().map(|department| view! {
                                        <p class="text-sm text-fg-muted">{department}</p>
                                    })}
                                </div>
                            </div>
                            <div>
                                <p class="text-sm text-fg-muted">"メールアドレス"</p>
                                <p class="font-medium text-fg">{user.email.clone()}</p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <h3 class="text-lg font-medium text-fg">"休暇の取得状況"</h3>
                    <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                        {move || match stats_resource.get() {
                            Some(Ok(stats)) => view! {
                                <dl class="space-y-3 text-sm">
                                    <div class="flex justify-between">
                                        <dt class="text-fg-muted">"年間付与"</dt>
                                        <dd class="font-medium text-fg">{format!("{} 日", stats.total_days)}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-fg-muted">"取得済み"</dt>
                                        <dd class="font-medium text-fg">{format!("{} 日", stats.used_days)}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-fg-muted">"承認待ち"</dt>
                                        <dd class="font-medium text-fg">{format!("{} 日", stats.pending_days)}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-fg-muted">"残り日数"</dt>
                                        <dd class="font-medium text-fg">{format!("{} 日", stats.available_days)}</dd>
                                    </div>
                                </dl>
                            }
                            .into_view(),
                            Some(Err(err)) => view! { <ErrorMessage message=err.message() /> }.into_view(),
                            None => ().into_view(),
                        }}
                    </Show>
                </div>
            </div>
        </div>
    }
}
