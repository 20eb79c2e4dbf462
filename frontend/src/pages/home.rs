use leptos::*;
use leptos_router::Redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path="/login"/> }
}
