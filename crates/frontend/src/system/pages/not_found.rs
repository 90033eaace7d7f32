use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
