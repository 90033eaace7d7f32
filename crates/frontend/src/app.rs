use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session restored from local storage, shared by every page.
    AuthContext::provide();

    view! {
        <AppRoutes />
    }
}
