//! Application top bar: navigation toggle, title, signed-in user, logout.

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::auth::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader(left_open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let toggle_sidebar = move |_| left_open.update(|open| *open = !*open);

    let logout = move |_| {
        auth.logout();
        navigate(LOGIN_ROUTE, Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Training Center Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth.username().unwrap_or_else(|| "Guest".to_string())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
