use contracts::domain::RESOURCES;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::left::navbar::MENU_GROUPS;
use crate::system::auth::context::use_auth;

/// Landing page: one card per menu group linking to its lists.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">
                    {move || format!("Welcome, {}", auth.username().unwrap_or_else(|| "admin".to_string()))}
                </h1>
            </div>
            <div class="home-grid">
                {MENU_GROUPS
                    .iter()
                    .map(|(title, names)| {
                        view! {
                            <div class="home-card">
                                <h3>{*title}</h3>
                                <ul>
                                    {names
                                        .iter()
                                        .filter_map(|name| RESOURCES.iter().find(|r| r.name == *name))
                                        .map(|info| {
                                            view! {
                                                <li>
                                                    <A href=format!("/{}", info.route)>{info.list_name}</A>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
