use crate::domain::{detail_page, form_page, list_page};
use crate::layout::Shell;
use crate::system::auth::guard::RouteGuard;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// `:entity` and `:id` of the current URL.
fn entity_params() -> impl Fn() -> (String, Option<i64>) + Copy + Send + Sync + 'static {
    let params = use_params_map();
    move || {
        params.with(|p| {
            (
                p.get("entity").unwrap_or_default(),
                p.get("id").and_then(|id| id.parse().ok()),
            )
        })
    }
}

fn or_not_found(page: Option<AnyView>) -> AnyView {
    page.unwrap_or_else(|| view! { <NotFound /> }.into_any())
}

#[component]
fn ConsoleLayout() -> impl IntoView {
    view! {
        <RouteGuard protected=true>
            <Shell>
                <Outlet />
            </Shell>
        </RouteGuard>
    }
}

#[component]
fn EntityListRoute() -> impl IntoView {
    let params = entity_params();
    move || {
        let (entity, _) = params();
        or_not_found(list_page(&entity))
    }
}

#[component]
fn EntityCreateRoute() -> impl IntoView {
    let params = entity_params();
    move || {
        let (entity, _) = params();
        or_not_found(form_page(&entity, None))
    }
}

#[component]
fn EntityEditRoute() -> impl IntoView {
    let params = entity_params();
    move || match params() {
        (entity, Some(id)) => or_not_found(form_page(&entity, Some(id))),
        _ => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn EntityDetailRoute() -> impl IntoView {
    let params = entity_params();
    move || match params() {
        (entity, Some(id)) => or_not_found(detail_page(&entity, id)),
        _ => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=path!("/login")
                    view=|| view! {
                        <RouteGuard protected=false>
                            <LoginPage />
                        </RouteGuard>
                    }
                />
                <ParentRoute path=path!("") view=ConsoleLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!(":entity") view=EntityListRoute />
                    <Route path=path!(":entity/new") view=EntityCreateRoute />
                    <Route path=path!(":entity/:id/edit") view=EntityEditRoute />
                    <Route path=path!(":entity/:id") view=EntityDetailRoute />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
