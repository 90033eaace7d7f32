use contracts::system::auth::{route_access, RouteAccess};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders `children` when the route is allowed for the current session,
/// otherwise redirects (to the login page for protected routes, home for
/// the login page itself).
#[component]
pub fn RouteGuard(
    /// `true` for console pages, `false` for the login page.
    protected: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);

    move || match route_access(&auth.session(), protected) {
        RouteAccess::Granted => children.with_value(|c| c()).into_any(),
        RouteAccess::RedirectTo(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
