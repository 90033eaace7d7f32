pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Authenticated application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Navbar   |           Content            |
/// |  (Left)   |        (routed page)         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader left_open=left_open />

            <div class="app-body">
                <left::Left is_open=left_open>
                    <left::Navbar />
                </left::Left>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
