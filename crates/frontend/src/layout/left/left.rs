use leptos::prelude::*;

#[component]
pub fn Left(is_open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open.get()>
            {children()}
        </div>
    }
}
