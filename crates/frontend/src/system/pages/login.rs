use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::system::auth::context::use_auth;
use contracts::system::auth::HOME_ROUTE;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match auth
                .login(username.get_untracked(), password.get_untracked())
                .await
            {
                Ok(()) => navigate(HOME_ROUTE, Default::default()),
                Err(e) => {
                    let message = if e.is_unauthorized() {
                        "Invalid username or password".to_string()
                    } else {
                        e.user_message()
                    };
                    error_message.set(Some(message));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Training Center"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <Input value=username placeholder="admin" attr:id="username" />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            attr:id="password"
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
