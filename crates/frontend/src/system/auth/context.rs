use contracts::shared::error::ApiError;
use contracts::system::auth::{restore, sign_in, sign_out, LoginRequest, Session};
use leptos::prelude::*;

use super::api;
use super::storage::LocalSessionStore;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::api_base;

/// Process-wide login state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
}

impl AuthContext {
    /// Restore the stored session and put the context in scope.
    pub fn provide() -> Self {
        let ctx = Self {
            session: RwSignal::new(restore(&LocalSessionStore)),
        };
        provide_context(ctx);
        ctx
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username.clone())
    }

    /// Client carrying the current token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(api_base(), self.session.with_untracked(|s| s.token.clone()))
    }

    pub async fn login(self, username: String, password: String) -> Result<(), ApiError> {
        let request = LoginRequest { username, password };
        if let Err(message) = request.validate() {
            return Err(ApiError::Status {
                status: 400,
                message: Some(message),
            });
        }
        let response = api::login(&request).await?;
        log::info!("Signed in as {}", response.username);
        self.session.set(sign_in(&LocalSessionStore, response));
        Ok(())
    }

    pub fn logout(&self) {
        self.session.set(sign_out(&LocalSessionStore));
        log::info!("Signed out");
    }

    /// Message for the page. A 401 ends the session, which sends the user
    /// back to the login page.
    pub fn handle_error(&self, error: &ApiError) -> String {
        if error.is_unauthorized() {
            log::warn!("Session rejected by the backend");
            self.logout();
        } else {
            log::error!("Request failed: {}", error);
        }
        error.user_message()
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided")
}
