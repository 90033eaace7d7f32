use contracts::system::auth::{Session, SessionStore};
use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const USERNAME_KEY: &str = "auth_username";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Session persisted in browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Session {
        Session {
            token: get_item(TOKEN_KEY).filter(|t| !t.is_empty()),
            username: get_item(USERNAME_KEY),
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = get_local_storage() else {
            log::warn!("Local storage unavailable, session not persisted");
            return;
        };
        if let Some(token) = &session.token {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        if let Some(username) = &session.username {
            let _ = storage.set_item(USERNAME_KEY, username);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
        }
    }
}
