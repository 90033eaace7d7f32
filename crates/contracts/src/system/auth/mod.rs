//! Login contract and the client-side session lifecycle.

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/Account/Login";
pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields must be filled in before the request is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Username and password are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
    pub jti: String,
}

/// Logged-in state. Authenticated exactly when a token is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: Some(response.token),
            username: Some(response.username),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persistent storage of the session (browser local storage in the app).
pub trait SessionStore {
    fn load(&self) -> Session;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Session restored on start-up.
pub fn restore(store: &impl SessionStore) -> Session {
    let session = store.load();
    if session.is_authenticated() {
        session
    } else {
        Session::anonymous()
    }
}

pub fn sign_in(store: &impl SessionStore, response: LoginResponse) -> Session {
    let session = Session::from_login(response);
    store.save(&session);
    session
}

pub fn sign_out(store: &impl SessionStore) -> Session {
    store.clear();
    Session::anonymous()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    RedirectTo(&'static str),
}

/// Protected pages need a session; the login page is skipped once there is one.
pub fn route_access(session: &Session, protected: bool) -> RouteAccess {
    match (protected, session.is_authenticated()) {
        (true, false) => RouteAccess::RedirectTo(LOGIN_ROUTE),
        (false, true) => RouteAccess::RedirectTo(HOME_ROUTE),
        _ => RouteAccess::Granted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Session>);

    impl SessionStore for MemoryStore {
        fn load(&self) -> Session {
            self.0.borrow().clone()
        }
        fn save(&self, session: &Session) {
            *self.0.borrow_mut() = session.clone();
        }
        fn clear(&self) {
            *self.0.borrow_mut() = Session::default();
        }
    }

    fn login() -> LoginResponse {
        LoginResponse {
            token: "abc".into(),
            username: "admin".into(),
        }
    }

    #[test]
    fn test_sign_in_persists_token() {
        let store = MemoryStore::default();
        let session = sign_in(&store, login());
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(restore(&store), session);
    }

    #[test]
    fn test_sign_out_clears_storage() {
        let store = MemoryStore::default();
        sign_in(&store, login());
        let session = sign_out(&store);
        assert!(!session.is_authenticated());
        assert!(!restore(&store).is_authenticated());
    }

    #[test]
    fn test_username_without_token_is_anonymous() {
        let store = MemoryStore::default();
        store.save(&Session {
            token: None,
            username: Some("admin".into()),
        });
        assert_eq!(restore(&store), Session::anonymous());
    }

    #[test]
    fn test_route_access() {
        let anonymous = Session::anonymous();
        let signed_in = Session::from_login(login());
        assert_eq!(route_access(&anonymous, true), RouteAccess::RedirectTo(LOGIN_ROUTE));
        assert_eq!(route_access(&signed_in, true), RouteAccess::Granted);
        assert_eq!(route_access(&signed_in, false), RouteAccess::RedirectTo(HOME_ROUTE));
        assert_eq!(route_access(&anonymous, false), RouteAccess::Granted);
    }

    #[test]
    fn test_login_request_validation() {
        let empty = LoginRequest::default();
        assert!(empty.validate().is_err());
        let ok = LoginRequest {
            username: "admin".into(),
            password: "admin123".into(),
        };
        assert!(ok.validate().is_ok());
    }
}
