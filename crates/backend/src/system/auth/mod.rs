pub mod jwt;
pub mod middleware;
pub mod password;

use anyhow::Result;
use contracts::system::auth::TokenClaims;

use crate::shared::config::AuthConfig;

#[derive(Debug, Clone)]
struct UserAccount {
    username: String,
    password_hash: String,
}

/// Console accounts from the config file plus the token secret.
#[derive(Debug)]
pub struct AuthService {
    secret: String,
    token_lifetime_hours: i64,
    users: Vec<UserAccount>,
}

impl AuthService {
    /// Hashes the configured passwords once at start-up.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let secret = match &config.jwt_secret {
            Some(secret) if !secret.is_empty() => secret.clone(),
            _ => {
                tracing::warn!("auth.jwt_secret not set, generated a secret for this run");
                jwt::generate_jwt_secret()
            }
        };

        let users = config
            .users
            .iter()
            .map(|u| {
                Ok(UserAccount {
                    username: u.username.clone(),
                    password_hash: password::hash_password(&u.password)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if users.is_empty() {
            tracing::warn!("No [[auth.users]] configured, nobody can log in");
        }

        Ok(Self {
            secret,
            token_lifetime_hours: config.token_lifetime_hours,
            users,
        })
    }

    /// Token for valid credentials, `None` otherwise.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<String>> {
        let Some(user) = self.users.iter().find(|u| u.username == username) else {
            return Ok(None);
        };
        if !password::verify_password(password, &user.password_hash)? {
            return Ok(None);
        }
        jwt::generate_access_token(&self.secret, &user.username, self.token_lifetime_hours).map(Some)
    }

    pub fn validate(&self, token: &str) -> Result<TokenClaims> {
        jwt::validate_token(&self.secret, token)
    }
}
