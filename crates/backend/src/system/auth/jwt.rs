use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// Generate an HS256 token for `username`
pub fn generate_access_token(secret: &str, username: &str, lifetime_hours: i64) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: username.to_string(),
        username: username.to_string(),
        exp,
        iat,
        jti: uuid::Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate JWT token and extract claims
pub fn validate_token(secret: &str, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
pub fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let secret = generate_jwt_secret();
        let token = generate_access_token(&secret, "admin", 1).unwrap();
        let claims = validate_token(&secret, &token).unwrap();
        assert_eq!(claims.username, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_access_token("one", "admin", 1).unwrap();
        assert!(validate_token("two", &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = generate_access_token("secret", "admin", -2).unwrap();
        assert!(validate_token("secret", &token).is_err());
    }
}
