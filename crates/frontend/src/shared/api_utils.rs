//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// `API_BASE_URL` set at compile time wins. Otherwise the URL is built
/// from the current window location, using port 3000 for the backend
/// server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        if !base.trim().is_empty() {
            return base.trim().trim_end_matches('/').to_string();
        }
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Join a base URL and an absolute API path with exactly one slash.
///
/// ```
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:3000/", "/Batch/GetBatches"), "http://localhost:3000/Batch/GetBatches");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/Visitor/GetVisitors"),
            "http://localhost:3000/Visitor/GetVisitors"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "Visitor/GetVisitor/4"),
            "http://localhost:3000/Visitor/GetVisitor/4"
        );
        assert_eq!(join_url("", "/Account/Login"), "/Account/Login");
    }
}
