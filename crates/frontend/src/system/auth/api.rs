use contracts::shared::error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};

use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::api_base;

/// POST /Account/Login
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    ApiClient::new(api_base(), None)
        .post_json(LOGIN_PATH, request)
        .await
}
