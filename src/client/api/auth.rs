use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::SuccessDto,
        auth::{AuthStatusDto, LoginDto},
    },
};

pub async fn login(password: String) -> Result<SuccessDto, ApiError> {
    let body = serialize_json(&LoginDto { password })?;
    let request = post("/api/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<SuccessDto, ApiError> {
    let request = post("/api/logout");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_auth_status() -> Result<AuthStatusDto, ApiError> {
    let request = get("/api/auth-status");
    let response = send_request(request).await?;
    parse_response(response).await
}
