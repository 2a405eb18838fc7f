use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::stats::StatsDto,
};

pub async fn get_stats() -> Result<StatsDto, ApiError> {
    let request = get("/api/stats");
    let response = send_request(request).await?;
    parse_response(response).await
}
