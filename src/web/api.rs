use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::selection::{recommend as recommend_layout, SelectionError};

const FORM_HTML: &str = include_str!("form.html");

/// Body of `POST /`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub total_urinals: i64,
    #[serde(default)]
    pub occupied: Vec<i64>,
}

/// Successful reply to `POST /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub optimal: u8,
    pub total: u8,
    pub occupied: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A rejected layout, answered with `400 Bad Request`
#[derive(Debug)]
pub struct ApiError(pub SelectionError);

impl From<SelectionError> for ApiError {
    fn from(e: SelectionError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `GET /` serves the form
pub async fn index() -> Html<&'static str> {
    Html(FORM_HTML)
}

/// `POST /` computes a recommendation
pub async fn recommend(
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let layout = recommend_layout(request.total_urinals, &request.occupied).inspect_err(|e| {
        debug!(error = %e, total = request.total_urinals, "rejected request");
    })?;

    info!(
        total = layout.capacity.get(),
        occupied = layout.occupied.len(),
        optimal = layout.optimal,
        "recommendation served"
    );

    Ok(Json(RecommendResponse {
        optimal: layout.optimal,
        total: layout.capacity.get(),
        occupied: layout.occupied.to_vec(),
    }))
}
