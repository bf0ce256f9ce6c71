use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::castles::models::{Castle, CountryCode};
use crate::server::app::AppState;

/// JSON envelope wrapping every successful castles API response.
#[derive(Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Deserialize)]
pub struct ListCastlesParams {
    pub country: Option<String>,
}

/// Store failures surface as a bare 500; nothing in this API retries.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {0}")]
pub struct InternalError(#[from] anyhow::Error);

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "castle query failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage {
                message: "internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// `GET /castles/api?country=<code>`
///
/// Returns every castle of the requested country wrapped in a `data`
/// envelope. The `country` parameter is required.
pub async fn list_castles_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListCastlesParams>,
) -> Result<Response, InternalError> {
    let Some(country) = params.country else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                message: "missing country id".to_string(),
            }),
        )
            .into_response());
    };

    // Unknown codes match nothing in the store; short-circuit to an empty
    // listing instead of round-tripping.
    let Ok(code) = country.parse::<CountryCode>() else {
        tracing::debug!(%country, "listing requested for unknown country code");
        return Ok(Json(DataEnvelope {
            data: Vec::<Castle>::new(),
        })
        .into_response());
    };

    let castles = Castle::find_by_countries(&[code], &state.db_pool).await?;

    Ok(Json(DataEnvelope { data: castles }).into_response())
}

/// `GET /castles/api/:web_name`
///
/// Looks up a single castle by slug; absence is a 404, not a store error.
pub async fn get_castle_handler(
    Extension(state): Extension<AppState>,
    Path(web_name): Path<String>,
) -> Result<Response, InternalError> {
    match Castle::find_by_web_name(&web_name, &state.db_pool).await? {
        Some(castle) => Ok(Json(DataEnvelope { data: castle }).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorMessage {
                message: "castle not found".to_string(),
            }),
        )
            .into_response()),
    }
}
