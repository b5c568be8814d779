use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, search::SearchResultsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::search::SearchService,
        state::AppState,
    },
};

pub static SEARCH_TAG: &str = "search";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search word
    #[serde(default)]
    pub q: String,
}

/// Search customers, locations and products by a word of 3 to 64 characters.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching customers, locations and products", body = SearchResultsDto),
        (status = 400, description = "Search word too short or too long", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = SearchService::new(&state.db).search(&params.q).await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
