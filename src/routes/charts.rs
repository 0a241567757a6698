//! Chart-shaped payloads for the stream graph and the similarity violin plot.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::services::similarity;
use crate::services::stream::{self, StreamGraph};
use crate::AppState;

/// GET /api/stats/stream-graph — top-15 colleges stacked around zero.
pub async fn stream_graph(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StreamGraph>>, AppError> {
    let graph = stream::get_stream_graph(&state.db).await?;
    Ok(ApiResponse::success(graph))
}

/// GET /api/stats/similarity — violin densities and scatter points.
pub async fn similarity_plot(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.config.similarity_csv.clone();
    let records = state
        .similarity
        .get_or_load(move || similarity::load_records_async(path))
        .await?;

    let plot = similarity::build_violin(&records);
    Ok(ApiResponse::success(plot).into_response())
}
