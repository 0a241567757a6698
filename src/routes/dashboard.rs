//! Dashboard routes: one fixed aggregation per widget.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::services::degree::{self, DegreeBreakdown};
use crate::services::ranking::{self, RankedThesis};
use crate::services::records::{self, RecordsPanel};
use crate::services::references::{self, ReferenceStats};
use crate::services::stream::{self, YearlyCount};
use crate::services::summary::{self, SummaryCounts};
use crate::AppState;

/// GET /api/stats/midup — headline counts (flat object, no envelope).
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryCounts>, AppError> {
    let counts = summary::get_counts(&state.db).await?;
    Ok(Json(counts))
}

/// GET /api/stats/rightup — eight most-viewed theses.
pub async fn top_viewed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RankedThesis>>>, AppError> {
    let ranked = ranking::get_top_viewed(&state.db).await?;
    Ok(ApiResponse::success(ranked))
}

/// GET /api/stats/rightdown — master/doctoral counts for 2022-2024.
pub async fn degree_breakdown(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DegreeBreakdown>>, AppError> {
    let breakdown = degree::get_breakdown(&state.db).await?;
    Ok(ApiResponse::success(breakdown))
}

/// GET /api/stats/leftdown — records panel.
pub async fn records_panel(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RecordsPanel>>, AppError> {
    let panel = records::get_panel(&state.db).await?;
    Ok(ApiResponse::success(panel))
}

/// GET /api/stats/middown — reference statistics (raw array, no envelope).
pub async fn reference_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReferenceStats>>, AppError> {
    let rows = references::get_reference_stats(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/stats/stream-data — yearly paper counts per college.
pub async fn stream_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<YearlyCount>>>, AppError> {
    let rows = stream::get_yearly_counts(&state.db).await?;
    Ok(ApiResponse::success(rows))
}
