use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use evaldash_core::{ChartData, DashboardError, MetricCard, ModelName};

use crate::dto::{ModelDto, ScoresResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_models() -> Json<Vec<ModelDto>> {
    Json(ModelName::all().iter().copied().map(ModelDto::from).collect())
}

pub async fn get_scores(
    State(state): State<Arc<AppState>>,
    Path(model): Path<String>,
) -> Result<Json<ScoresResponse>, AppError> {
    let model: ModelName = model.parse().map_err(|e: DashboardError| AppError::NotFound(e.to_string()))?;
    let row = state.table.get_scores(model);

    Ok(Json(ScoresResponse {
        model: model.into(),
        scores: MetricCard::for_row(&row),
        chart: ChartData::from_row(model, &row),
    }))
}
