use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Html};
use evaldash_core::{run_simulation, DashboardView, Selection};

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

pub async fn simulate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let selection = Selection::from_urlencoded(&body)?;
    let status = run_simulation().await;

    let view = DashboardView::build(&state.table, selection).with_simulation(status);
    Ok(Html(render::page(&view)))
}
