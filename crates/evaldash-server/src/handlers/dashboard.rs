use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Html,
};
use evaldash_core::{DashboardView, Selection};

use crate::render;
use crate::state::AppState;

/// Full page render; every interaction lands back here with the sidebar
/// state in the query string. A bad selection falls back to the default
/// page with an error banner.
pub async fn index(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> (StatusCode, Html<String>) {
    match Selection::from_urlencoded(query.unwrap_or_default().as_bytes()) {
        Ok(selection) => {
            tracing::debug!("Rendering dashboard for {}", selection.model);
            let view = DashboardView::build(&state.table, selection);
            (StatusCode::OK, Html(render::page(&view)))
        }
        Err(e) => {
            tracing::warn!("Rejected dashboard selection: {}", e);
            let view = DashboardView::build(&state.table, Selection::default())
                .with_selection_error(e.to_string());
            (StatusCode::BAD_REQUEST, Html(render::page(&view)))
        }
    }
}
