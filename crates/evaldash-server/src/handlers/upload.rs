use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use evaldash_core::{CsvPreview, DashboardView, Selection};

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Accepts the upload form: a `file` part plus the sidebar fields so the
/// page re-renders with the same selection.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            // Browsers send an empty, unnamed part when nothing was chosen
            if !file_name.is_empty() {
                file = Some(UploadedFile {
                    name: file_name,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await?;
        pairs.push((name, value));
    }

    let selection = Selection::from_pairs(pairs)?;
    let view = DashboardView::build(&state.table, selection);

    let Some(file) = file else {
        return Ok((StatusCode::OK, Html(render::page(&view))));
    };

    match CsvPreview::from_bytes(&file.name, &file.bytes) {
        Ok(preview) => {
            tracing::info!(
                "Previewing {} ({} bytes, {} rows)",
                preview.file_name,
                file.bytes.len(),
                preview.total_rows
            );
            Ok((StatusCode::OK, Html(render::page(&view.with_preview(preview)))))
        }
        Err(e) => {
            tracing::warn!("Failed to parse upload {}: {}", file.name, e);
            let view = view.with_upload_error(e.to_string());
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render::page(&view))))
        }
    }
}
