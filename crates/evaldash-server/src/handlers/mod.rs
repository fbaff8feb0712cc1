pub mod api;
pub mod dashboard;
pub mod simulate;
pub mod upload;

pub async fn health() -> &'static str {
    "ok"
}
