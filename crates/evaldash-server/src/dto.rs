use evaldash_core::{ChartData, MetricCard, ModelName};
use serde::Serialize;

// === HTTP DTOs ===

#[derive(Debug, Serialize)]
pub struct ModelDto {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<ModelName> for ModelDto {
    fn from(model: ModelName) -> Self {
        Self {
            id: model.slug(),
            label: model.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub model: ModelDto,
    pub scores: Vec<MetricCard>,
    pub chart: ChartData,
}
