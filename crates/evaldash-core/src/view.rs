//! Dashboard view-model: everything the page renders, built per request

use serde::Serialize;

use crate::error::Result;
use crate::metrics::{ChartData, Metric, MetricCard, ScoreTable};
use crate::model::ModelName;
use crate::preview::CsvPreview;
use crate::simulation::SimulationStatus;

/// Sidebar state carried by every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub model: ModelName,
    /// Metrics ticked in the multiselect. Echoed back to the sidebar only;
    /// cards and chart always show all four.
    pub metrics: Vec<Metric>,
}

impl Selection {
    pub fn new(model: ModelName) -> Self {
        Self {
            model,
            metrics: Vec::new(),
        }
    }

    /// Build from `model=<slug>` and repeated `metrics=<label>` pairs.
    ///
    /// Unknown metric labels are dropped; an unknown model is an error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = Selection::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "model" => selection.model = value.as_ref().parse()?,
                "metrics" => {
                    if let Some(metric) = Metric::from_label(value.as_ref()) {
                        selection.toggle_on(metric);
                    }
                }
                _ => {}
            }
        }
        Ok(selection)
    }

    /// Parse a URL-encoded query string or form body.
    pub fn from_urlencoded(input: &[u8]) -> Result<Self> {
        Self::from_pairs(url::form_urlencoded::parse(input))
    }

    pub fn is_metric_selected(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    fn toggle_on(&mut self, metric: Metric) {
        if !self.metrics.contains(&metric) {
            self.metrics.push(metric);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub models: Vec<ModelName>,
    pub cards: Vec<MetricCard>,
    pub chart: ChartData,
    pub preview: Option<CsvPreview>,
    /// Set when the request's sidebar fields were rejected and defaults used
    pub selection_error: Option<String>,
    /// Set when an upload was received but could not be parsed
    pub upload_error: Option<String>,
    pub simulation: SimulationStatus,
}

impl DashboardView {
    pub fn build(table: &ScoreTable, selection: Selection) -> Self {
        let row = table.get_scores(selection.model);
        Self {
            models: ModelName::all().to_vec(),
            cards: MetricCard::for_row(&row),
            chart: ChartData::from_row(selection.model, &row),
            selection,
            preview: None,
            selection_error: None,
            upload_error: None,
            simulation: SimulationStatus::Idle,
        }
    }

    pub fn with_preview(mut self, preview: CsvPreview) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn with_selection_error(mut self, message: impl Into<String>) -> Self {
        self.selection_error = Some(message.into());
        self
    }

    pub fn with_upload_error(mut self, message: impl Into<String>) -> Self {
        self.upload_error = Some(message.into());
        self
    }

    pub fn with_simulation(mut self, status: SimulationStatus) -> Self {
        self.simulation = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_selection_defaults_to_first_model() {
        let selection = Selection::from_urlencoded(b"").unwrap();
        assert_eq!(selection.model, ModelName::RandomForest);
        assert!(selection.metrics.is_empty());
    }

    #[test]
    fn test_selection_from_query() {
        let selection =
            Selection::from_urlencoded(b"model=svm&metrics=Recall&metrics=Accuracy&metrics=Recall")
                .unwrap();
        assert_eq!(selection.model, ModelName::Svm);
        assert_eq!(selection.metrics, vec![Metric::Recall, Metric::Accuracy]);
    }

    #[test]
    fn test_selection_decodes_form_encoding() {
        let selection =
            Selection::from_urlencoded(b"model=Logistic+Regression&metrics=F1-score&metrics=AUC")
                .unwrap();
        assert_eq!(selection.model, ModelName::LogisticRegression);
        assert_eq!(selection.metrics, vec![Metric::F1Score]);
    }

    #[test]
    fn test_selection_unknown_model() {
        let err = Selection::from_urlencoded(b"model=knn").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownModel(_)));
    }

    #[test]
    fn test_metric_selection_does_not_filter_cards() {
        let table = ScoreTable::builtin().unwrap();
        let selection = Selection {
            model: ModelName::RandomForest,
            metrics: vec![Metric::F1Score, Metric::Precision],
        };
        let view = DashboardView::build(&table, selection);

        let labels: Vec<_> = view.cards.iter().map(|c| c.metric).collect();
        assert_eq!(labels, Metric::all().to_vec());
        assert_eq!(view.cards[0].display, "91.00%");
        assert_eq!(view.chart.series.len(), 1);
        assert_eq!(view.chart.series[0].values, vec![0.91, 0.89, 0.87, 0.88]);
    }

    #[test]
    fn test_view_builders() {
        let table = ScoreTable::builtin().unwrap();
        let preview = CsvPreview::from_bytes("d.csv", b"a\n1\n").unwrap();
        let view = DashboardView::build(&table, Selection::new(ModelName::Svm))
            .with_preview(preview)
            .with_simulation(SimulationStatus::Completed { elapsed_ms: 2000 });

        assert!(view.preview.is_some());
        assert!(view.upload_error.is_none());
        assert!(view.selection_error.is_none());
        assert!(view.simulation.is_completed());
        assert_eq!(view.models.len(), 3);
    }
}
