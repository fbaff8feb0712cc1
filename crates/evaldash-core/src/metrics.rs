use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::model::ModelName;

/// Evaluation metrics, in the order cards and chart categories are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Accuracy,
    Precision,
    Recall,
    #[serde(rename = "F1-score")]
    F1Score,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Accuracy => "Accuracy",
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::F1Score => "F1-score",
        }
    }

    pub fn all() -> &'static [Metric; 4] {
        &[
            Metric::Accuracy,
            Metric::Precision,
            Metric::Recall,
            Metric::F1Score,
        ]
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        let needle = label.trim();
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four scores in [0, 1], positionally aligned with [`Metric::all`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow([f64; 4]);

impl ScoreRow {
    pub fn new(values: [f64; 4]) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(DashboardError::InvalidScore(*bad));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> [f64; 4] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::all().iter().copied().zip(self.0.iter().copied())
    }
}

/// Format a score in [0, 1] as a percentage with two decimals, e.g. `91.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Fixed score lookup, one row per model.
///
/// Built once and handed around by value or reference; nothing mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreTable {
    random_forest: ScoreRow,
    logistic_regression: ScoreRow,
    svm: ScoreRow,
}

impl ScoreTable {
    /// Build a table from one row per model; every score must be in [0, 1].
    pub fn new(
        random_forest: [f64; 4],
        logistic_regression: [f64; 4],
        svm: [f64; 4],
    ) -> Result<Self> {
        Ok(Self {
            random_forest: ScoreRow::new(random_forest)?,
            logistic_regression: ScoreRow::new(logistic_regression)?,
            svm: ScoreRow::new(svm)?,
        })
    }

    /// The dashboard's dummy scores.
    pub fn builtin() -> Result<Self> {
        Self::new(
            [0.91, 0.89, 0.87, 0.88],
            [0.85, 0.83, 0.81, 0.82],
            [0.88, 0.86, 0.84, 0.85],
        )
    }

    pub fn get_scores(&self, model: ModelName) -> ScoreRow {
        match model {
            ModelName::RandomForest => self.random_forest,
            ModelName::LogisticRegression => self.logistic_regression,
            ModelName::Svm => self.svm,
        }
    }
}

/// One card in the metrics row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub metric: Metric,
    pub value: f64,
    pub display: String,
}

impl MetricCard {
    /// Cards for every metric in fixed order.
    pub fn for_row(row: &ScoreRow) -> Vec<MetricCard> {
        row.iter()
            .map(|(metric, value)| MetricCard {
                metric,
                value,
                display: format_percent(value),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Bar chart with metrics on the category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Transposes a single model's row: one series, four categories.
    pub fn from_row(model: ModelName, row: &ScoreRow) -> Self {
        Self {
            categories: Metric::all().iter().map(|m| m.label().to_string()).collect(),
            series: vec![ChartSeries {
                name: model.label().to_string(),
                values: row.values().to_vec(),
            }],
        }
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scores() {
        let table = ScoreTable::builtin().unwrap();
        assert_eq!(
            table.get_scores(ModelName::RandomForest).values(),
            [0.91, 0.89, 0.87, 0.88]
        );
        assert_eq!(
            table.get_scores(ModelName::LogisticRegression).values(),
            [0.85, 0.83, 0.81, 0.82]
        );
        assert_eq!(table.get_scores(ModelName::Svm).values(), [0.88, 0.86, 0.84, 0.85]);
    }

    #[test]
    fn test_get_scores_is_bit_identical() {
        let table = ScoreTable::builtin().unwrap();
        for model in ModelName::all() {
            let a = table.get_scores(*model).values().map(f64::to_bits);
            let b = table.get_scores(*model).values().map(f64::to_bits);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_builtin_table_passes_validation() {
        assert!(ScoreTable::builtin().is_ok());
    }

    #[test]
    fn test_table_rejects_out_of_range_row() {
        let err = ScoreTable::new(
            [0.91, 0.89, 0.87, 0.88],
            [0.85, -0.1, 0.81, 0.82],
            [0.88, 0.86, 0.84, 0.85],
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidScore(v) if v == -0.1));
    }

    #[test]
    fn test_score_row_rejects_out_of_range() {
        assert!(matches!(
            ScoreRow::new([0.5, 1.2, 0.5, 0.5]),
            Err(DashboardError::InvalidScore(v)) if v == 1.2
        ));
        assert!(ScoreRow::new([0.5, 0.5, f64::NAN, 0.5]).is_err());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.91), "91.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
    }

    #[test]
    fn test_cards_follow_metric_order() {
        let row = ScoreTable::builtin().unwrap().get_scores(ModelName::Svm);
        let cards = MetricCard::for_row(&row);
        let labels: Vec<_> = cards.iter().map(|c| c.metric.label()).collect();
        assert_eq!(labels, ["Accuracy", "Precision", "Recall", "F1-score"]);
        assert_eq!(cards[0].display, "88.00%");
        assert_eq!(cards[3].display, "85.00%");
    }

    #[test]
    fn test_chart_transposes_single_model() {
        let row = ScoreTable::builtin().unwrap().get_scores(ModelName::LogisticRegression);
        let chart = ChartData::from_row(ModelName::LogisticRegression, &row);
        assert_eq!(chart.categories, ["Accuracy", "Precision", "Recall", "F1-score"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Logistic Regression");
        assert_eq!(chart.series[0].values, vec![0.85, 0.83, 0.81, 0.82]);
        assert_eq!(chart.max_value(), 0.85);
    }

    #[test]
    fn test_metric_from_label() {
        assert_eq!(Metric::from_label("f1-score"), Some(Metric::F1Score));
        assert_eq!(Metric::from_label("AUC"), None);
    }
}
