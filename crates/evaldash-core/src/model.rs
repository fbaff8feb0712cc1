use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Models offered in the sidebar select box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelName {
    #[default]
    RandomForest,
    LogisticRegression,
    Svm,
}

impl ModelName {
    pub fn label(&self) -> &'static str {
        match self {
            ModelName::RandomForest => "Random Forest",
            ModelName::LogisticRegression => "Logistic Regression",
            ModelName::Svm => "SVM",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ModelName::RandomForest => "random_forest",
            ModelName::LogisticRegression => "logistic_regression",
            ModelName::Svm => "svm",
        }
    }

    pub fn all() -> &'static [ModelName] {
        &[
            ModelName::RandomForest,
            ModelName::LogisticRegression,
            ModelName::Svm,
        ]
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelName {
    type Err = DashboardError;

    /// Accepts the slug or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ModelName::all()
            .iter()
            .copied()
            .find(|m| m.slug().eq_ignore_ascii_case(needle) || m.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DashboardError::UnknownModel(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_labels() {
        assert_eq!(ModelName::RandomForest.label(), "Random Forest");
        assert_eq!(ModelName::LogisticRegression.label(), "Logistic Regression");
        assert_eq!(ModelName::Svm.label(), "SVM");
    }

    #[test]
    fn test_select_box_order() {
        assert_eq!(ModelName::all()[0], ModelName::default());
        assert_eq!(ModelName::all().len(), 3);
    }

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!("svm".parse::<ModelName>().unwrap(), ModelName::Svm);
        assert_eq!(
            "Logistic Regression".parse::<ModelName>().unwrap(),
            ModelName::LogisticRegression
        );
        assert_eq!(
            " RANDOM_FOREST ".parse::<ModelName>().unwrap(),
            ModelName::RandomForest
        );
    }

    #[test]
    fn test_parse_unknown_model() {
        let err = "xgboost".parse::<ModelName>().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownModel(name) if name == "xgboost"));
    }
}
