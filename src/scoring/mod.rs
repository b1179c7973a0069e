//! Jadro PPS výpočtu: klasifikácia prípadu, registry úloh, normalizácia
//! skóre a cross-validované vyhodnotenie modelu.

pub mod case_classifier;
pub mod metrics;
pub mod modelling;
pub mod predictor;
pub mod task_registry;
pub mod validators;

pub use predictor::{PpsCalculator, ScoreOptions};

use serde::Serialize;

/// Uzavretá enumerácia prípadov predikčnej úlohy.
/// Prípad je nemenný pre danú trojicu (x, y, dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Regression,
    Classification,
    PredictItself,
    TargetIsConstant,
    TargetIsId,
    FeatureIsId,
    TargetIsDatetime,
    TargetDataTypeNotSupported,
    EmptyDataframeAfterDroppingNa,
    UnknownError,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Regression => "regression",
            TaskType::Classification => "classification",
            TaskType::PredictItself => "predict_itself",
            TaskType::TargetIsConstant => "target_is_constant",
            TaskType::TargetIsId => "target_is_id",
            TaskType::FeatureIsId => "feature_is_id",
            TaskType::TargetIsDatetime => "target_is_datetime",
            TaskType::TargetDataTypeNotSupported => "target_data_type_not_supported",
            TaskType::EmptyDataframeAfterDroppingNa => "empty_dataframe_after_dropping_na",
            TaskType::UnknownError => "unknown_error",
        }
    }
}

/// Metrika cross-validácie. Regresia drží sklearn konvenciu:
/// fold skóre je záporná MAE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvalMetric {
    #[serde(rename = "f1_weighted")]
    F1Weighted,
    #[serde(rename = "neg_mean_absolute_error")]
    NegMeanAbsoluteError,
}

/// Trénovateľný model pre danú úlohu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelKind {
    DecisionTreeClassifier,
    DecisionTreeRegressor,
}

/// Normalizačný algoritmus. Existujú iba dva, preto tagged enum
/// namiesto uloženej funkcie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    MeanAbsoluteError,
    WeightedF1,
}

/// Popis úlohy pre daný prípad. Pre degenerované prípady platí fixná
/// trojica skóre; pre klasifikáciu a regresiu platí metric_key + model +
/// score_normalizer a trojica sa počíta.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTask {
    pub case: TaskType,
    pub is_valid_score: bool,
    pub model_score: f64,
    pub baseline_score: f64,
    pub ppscore: f64,
    pub metric_name: Option<&'static str>,
    pub metric_key: Option<EvalMetric>,
    pub model: Option<ModelKind>,
    pub score_normalizer: Option<Normalizer>,
}

/// Výsledok PPS výpočtu pre jednu dvojicu (x, y).
/// Vytvára sa raz a už sa nemení.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PpsResult {
    pub x: String,
    pub y: String,
    pub ppscore: f64,
    pub case: TaskType,
    pub is_valid_score: bool,
    pub metric: Option<String>,
    pub baseline_score: f64,
    pub model_score: f64,
    pub model: Option<ModelKind>,
}
