use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{EvalMetric, ModelKind, Normalizer, ScoreTask, TaskType};
use crate::error::PpsError;

/// Nemenné registry úloh, postavené raz pri prvom prístupe.
/// Drží iba šesť prípadov s platným skóre; neplatné prípady sa
/// konštruujú na požiadanie so sentinel hodnotou volajúceho.
static TASK_REGISTRY: Lazy<HashMap<TaskType, ScoreTask>> = Lazy::new(|| {
    const TO_BE_CALCULATED: f64 = -1.0;

    let mut registry = HashMap::new();

    registry.insert(
        TaskType::Regression,
        ScoreTask {
            case: TaskType::Regression,
            is_valid_score: true,
            model_score: TO_BE_CALCULATED,
            baseline_score: TO_BE_CALCULATED,
            ppscore: TO_BE_CALCULATED,
            metric_name: Some("mean absolute error"),
            metric_key: Some(EvalMetric::NegMeanAbsoluteError),
            model: Some(ModelKind::DecisionTreeRegressor),
            score_normalizer: Some(Normalizer::MeanAbsoluteError),
        },
    );

    registry.insert(
        TaskType::Classification,
        ScoreTask {
            case: TaskType::Classification,
            is_valid_score: true,
            model_score: TO_BE_CALCULATED,
            baseline_score: TO_BE_CALCULATED,
            ppscore: TO_BE_CALCULATED,
            metric_name: Some("weighted F1"),
            metric_key: Some(EvalMetric::F1Weighted),
            model: Some(ModelKind::DecisionTreeClassifier),
            score_normalizer: Some(Normalizer::WeightedF1),
        },
    );

    registry.insert(
        TaskType::PredictItself,
        fixed_task(TaskType::PredictItself, 1.0, 0.0, 1.0),
    );
    registry.insert(
        TaskType::TargetIsConstant,
        fixed_task(TaskType::TargetIsConstant, 1.0, 1.0, 0.0),
    );
    registry.insert(
        TaskType::TargetIsId,
        fixed_task(TaskType::TargetIsId, 0.0, 0.0, 0.0),
    );
    registry.insert(
        TaskType::FeatureIsId,
        fixed_task(TaskType::FeatureIsId, 0.0, 0.0, 0.0),
    );

    registry
});

fn fixed_task(case: TaskType, model_score: f64, baseline_score: f64, ppscore: f64) -> ScoreTask {
    ScoreTask {
        case,
        is_valid_score: true,
        model_score,
        baseline_score,
        ppscore,
        metric_name: None,
        metric_key: None,
        model: None,
        score_normalizer: None,
    }
}

pub fn task_registry() -> &'static HashMap<TaskType, ScoreTask> {
    &TASK_REGISTRY
}

/// Úloha pre daný prípad. Neplatné prípady dostanú sentinel do všetkých
/// troch skóre; chýbajúci platný prípad v registry je programátorská chyba.
pub fn task_for_case(case: TaskType, invalid_score: f64) -> Result<ScoreTask, PpsError> {
    match case {
        TaskType::TargetIsDatetime
        | TaskType::TargetDataTypeNotSupported
        | TaskType::EmptyDataframeAfterDroppingNa
        | TaskType::UnknownError => Ok(ScoreTask {
            case,
            is_valid_score: false,
            model_score: invalid_score,
            baseline_score: invalid_score,
            ppscore: invalid_score,
            metric_name: None,
            metric_key: None,
            model: None,
            score_normalizer: None,
        }),
        _ => TASK_REGISTRY
            .get(&case)
            .copied()
            .ok_or(PpsError::UnsupportedCase(case)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_exactly_the_valid_cases() {
        let registry = task_registry();
        assert_eq!(registry.len(), 6);
        for case in [
            TaskType::Regression,
            TaskType::Classification,
            TaskType::PredictItself,
            TaskType::TargetIsConstant,
            TaskType::TargetIsId,
            TaskType::FeatureIsId,
        ] {
            assert!(registry.contains_key(&case), "missing {:?}", case);
            assert!(registry[&case].is_valid_score);
        }
    }

    #[test]
    fn regression_task_entry() {
        let task = task_for_case(TaskType::Regression, 0.0).unwrap();
        assert_eq!(task.metric_name, Some("mean absolute error"));
        assert_eq!(task.metric_key, Some(EvalMetric::NegMeanAbsoluteError));
        assert_eq!(task.model, Some(ModelKind::DecisionTreeRegressor));
        assert_eq!(task.score_normalizer, Some(Normalizer::MeanAbsoluteError));
    }

    #[test]
    fn classification_task_entry() {
        let task = task_for_case(TaskType::Classification, 0.0).unwrap();
        assert_eq!(task.metric_name, Some("weighted F1"));
        assert_eq!(task.metric_key, Some(EvalMetric::F1Weighted));
        assert_eq!(task.model, Some(ModelKind::DecisionTreeClassifier));
        assert_eq!(task.score_normalizer, Some(Normalizer::WeightedF1));
    }

    #[test]
    fn predict_itself_fixed_triple() {
        let task = task_for_case(TaskType::PredictItself, -7.0).unwrap();
        assert_eq!(task.model_score, 1.0);
        assert_eq!(task.baseline_score, 0.0);
        assert_eq!(task.ppscore, 1.0);
        assert!(task.metric_name.is_none());
        assert!(task.model.is_none());
        assert!(task.score_normalizer.is_none());
    }

    #[test]
    fn degenerate_fixed_triples() {
        let constant = task_for_case(TaskType::TargetIsConstant, 0.0).unwrap();
        assert_eq!(
            (constant.model_score, constant.baseline_score, constant.ppscore),
            (1.0, 1.0, 0.0)
        );
        for case in [TaskType::TargetIsId, TaskType::FeatureIsId] {
            let task = task_for_case(case, 0.0).unwrap();
            assert_eq!((task.model_score, task.baseline_score, task.ppscore), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn invalid_cases_use_the_caller_sentinel() {
        for case in [
            TaskType::TargetIsDatetime,
            TaskType::TargetDataTypeNotSupported,
            TaskType::EmptyDataframeAfterDroppingNa,
            TaskType::UnknownError,
        ] {
            let task = task_for_case(case, -1.0).unwrap();
            assert!(!task.is_valid_score);
            assert_eq!(task.model_score, -1.0);
            assert_eq!(task.baseline_score, -1.0);
            assert_eq!(task.ppscore, -1.0);
            assert!(task.metric_name.is_none());
            assert!(task.model.is_none());
        }
    }
}
