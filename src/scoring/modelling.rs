use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters,
};
use smartcore::tree::decision_tree_regressor::{
    DecisionTreeRegressor, DecisionTreeRegressorParameters,
};

use super::case_classifier::dtype_represents_categories;
use super::metrics::{mean_absolute_error, weighted_f1};
use super::{EvalMetric, ModelKind, ScoreTask};
use crate::error::PpsError;
use crate::frame::Dataframe;
use crate::random::SeededRng;

/// Priemerné cross-validované skóre modelu pre jednu dvojicu
/// feature -> target. Skóre drží natívnu konvenciu metriky:
/// regresné foldy vracajú zápornú MAE, klasifikačné vážené F1.
pub fn calculate_model_cv_score(
    df: &Dataframe,
    target: &str,
    feature: &str,
    task: &ScoreTask,
    cross_validation: usize,
    random_seed: u64,
) -> Result<f64, PpsError> {
    let n_rows = df.n_rows();
    if n_rows == 0 {
        return Err(PpsError::EmptyDataframe);
    }
    if cross_validation < 2 || cross_validation > n_rows {
        return Err(PpsError::NotEnoughRows {
            folds: cross_validation,
            rows: n_rows,
        });
    }

    df.column(feature)
        .ok_or_else(|| PpsError::ColumnNotFound(feature.to_string()))?;
    df.column(target)
        .ok_or_else(|| PpsError::ColumnNotFound(target.to_string()))?;
    let model = task.model.ok_or(PpsError::UnsupportedCase(task.case))?;
    let metric = task.metric_key.ok_or(PpsError::UnsupportedCase(task.case))?;

    // premiešanie oddelí vyhodnotenie od poradia riadkov na vstupe
    let mut rng = SeededRng::new(random_seed);
    let df = df.shuffle(&mut rng);

    let feature_rows = encode_feature(&df, feature)?;
    let folds = fold_ranges(n_rows, cross_validation);

    let mut scores = Vec::with_capacity(cross_validation);
    match (model, metric) {
        (ModelKind::DecisionTreeClassifier, EvalMetric::F1Weighted) => {
            let labels = df
                .column(target)
                .ok_or_else(|| PpsError::ColumnNotFound(target.to_string()))?
                .label_encode();
            for (start, end) in folds {
                scores.push(classification_fold_score(
                    &feature_rows,
                    &labels,
                    start,
                    end,
                )?);
            }
        }
        (ModelKind::DecisionTreeRegressor, EvalMetric::NegMeanAbsoluteError) => {
            let targets = df
                .column(target)
                .ok_or_else(|| PpsError::ColumnNotFound(target.to_string()))?
                .numeric_values()?;
            for (start, end) in folds {
                scores.push(regression_fold_score(&feature_rows, &targets, start, end)?);
            }
        }
        (model, metric) => {
            return Err(PpsError::Model(format!(
                "metric {:?} cannot score model {:?}",
                metric, model
            )))
        }
    }

    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Feature ako riadky číselnej matice: kategorický stĺpec sa one-hot
/// enkóduje podľa unikátnych hodnôt, číselný sa preusporiada na
/// jednostĺpcovú maticu.
fn encode_feature(df: &Dataframe, feature: &str) -> Result<Vec<Vec<f64>>, PpsError> {
    let column = df
        .column(feature)
        .ok_or_else(|| PpsError::ColumnNotFound(feature.to_string()))?;

    if dtype_represents_categories(column) {
        let codes = column.label_encode();
        // šírka podľa najvyššieho kódu: label_encode dáva null vlastný kód,
        // ktorý n_distinct nepočíta
        let width = codes.iter().max().map_or(1, |&code| code as usize + 1);
        Ok(codes
            .into_iter()
            .map(|code| {
                let mut row = vec![0.0; width];
                row[code as usize] = 1.0;
                row
            })
            .collect())
    } else {
        Ok(column
            .numeric_values()?
            .into_iter()
            .map(|v| vec![v])
            .collect())
    }
}

/// Súvislé foldy ako sklearn KFold: prvých n % k foldov je o riadok dlhších
fn fold_ranges(n_rows: usize, k: usize) -> Vec<(usize, usize)> {
    let base = n_rows / k;
    let remainder = n_rows % k;
    let mut ranges = Vec::with_capacity(k);
    let mut start = 0;
    for i in 0..k {
        let size = base + usize::from(i < remainder);
        ranges.push((start, start + size));
        start += size;
    }
    ranges
}

fn split_rows<T: Clone>(rows: &[T], start: usize, end: usize) -> (Vec<T>, Vec<T>) {
    let mut train = Vec::with_capacity(rows.len() - (end - start));
    train.extend_from_slice(&rows[..start]);
    train.extend_from_slice(&rows[end..]);
    let test = rows[start..end].to_vec();
    (train, test)
}

fn to_matrix(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>, PpsError> {
    DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| PpsError::Model(e.to_string()))
}

fn classification_fold_score(
    feature_rows: &[Vec<f64>],
    labels: &[u32],
    start: usize,
    end: usize,
) -> Result<f64, PpsError> {
    let (x_train, x_test) = split_rows(feature_rows, start, end);
    let (y_train, y_test) = split_rows(labels, start, end);

    let tree = DecisionTreeClassifier::fit(
        &to_matrix(&x_train)?,
        &y_train,
        DecisionTreeClassifierParameters::default(),
    )
    .map_err(|e| PpsError::Model(e.to_string()))?;
    let predictions = tree
        .predict(&to_matrix(&x_test)?)
        .map_err(|e| PpsError::Model(e.to_string()))?;

    Ok(weighted_f1(&y_test, &predictions))
}

fn regression_fold_score(
    feature_rows: &[Vec<f64>],
    targets: &[f64],
    start: usize,
    end: usize,
) -> Result<f64, PpsError> {
    let (x_train, x_test) = split_rows(feature_rows, start, end);
    let (y_train, y_test) = split_rows(targets, start, end);

    let tree = DecisionTreeRegressor::fit(
        &to_matrix(&x_train)?,
        &y_train,
        DecisionTreeRegressorParameters::default(),
    )
    .map_err(|e| PpsError::Model(e.to_string()))?;
    let predictions = tree
        .predict(&to_matrix(&x_test)?)
        .map_err(|e| PpsError::Model(e.to_string()))?;

    // sklearn konvencia: neg_mean_absolute_error
    Ok(-mean_absolute_error(&y_test, &predictions))
}
