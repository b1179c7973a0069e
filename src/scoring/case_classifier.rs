use super::TaskType;
use crate::error::PpsError;
use crate::frame::{Column, ColumnType, Dataframe};
use crate::random::SeededRng;

/// Určuje, či deklarovaný typ stĺpca reprezentuje kategórie.
/// Rozhoduje výhradne tag typu, hodnoty sa nečítajú.
pub fn dtype_represents_categories(column: &Column) -> bool {
    column.dtype().represents_categories()
}

/// True ak je stĺpec x identifikátor: kategorický a každá hodnota unikátna.
/// Nekategorické stĺpce nie sú identifikátory ani pri samých unikátoch.
pub fn feature_is_id(column: &Column) -> bool {
    if !dtype_represents_categories(column) {
        return false;
    }
    column.n_distinct() == column.len()
}

/// Ak má tabuľka viac ako `sample` riadkov, vyberie deterministickú vzorku
/// bez opakovania. `sample == 0` vzorkovanie vypína.
pub fn maybe_sample(df: Dataframe, sample: usize, random_seed: u64) -> Dataframe {
    if sample > 0 && df.n_rows() > sample {
        let mut rng = SeededRng::new(random_seed);
        df.sample(sample, &mut rng)
    } else {
        df
    }
}

/// Určí prípad úlohy pre dvojicu (x, y) a pripraví dáta pre ďalšie kroky.
/// Poradie kontrol je záväzné - platí prvá zhoda.
pub fn determine_case_and_prepare(
    df: &Dataframe,
    x: &str,
    y: &str,
    sample: usize,
    random_seed: u64,
) -> Result<(Dataframe, TaskType), PpsError> {
    if x == y {
        return Ok((df.clone(), TaskType::PredictItself));
    }

    let df = df.select(&[x, y])?.drop_na();

    if df.n_rows() == 0 {
        return Ok((df, TaskType::EmptyDataframeAfterDroppingNa));
    }

    let df = maybe_sample(df, sample, random_seed);

    let case = {
        let x_col = df
            .column(x)
            .ok_or_else(|| PpsError::ColumnNotFound(x.to_string()))?;
        let y_col = df
            .column(y)
            .ok_or_else(|| PpsError::ColumnNotFound(y.to_string()))?;

        if feature_is_id(x_col) {
            TaskType::FeatureIsId
        } else {
            let category_count = y_col.n_distinct();
            if category_count == 1 {
                TaskType::TargetIsConstant
            } else if dtype_represents_categories(y_col) && category_count == y_col.len() {
                TaskType::TargetIsId
            } else if dtype_represents_categories(y_col) {
                TaskType::Classification
            } else if y_col.dtype() == ColumnType::Numeric {
                TaskType::Regression
            } else if matches!(y_col.dtype(), ColumnType::Datetime | ColumnType::Duration) {
                TaskType::TargetIsDatetime
            } else {
                TaskType::TargetDataTypeNotSupported
            }
        }
    };

    Ok((df, case))
}
