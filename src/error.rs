use crate::scoring::TaskType;

/// Chyby PPS výpočtu.
///
/// Validačné chyby (zlý vstup volajúceho) sa nikdy nekonvertujú na
/// `unknown_error` výsledok - vracajú sa vždy priamo. Ostatné varianty sú
/// chyby scoring pipeline a orchestrátor ich pri `catch_errors = true`
/// premení na výsledok s prípadom `unknown_error`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PpsError {
    #[error("column '{0}' is not a column of the dataframe")]
    ColumnNotFound(String),

    #[error("the dataframe has {count} columns with the same name '{column}'")]
    DuplicateColumn { column: String, count: usize },

    #[error("column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("column '{0}' does not hold numeric values")]
    NotNumeric(String),

    #[error("the dataframe has no rows")]
    EmptyDataframe,

    #[error("cannot run {folds}-fold cross-validation on {rows} rows")]
    NotEnoughRows { folds: usize, rows: usize },

    #[error("baseline mean absolute error is zero, the PPS is undefined")]
    DegenerateBaseline,

    #[error("case {0:?} is missing from the task registry")]
    UnsupportedCase(TaskType),

    #[error("model training failed: {0}")]
    Model(String),

    #[error("CSV parsing failed: {0}")]
    Csv(String),
}

impl PpsError {
    /// True pre chyby spôsobené zlým vstupom volajúceho.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PpsError::ColumnNotFound(_)
                | PpsError::DuplicateColumn { .. }
                | PpsError::LengthMismatch { .. }
                | PpsError::NotNumeric(_)
        )
    }
}
