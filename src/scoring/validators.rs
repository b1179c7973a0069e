use crate::error::PpsError;
use crate::frame::Dataframe;

/// Overí, že meno označuje práve jeden existujúci stĺpec tabuľky
pub fn validate_column_in_df(column: &str, df: &Dataframe) -> Result<(), PpsError> {
    match df.name_count(column) {
        0 => Err(PpsError::ColumnNotFound(column.to_string())),
        1 => Ok(()),
        count => Err(PpsError::DuplicateColumn {
            column: column.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    #[test]
    fn accepts_a_unique_column() {
        let df = Dataframe::new(vec![Column::numeric("a", vec![Some(1.0)])]).unwrap();
        assert!(validate_column_in_df("a", &df).is_ok());
    }

    #[test]
    fn rejects_a_missing_column() {
        let df = Dataframe::new(vec![Column::numeric("a", vec![Some(1.0)])]).unwrap();
        assert!(matches!(
            validate_column_in_df("b", &df),
            Err(PpsError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn rejects_duplicate_column_names() {
        let df = Dataframe::new(vec![
            Column::numeric("a", vec![Some(1.0)]),
            Column::numeric("a", vec![Some(2.0)]),
        ])
        .unwrap();
        assert!(matches!(
            validate_column_in_df("a", &df),
            Err(PpsError::DuplicateColumn { count: 2, .. })
        ));
    }
}
