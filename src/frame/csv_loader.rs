use csv::ReaderBuilder;

use super::{Cell, Column, ColumnType, Dataframe};
use crate::error::PpsError;

/// Načíta CSV text s hlavičkou do Dataframe.
/// Typ stĺpca sa odvodí z hodnôt: všetko číselné -> Numeric,
/// všetko true/false -> Boolean, inak Text. Prázdne polia sú null.
pub struct CsvLoader;

impl CsvLoader {
    pub fn from_text(csv_text: &str) -> Result<Dataframe, PpsError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| PpsError::Csv(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record.map_err(|e| PpsError::Csv(e.to_string()))?;
            for (i, field) in record.iter().enumerate() {
                if i < raw_columns.len() {
                    raw_columns[i].push(field.to_string());
                }
            }
        }

        let columns = headers
            .iter()
            .zip(raw_columns.iter())
            .map(|(name, values)| Self::infer_column(name, values))
            .collect();

        Dataframe::new(columns)
    }

    fn infer_column(name: &str, values: &[String]) -> Column {
        let non_empty: Vec<&String> = values.iter().filter(|v| !v.is_empty()).collect();

        let all_numeric =
            !non_empty.is_empty() && non_empty.iter().all(|v| v.parse::<f64>().is_ok());
        if all_numeric {
            let cells = values
                .iter()
                .map(|v| {
                    v.parse::<f64>()
                        .map(Cell::Number)
                        .unwrap_or(Cell::Null)
                })
                .collect();
            return Column::new(name, ColumnType::Numeric, cells);
        }

        let all_boolean = !non_empty.is_empty()
            && non_empty
                .iter()
                .all(|v| matches!(v.to_lowercase().as_str(), "true" | "false"));
        if all_boolean {
            let cells = values
                .iter()
                .map(|v| {
                    if v.is_empty() {
                        Cell::Null
                    } else {
                        Cell::Bool(v.to_lowercase() == "true")
                    }
                })
                .collect();
            return Column::new(name, ColumnType::Boolean, cells);
        }

        let cells = values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    Cell::Null
                } else {
                    Cell::Text(v.clone())
                }
            })
            .collect();
        Column::new(name, ColumnType::Text, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PpsError;

    #[test]
    fn infers_numeric_boolean_and_text() {
        let df = CsvLoader::from_text("a,b,c\n1,true,red\n2.5,false,blue\n")
            .unwrap();
        assert_eq!(df.column("a").unwrap().dtype(), ColumnType::Numeric);
        assert_eq!(df.column("b").unwrap().dtype(), ColumnType::Boolean);
        assert_eq!(df.column("c").unwrap().dtype(), ColumnType::Text);
        assert_eq!(df.n_rows(), 2);
    }

    #[test]
    fn malformed_csv_fails_with_a_csv_error() {
        // riadok s iným počtom polí ako hlavička
        let result = CsvLoader::from_text("a,b\n1,2,3\n");
        assert!(matches!(result, Err(PpsError::Csv(_))));
    }

    #[test]
    fn empty_fields_become_nulls() {
        let df = CsvLoader::from_text("a,b\n1,\n,x\n").unwrap();
        assert!(df.column("a").unwrap().cells()[1].is_null());
        assert!(df.column("b").unwrap().cells()[0].is_null());
        assert_eq!(df.drop_na().n_rows(), 0);
    }
}
