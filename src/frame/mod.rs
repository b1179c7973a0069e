//! Tabuľkové dáta pre PPS výpočet.
//! Stĺpec nesie deklarovaný typ (tag) oddelene od uložených hodnôt -
//! kategorickosť sa určuje výhradne podľa tagu, nikdy podľa hodnôt.

pub mod csv_loader;

pub use csv_loader::CsvLoader;

use std::collections::HashMap;

use crate::error::PpsError;
use crate::random::SeededRng;

/// Deklarovaný sémantický typ stĺpca
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Text,
    /// Kategoricky enkódované hodnoty (aj číselné kódy kategórií)
    Categorical,
    Numeric,
    Datetime,
    Duration,
    Unsupported,
}

impl ColumnType {
    /// True ak deklarovaný typ reprezentuje kategórie
    pub fn represents_categories(&self) -> bool {
        matches!(
            self,
            ColumnType::Boolean | ColumnType::Text | ColumnType::Categorical
        )
    }
}

/// Jedna hodnota v stĺpci
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Časová pečiatka (epoch sekundy)
    Timestamp(i64),
    /// Trvanie (sekundy)
    Span(i64),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    fn key(&self) -> CellKey {
        match self {
            Cell::Null => CellKey::Null,
            Cell::Bool(b) => CellKey::Bool(*b),
            Cell::Number(v) => CellKey::Number(ordered_bits(*v)),
            Cell::Text(s) => CellKey::Text(s.clone()),
            Cell::Timestamp(t) => CellKey::Timestamp(*t),
            Cell::Span(s) => CellKey::Span(*s),
        }
    }
}

/// Kľúč bunky pre počítanie unikátov a label encoding.
/// f64 sa kľúčuje cez bity, s transformáciou aby poradie bitov
/// zodpovedalo poradiu hodnôt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum CellKey {
    Null,
    Bool(bool),
    Number(u64),
    Text(String),
    Timestamp(i64),
    Span(i64),
}

fn ordered_bits(v: f64) -> u64 {
    let bits = v.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits ^ (1 << 63)
    }
}

/// Pomenovaný stĺpec s deklarovaným typom
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: &str, dtype: ColumnType, cells: Vec<Cell>) -> Self {
        Column {
            name: name.to_string(),
            dtype,
            cells,
        }
    }

    pub fn numeric(name: &str, values: Vec<Option<f64>>) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(Cell::Number).unwrap_or(Cell::Null))
            .collect();
        Column::new(name, ColumnType::Numeric, cells)
    }

    pub fn text(name: &str, values: Vec<Option<&str>>) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(|s| Cell::Text(s.to_string())).unwrap_or(Cell::Null))
            .collect();
        Column::new(name, ColumnType::Text, cells)
    }

    pub fn boolean(name: &str, values: Vec<Option<bool>>) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(Cell::Bool).unwrap_or(Cell::Null))
            .collect();
        Column::new(name, ColumnType::Boolean, cells)
    }

    pub fn datetime(name: &str, values: Vec<Option<i64>>) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(Cell::Timestamp).unwrap_or(Cell::Null))
            .collect();
        Column::new(name, ColumnType::Datetime, cells)
    }

    pub fn duration(name: &str, values: Vec<Option<i64>>) -> Self {
        let cells = values
            .into_iter()
            .map(|v| v.map(Cell::Span).unwrap_or(Cell::Null))
            .collect();
        Column::new(name, ColumnType::Duration, cells)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Počet unikátnych hodnôt (null sa nepočíta, ako pandas value_counts)
    pub fn n_distinct(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        for cell in &self.cells {
            if !cell.is_null() {
                seen.insert(cell.key());
            }
        }
        seen.len()
    }

    /// Hodnoty ako f64. Bool sa koercuje na 0/1, časové typy na sekundy.
    pub fn numeric_values(&self) -> Result<Vec<f64>, PpsError> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Number(v) => Ok(*v),
                Cell::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
                Cell::Timestamp(t) => Ok(*t as f64),
                Cell::Span(s) => Ok(*s as f64),
                Cell::Text(_) | Cell::Null => Err(PpsError::NotNumeric(self.name.clone())),
            })
            .collect()
    }

    /// Enkóduje hodnoty na celé čísla 0, 1, 2, ... podľa zoradených
    /// unikátnych hodnôt (sklearn LabelEncoder sémantika)
    pub fn label_encode(&self) -> Vec<u32> {
        let mut keys: Vec<CellKey> = {
            let mut seen = std::collections::HashSet::new();
            self.cells
                .iter()
                .map(|c| c.key())
                .filter(|k| seen.insert(k.clone()))
                .collect()
        };
        keys.sort();

        let mapping: HashMap<CellKey, u32> = keys
            .into_iter()
            .enumerate()
            .map(|(i, k)| (k, i as u32))
            .collect();

        self.cells.iter().map(|c| mapping[&c.key()]).collect()
    }

    /// Medián číselných hodnôt
    pub fn median(&self) -> Result<f64, PpsError> {
        let mut values = self.numeric_values()?;
        if values.is_empty() {
            return Err(PpsError::EmptyDataframe);
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = values.len();
        if n % 2 == 0 {
            Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
        } else {
            Ok(values[n / 2])
        }
    }

    fn take(&self, indices: &[usize]) -> Column {
        Column {
            name: self.name.clone(),
            dtype: self.dtype,
            cells: indices.iter().map(|&i| self.cells[i].clone()).collect(),
        }
    }
}

/// Tabuľka pomenovaných stĺpcov rovnakej dĺžky
#[derive(Debug, Clone)]
pub struct Dataframe {
    columns: Vec<Column>,
}

impl Dataframe {
    pub fn new(columns: Vec<Column>) -> Result<Self, PpsError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns {
                if col.len() != expected {
                    return Err(PpsError::LengthMismatch {
                        column: col.name().to_string(),
                        expected,
                        got: col.len(),
                    });
                }
            }
        }
        Ok(Dataframe { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Prvý stĺpec daného mena
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Počet stĺpcov s daným menom (na detekciu duplikátov)
    pub fn name_count(&self, name: &str) -> usize {
        self.columns.iter().filter(|c| c.name() == name).count()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Nová tabuľka obmedzená na vybrané stĺpce (v poradí výberu)
    pub fn select(&self, names: &[&str]) -> Result<Dataframe, PpsError> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let col = self
                .column(name)
                .ok_or_else(|| PpsError::ColumnNotFound(name.to_string()))?;
            selected.push(col.clone());
        }
        Ok(Dataframe { columns: selected })
    }

    /// Odstráni riadky, ktoré majú null v ktoromkoľvek stĺpci
    pub fn drop_na(&self) -> Dataframe {
        let keep: Vec<usize> = (0..self.n_rows())
            .filter(|&i| self.columns.iter().all(|c| !c.cells()[i].is_null()))
            .collect();
        self.take_rows(&keep)
    }

    pub fn take_rows(&self, indices: &[usize]) -> Dataframe {
        Dataframe {
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
        }
    }

    /// Deterministická vzorka n riadkov bez opakovania
    pub fn sample(&self, n: usize, rng: &mut SeededRng) -> Dataframe {
        let indices = rng.sample_indices(self.n_rows(), n);
        self.take_rows(&indices)
    }

    /// Deterministické premiešanie všetkých riadkov
    pub fn shuffle(&self, rng: &mut SeededRng) -> Dataframe {
        let indices = rng.permutation(self.n_rows());
        self.take_rows(&indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Dataframe {
        Dataframe::new(vec![
            Column::numeric("a", vec![Some(1.0), None, Some(3.0), Some(4.0)]),
            Column::text("b", vec![Some("x"), Some("y"), None, Some("x")]),
        ])
        .unwrap()
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let result = Dataframe::new(vec![
            Column::numeric("a", vec![Some(1.0)]),
            Column::numeric("b", vec![Some(1.0), Some(2.0)]),
        ]);
        assert!(matches!(result, Err(PpsError::LengthMismatch { .. })));
    }

    #[test]
    fn drop_na_removes_rows_with_any_null() {
        let clean = frame().drop_na();
        assert_eq!(clean.n_rows(), 2);
        assert_eq!(clean.column("a").unwrap().cells()[0], Cell::Number(1.0));
        assert_eq!(clean.column("a").unwrap().cells()[1], Cell::Number(4.0));
    }

    #[test]
    fn n_distinct_ignores_nulls() {
        let df = frame();
        assert_eq!(df.column("a").unwrap().n_distinct(), 3);
        assert_eq!(df.column("b").unwrap().n_distinct(), 2);
    }

    #[test]
    fn median_even_and_odd() {
        let odd = Column::numeric("m", vec![Some(3.0), Some(1.0), Some(2.0)]);
        assert_eq!(odd.median().unwrap(), 2.0);
        let even = Column::numeric("m", vec![Some(4.0), Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(even.median().unwrap(), 2.5);
    }

    #[test]
    fn label_encode_is_sorted_and_stable() {
        let col = Column::text("c", vec![Some("b"), Some("a"), Some("b"), Some("c")]);
        assert_eq!(col.label_encode(), vec![1, 0, 1, 2]);
    }

    #[test]
    fn numeric_values_coerces_bool_and_time() {
        let col = Column::boolean("flag", vec![Some(true), Some(false)]);
        assert_eq!(col.numeric_values().unwrap(), vec![1.0, 0.0]);
        let ts = Column::datetime("t", vec![Some(10), Some(20)]);
        assert_eq!(ts.numeric_values().unwrap(), vec![10.0, 20.0]);
        let text = Column::text("s", vec![Some("x")]);
        assert!(matches!(
            text.numeric_values(),
            Err(PpsError::NotNumeric(_))
        ));
    }

    #[test]
    fn sample_is_deterministic_for_a_seed() {
        let df = Dataframe::new(vec![Column::numeric(
            "a",
            (0..100).map(|i| Some(i as f64)).collect(),
        )])
        .unwrap();

        let first = df.sample(10, &mut SeededRng::new(123));
        let second = df.sample(10, &mut SeededRng::new(123));
        assert_eq!(
            first.column("a").unwrap().cells(),
            second.column("a").unwrap().cells()
        );
        assert_eq!(first.n_rows(), 10);
    }

    #[test]
    fn select_keeps_requested_columns_only() {
        let df = frame();
        let sub = df.select(&["b"]).unwrap();
        assert_eq!(sub.n_cols(), 1);
        assert!(df.select(&["missing"]).is_err());
    }
}
