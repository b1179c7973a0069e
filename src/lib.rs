//! ppscore - Predictive Power Score.
//!
//! Asymetrická, normalizovaná miera [0, 1] toho, ako dobre stĺpec x
//! predikuje stĺpec y, pre ľubovoľné kombinácie typov (číselné,
//! kategorické, časové, identifikátory). Zovšeobecňuje koreláciu o
//! nelineárne vzťahy a zmiešané dvojice feature/target.

mod error;
pub mod frame;
pub mod random;
pub mod scoring;

pub use error::PpsError;
pub use frame::{Cell, Column, ColumnType, CsvLoader, Dataframe};
pub use scoring::{ModelKind, PpsCalculator, PpsResult, ScoreOptions, TaskType};

/// Vypočíta PPS pre "x predikuje y"
pub fn score(
    df: &Dataframe,
    x: &str,
    y: &str,
    options: &ScoreOptions,
) -> Result<PpsResult, PpsError> {
    PpsCalculator::new().score(df, x, y, options)
}

/// PPS všetkých stĺpcov voči cieľovému stĺpcu, zoradené zostupne
pub fn predictors(
    df: &Dataframe,
    y: &str,
    options: &ScoreOptions,
) -> Result<Vec<PpsResult>, PpsError> {
    PpsCalculator::new().predictors(df, y, options, true)
}

/// PPS matica pre všetky dvojice stĺpcov, v poradí tabuľky
pub fn matrix(df: &Dataframe, options: &ScoreOptions) -> Result<Vec<PpsResult>, PpsError> {
    PpsCalculator::new().matrix(df, options, false)
}
