use std::time::{SystemTime, UNIX_EPOCH};

use super::case_classifier::determine_case_and_prepare;
use super::metrics::{f1_normalizer, mae_normalizer};
use super::modelling::calculate_model_cv_score;
use super::task_registry::task_for_case;
use super::validators::validate_column_in_df;
use super::{Normalizer, PpsResult, TaskType};
use crate::error::PpsError;
use crate::frame::Dataframe;

/// Parametre PPS výpočtu s predvolenými hodnotami pôvodnej implementácie
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    /// Maximálny počet riadkov; väčšie tabuľky sa deterministicky vzorkujú.
    /// 0 vzorkovanie vypína.
    pub sample: usize,
    /// Počet foldov cross-validácie
    pub cross_validation: usize,
    /// None = seed sa vyžrebuje, výpočet prestáva byť reprodukovateľný
    pub random_seed: Option<u64>,
    /// Sentinel dosadený do všetkých skóre neplatných prípadov
    pub invalid_score: f64,
    /// Premení chyby pipeline na výsledok s prípadom unknown_error.
    /// Validačné chyby sa vracajú vždy.
    pub catch_errors: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        ScoreOptions {
            sample: 5_000,
            cross_validation: 4,
            random_seed: Some(123),
            invalid_score: 0.0,
            catch_errors: true,
        }
    }
}

/// Facade pre PPS výpočty nad jednou tabuľkou:
/// score pre dvojicu stĺpcov, predictors pre cieľ, matrix pre všetky dvojice.
pub struct PpsCalculator;

impl PpsCalculator {
    pub fn new() -> Self {
        PpsCalculator
    }

    /// Vypočíta PPS pre "x predikuje y"
    pub fn score(
        &self,
        df: &Dataframe,
        x: &str,
        y: &str,
        options: &ScoreOptions,
    ) -> Result<PpsResult, PpsError> {
        validate_column_in_df(x, df)?;
        validate_column_in_df(y, df)?;

        let random_seed = options.random_seed.unwrap_or_else(draw_seed);

        match self.calculate_score(df, x, y, options, random_seed) {
            Ok(result) => Ok(result),
            Err(error) if options.catch_errors && !error.is_validation() => {
                let task = task_for_case(TaskType::UnknownError, options.invalid_score)?;
                Ok(PpsResult {
                    x: x.to_string(),
                    y: y.to_string(),
                    ppscore: task.ppscore,
                    case: TaskType::UnknownError,
                    is_valid_score: task.is_valid_score,
                    metric: task.metric_name.map(String::from),
                    baseline_score: task.baseline_score,
                    model_score: task.model_score,
                    model: task.model,
                })
            }
            Err(error) => Err(error),
        }
    }

    fn calculate_score(
        &self,
        df: &Dataframe,
        x: &str,
        y: &str,
        options: &ScoreOptions,
        random_seed: u64,
    ) -> Result<PpsResult, PpsError> {
        let (prepared, case) =
            determine_case_and_prepare(df, x, y, options.sample, random_seed)?;
        let task = task_for_case(case, options.invalid_score)?;

        let (ppscore, baseline_score, model_score) =
            if matches!(case, TaskType::Classification | TaskType::Regression) {
                let raw_score = calculate_model_cv_score(
                    &prepared,
                    y,
                    x,
                    &task,
                    options.cross_validation,
                    random_seed,
                )?;
                let (ppscore, baseline_score) = match task.score_normalizer {
                    Some(Normalizer::MeanAbsoluteError) => mae_normalizer(&prepared, y, raw_score)?,
                    Some(Normalizer::WeightedF1) => {
                        f1_normalizer(&prepared, y, raw_score, random_seed)?
                    }
                    None => return Err(PpsError::UnsupportedCase(case)),
                };
                (ppscore, baseline_score, raw_score)
            } else {
                (task.ppscore, task.baseline_score, task.model_score)
            };

        Ok(PpsResult {
            x: x.to_string(),
            y: y.to_string(),
            ppscore,
            case,
            is_valid_score: task.is_valid_score,
            metric: task.metric_name.map(String::from),
            baseline_score,
            // cross-validované chybové metriky sú natívne záporné
            model_score: model_score.abs(),
            model: task.model,
        })
    }

    /// PPS všetkých stĺpcov voči cieľovému stĺpcu y (y sa preskakuje).
    /// `sorted` zoradí výsledky zostupne podľa ppscore.
    pub fn predictors(
        &self,
        df: &Dataframe,
        y: &str,
        options: &ScoreOptions,
        sorted: bool,
    ) -> Result<Vec<PpsResult>, PpsError> {
        validate_column_in_df(y, df)?;

        let mut results = Vec::new();
        for column in df.column_names() {
            if column != y {
                results.push(self.score(df, column, y, options)?);
            }
        }

        if sorted {
            sort_by_ppscore_desc(&mut results);
        }
        Ok(results)
    }

    /// PPS matica: všetky usporiadané dvojice stĺpcov v poradí tabuľky.
    /// `sorted` zoradí výsledky zostupne podľa ppscore.
    pub fn matrix(
        &self,
        df: &Dataframe,
        options: &ScoreOptions,
        sorted: bool,
    ) -> Result<Vec<PpsResult>, PpsError> {
        let names = df.column_names();
        let mut results = Vec::with_capacity(names.len() * names.len());
        for x in &names {
            for y in &names {
                results.push(self.score(df, x, y, options)?);
            }
        }

        if sorted {
            sort_by_ppscore_desc(&mut results);
        }
        Ok(results)
    }
}

fn sort_by_ppscore_desc(results: &mut [PpsResult]) {
    results.sort_by(|a, b| {
        b.ppscore
            .partial_cmp(&a.ppscore)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

impl Default for PpsCalculator {
    fn default() -> Self {
        PpsCalculator::new()
    }
}

fn draw_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
