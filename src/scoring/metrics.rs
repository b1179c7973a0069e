use std::collections::HashMap;

use crate::error::PpsError;
use crate::frame::Dataframe;
use crate::random::SeededRng;

/// Priemerná absolútna chyba
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let sum: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();
    sum / y_true.len() as f64
}

/// Vážené F1 (sklearn f1_weighted): F1 každej triedy vážené jej
/// zastúpením v y_true. Triedy iba v y_pred majú váhu 0.
pub fn weighted_f1(y_true: &[u32], y_pred: &[u32]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }

    let mut true_count: HashMap<u32, usize> = HashMap::new();
    let mut pred_count: HashMap<u32, usize> = HashMap::new();
    let mut tp: HashMap<u32, usize> = HashMap::new();

    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        *true_count.entry(t).or_insert(0) += 1;
        *pred_count.entry(p).or_insert(0) += 1;
        if t == p {
            *tp.entry(t).or_insert(0) += 1;
        }
    }

    let total = y_true.len() as f64;
    let mut weighted_sum = 0.0;

    // pevné poradie tried, aby bol súčet f64 bitovo reprodukovateľný
    let mut classes: Vec<u32> = true_count.keys().copied().collect();
    classes.sort_unstable();

    for class in classes {
        let tp_c = *tp.get(&class).unwrap_or(&0) as f64;
        let pred_c = *pred_count.get(&class).unwrap_or(&0) as f64;
        let true_c = true_count[&class] as f64;

        let precision = if pred_c > 0.0 { tp_c / pred_c } else { 0.0 };
        let recall = tp_c / true_c;
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        weighted_sum += f1 * true_c / total;
    }

    weighted_sum
}

/// Normalizuje MAE modelu voči naivnému baseline.
/// Horší model ako baseline dostane presne 0.
pub fn normalized_mae_score(model_mae: f64, naive_mae: f64) -> f64 {
    if model_mae > naive_mae {
        0.0
    } else {
        1.0 - model_mae / naive_mae
    }
}

/// Normalizuje F1 modelu voči baseline.
/// Pri baseline == 1 nie je čo zlepšovať, výsledok je 0.
pub fn normalized_f1_score(model_f1: f64, baseline_f1: f64) -> f64 {
    if model_f1 < baseline_f1 {
        return 0.0;
    }
    let scale_range = 1.0 - baseline_f1;
    if scale_range == 0.0 {
        return 0.0;
    }
    (model_f1 - baseline_f1) / scale_range
}

/// Regresný normalizér: baseline je MAE cieľa voči vlastnému mediánu
/// ("vždy predikuj medián"). Nulový baseline znamená nedefinované PPS.
pub fn mae_normalizer(
    df: &Dataframe,
    y: &str,
    model_score: f64,
) -> Result<(f64, f64), PpsError> {
    let y_col = df
        .column(y)
        .ok_or_else(|| PpsError::ColumnNotFound(y.to_string()))?;
    let values = y_col.numeric_values()?;
    let median = y_col.median()?;
    let naive: Vec<f64> = vec![median; values.len()];
    let baseline_score = mean_absolute_error(&values, &naive);

    if baseline_score == 0.0 {
        return Err(PpsError::DegenerateBaseline);
    }

    let ppscore = normalized_mae_score(model_score.abs(), baseline_score);
    Ok((ppscore, baseline_score))
}

/// Klasifikačný normalizér: baseline je lepšie z dvoch naivných skóre -
/// predikcia najčastejšej triedy a náhodná permutácia skutočných tried.
pub fn f1_normalizer(
    df: &Dataframe,
    y: &str,
    model_score: f64,
    random_seed: u64,
) -> Result<(f64, f64), PpsError> {
    let y_col = df
        .column(y)
        .ok_or_else(|| PpsError::ColumnNotFound(y.to_string()))?;
    let truth = y_col.label_encode();

    let mut counts: HashMap<u32, usize> = HashMap::new();
    for &label in &truth {
        *counts.entry(label).or_insert(0) += 1;
    }
    // pri zhode počtov vyhráva najmenší label, aby bol baseline deterministický
    let mut most_common = 0u32;
    let mut best_count = 0usize;
    for (&label, &count) in &counts {
        if count > best_count || (count == best_count && label < most_common) {
            most_common = label;
            best_count = count;
        }
    }
    let most_common_pred = vec![most_common; truth.len()];

    let mut rng = SeededRng::new(random_seed);
    let permuted: Vec<u32> = rng
        .permutation(truth.len())
        .into_iter()
        .map(|i| truth[i])
        .collect();

    let baseline_score = f64::max(
        weighted_f1(&truth, &most_common_pred),
        weighted_f1(&truth, &permuted),
    );

    let ppscore = normalized_f1_score(model_score, baseline_score);
    Ok((ppscore, baseline_score))
}
