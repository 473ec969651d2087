/// Shannon entropy of a weighted choice between the given tiles
///
/// Computes `ln(Σw) - Σ(w·ln w) / Σw` over `weights`. Returns `None` when the
/// weights sum to zero (nothing left to choose from) or when the result is not a
/// finite number, so callers never have to compare against NaN.
///
/// A single remaining weight yields exactly `0.0`; the cancellation is made exact
/// here rather than left to floating-point rounding.
pub fn weighted_entropy<I>(weights: I) -> Option<f64>
where
    I: IntoIterator<Item = u32>,
{
    let mut sum_weights = 0.0_f64;
    let mut sum_weight_log_weights = 0.0_f64;
    let mut contributing = 0_usize;

    for weight in weights {
        if weight == 0 {
            continue;
        }
        let w = f64::from(weight);
        sum_weights += w;
        sum_weight_log_weights += w * w.ln();
        contributing += 1;
    }

    if contributing == 0 || sum_weights <= 0.0 {
        return None;
    }
    if contributing == 1 {
        return Some(0.0);
    }

    let entropy = sum_weights.ln() - sum_weight_log_weights / sum_weights;
    // Rounding can leave a tiny negative residue for near-degenerate distributions
    entropy.is_finite().then_some(entropy.max(f64::MIN_POSITIVE))
}
