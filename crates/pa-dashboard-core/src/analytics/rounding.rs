//! Exact rounding helpers.
//!
//! All rounding is half-up and done in integer arithmetic so that the same
//! inputs always produce bit-identical outputs.

/// `round(part / total * 100)`, half-up. Returns 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (part as u64, total as u64);
    ((200 * part + total) / (2 * total)) as u32
}

/// `numerator / denominator` rounded half-up to one decimal place. Returns 0
/// when `denominator` is not positive.
pub fn round_tenths(numerator: i64, denominator: i64) -> f64 {
    if denominator <= 0 {
        return 0.0;
    }
    let tenths = (20 * numerator + denominator).div_euclid(2 * denominator);
    tenths as f64 / 10.0
}
