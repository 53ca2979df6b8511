//! Numeric conversion helpers centralizing the price and progress casts.

use num_traits::cast::cast;

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Round to hundredths, the precision used for displayed amounts.
#[must_use]
pub fn round_to_cents(value: f64) -> i64 {
    round_f64_to_i64(value * 100.0)
}

/// Percentage of `part` over `whole`, clamped to `0..=100` and 0 when `whole` is 0.
#[must_use]
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let ratio = cast::<u64, f64>(part.min(whole)).unwrap_or(0.0)
        / cast::<u64, f64>(whole).unwrap_or(1.0);
    cast::<f64, u8>((ratio * 100.0).round()).unwrap_or(100)
}

/// Convert a usize count to u32, saturating at `u32::MAX`.
#[must_use]
pub fn usize_to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounders_handle_non_finite() {
        assert_eq!(round_f64_to_i64(f64::NAN), 0);
        assert_eq!(round_f64_to_i64(f64::INFINITY), 0);
        assert_eq!(round_f64_to_i64(2.5), 3);
        assert_eq!(round_to_cents(62.899_999_9), 6290);
    }

    #[test]
    fn percent_clamps_and_avoids_division_by_zero() {
        assert_eq!(percent_of(1, 4), 25);
        assert_eq!(percent_of(9, 4), 100);
        assert_eq!(percent_of(3, 0), 0);
        assert_eq!(percent_of(1500, 3000), 50);
    }
}
