//! Shared presentation rounding and guarded arithmetic.
//!
//! Every currency and percentage figure leaving the engine goes through
//! [`round2`], so the return calculator and all three simulators round
//! identically.

/// Decimal places for currency and percentage outputs.
pub const PRESENTATION_DECIMALS: i32 = 2;

/// Round half away from zero to [`PRESENTATION_DECIMALS`] places.
pub fn round2(value: f64) -> f64 {
    round_to(value, PRESENTATION_DECIMALS)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Normalize -0.0 so serialized output is stable.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `numerator / denominator`, or `None` when the denominator is zero or the
/// quotient is not finite.
pub fn checked_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let q = numerator / denominator;
    q.is_finite().then_some(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(5000.0), 5000.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn checked_div_rejects_zero_and_overflow() {
        assert_eq!(checked_div(1.0, 0.0), None);
        assert_eq!(checked_div(f64::MAX, 1e-300), None);
        assert_eq!(checked_div(f64::NAN, 2.0), None);
        assert_eq!(checked_div(10.0, 4.0), Some(2.5));
    }
}
