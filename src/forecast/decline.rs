//! Arps hyperbolic decline math
//!
//! Rates decline hyperbolically for the entire horizon. Because qi, b, and
//! di are all validated strictly positive, every stream is positive and
//! strictly decreasing; the generator never produces zero or negative
//! volumes on its own.

use crate::well::TypeCurve;

impl TypeCurve {
    /// Daily rate at zero-based month index t
    ///
    /// `q(t) = qi / (1 + b*di*t)^(1/b)`; at t = 0 the decline factor is
    /// exactly 1 and the rate is exactly qi.
    pub fn daily_rate(&self, t: u32) -> f64 {
        self.qi / (1.0 + self.b * self.di * t as f64).powf(1.0 / self.b)
    }

    /// Unit-scaled monthly volume at zero-based month index t
    ///
    /// MBbls for liquids, MMcf for gas: `rate * days / 1000`.
    pub fn monthly_volume(&self, t: u32, days_per_month: f64) -> f64 {
        self.daily_rate(t) * days_per_month / 1000.0
    }
}

/// Gross monthly volumes for indices `0..n_periods`
pub fn forecast_volumes(curve: &TypeCurve, n_periods: u32, days_per_month: f64) -> Vec<f64> {
    (0..n_periods)
        .map(|t| curve.monthly_volume(t, days_per_month))
        .collect()
}

/// NGL volume recovered from a gross gas volume (MBbls from MMcf)
///
/// NGL is yield-derived, not decline-fit: `gas_volume * yield / 1000`.
pub fn ngl_from_gas(gas_volume: f64, ngl_yield: f64) -> f64 {
    gas_volume * ngl_yield / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn oil_curve() -> TypeCurve {
        TypeCurve::new(490.0, 0.90, 0.943)
    }

    #[test]
    fn test_first_month_volume_is_undeclined() {
        // volume(0) = qi * days / 1000 exactly
        let volume = oil_curve().monthly_volume(0, 30.0);
        assert_relative_eq!(volume, 14.70, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_formula_at_known_index() {
        let curve = oil_curve();
        let expected = 490.0 / (1.0 + 0.90 * 0.943 * 12.0_f64).powf(1.0 / 0.90);
        assert_relative_eq!(curve.daily_rate(12), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_streams_strictly_decrease() {
        for curve in [
            oil_curve(),
            TypeCurve::new(975.0, 0.95, 0.48),
            TypeCurve::new(1200.0, 1.001, 0.805),
        ] {
            let stream = forecast_volumes(&curve, 360, 30.0);
            assert_eq!(stream.len(), 360);
            for pair in stream.windows(2) {
                assert!(pair[1] < pair[0], "stream must strictly decrease");
            }
            assert!(stream[359] > 0.0, "hyperbolic decline never reaches zero");
        }
    }

    #[test]
    fn test_ngl_yield_scaling() {
        // 67 Bbls/MMcf on the undeclined gas month
        let gas = TypeCurve::new(975.0, 0.95, 0.48).monthly_volume(0, 30.0);
        assert_relative_eq!(ngl_from_gas(gas, 67.0), gas * 0.067, epsilon = 1e-12);
        assert_relative_eq!(ngl_from_gas(gas, 0.0), 0.0);
    }
}
