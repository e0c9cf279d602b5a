//! First-production alignment and WI/NRI allocation
//!
//! Streams come out of the decline generator indexed from t = 0. Shifting
//! realigns them so calendar month `first_prod_month` receives volume(0);
//! it is a pure index shift, never a decline recomputation.

use crate::well::Well;

use super::decline::{forecast_volumes, ngl_from_gas};

/// Shift a stream forward so index `first_prod_month - 1` takes the old
/// index 0, zero-filling earlier slots. Length is preserved; the tail that
/// slides past the horizon is dropped.
pub fn shift_to_first_prod(stream: &[f64], first_prod_month: u32) -> Vec<f64> {
    let offset = first_prod_month.saturating_sub(1) as usize;
    (0..stream.len())
        .map(|i| if i >= offset { stream[i - offset] } else { 0.0 })
        .collect()
}

/// Gross, working-interest, and net monthly streams for every phase
///
/// Index i holds period i+1. Gas carries shrink on both the WI and net
/// sides; water is a cost stream only, so no net water is tracked.
#[derive(Debug, Clone)]
pub struct PhaseStreams {
    pub gross_oil: Vec<f64>,
    pub gross_gas: Vec<f64>,
    pub gross_ngl: Vec<f64>,
    pub gross_water: Vec<f64>,

    pub wi_oil: Vec<f64>,
    pub wi_gas: Vec<f64>,
    pub wi_ngl: Vec<f64>,
    pub wi_water: Vec<f64>,

    pub net_oil: Vec<f64>,
    pub net_gas: Vec<f64>,
    pub net_ngl: Vec<f64>,
}

impl PhaseStreams {
    /// Forecast, shift, and allocate all phases for one well
    pub fn build(well: &Well, horizon_months: u32, days_per_month: f64) -> Self {
        let oil = forecast_volumes(&well.oil, horizon_months, days_per_month);
        let gas = forecast_volumes(&well.gas, horizon_months, days_per_month);
        let water = forecast_volumes(&well.water, horizon_months, days_per_month);
        let ngl: Vec<f64> = gas.iter().map(|&g| ngl_from_gas(g, well.ngl_yield)).collect();

        let gross_oil = shift_to_first_prod(&oil, well.first_prod_month);
        let gross_gas = shift_to_first_prod(&gas, well.first_prod_month);
        let gross_ngl = shift_to_first_prod(&ngl, well.first_prod_month);
        let gross_water = shift_to_first_prod(&water, well.first_prod_month);

        let wi = well.ownership.wi;
        let nri = well.ownership.nri();
        let recovered = 1.0 - well.shrink;

        let scale = |stream: &[f64], factor: f64| -> Vec<f64> {
            stream.iter().map(|&v| v * factor).collect()
        };

        Self {
            wi_oil: scale(&gross_oil, wi),
            wi_gas: scale(&gross_gas, recovered * wi),
            wi_ngl: scale(&gross_ngl, wi),
            wi_water: scale(&gross_water, wi),
            net_oil: scale(&gross_oil, nri),
            net_gas: scale(&gross_gas, recovered * nri),
            net_ngl: scale(&gross_ngl, nri),
            gross_oil,
            gross_gas,
            gross_ngl,
            gross_water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well::{Ownership, TypeCurve, Well};
    use approx::assert_relative_eq;

    fn test_well() -> Well {
        Well::reference_type_well()
    }

    #[test]
    fn test_shift_zero_fills_pre_production_months() {
        let stream = vec![10.0, 9.0, 8.0, 7.0, 6.0];
        let shifted = shift_to_first_prod(&stream, 3);

        assert_eq!(shifted, vec![0.0, 0.0, 10.0, 9.0, 8.0]);
    }

    #[test]
    fn test_shift_with_first_month_production_is_identity() {
        let stream = vec![10.0, 9.0, 8.0];
        assert_eq!(shift_to_first_prod(&stream, 1), stream);
    }

    #[test]
    fn test_net_stream_shift_invariant() {
        let well = test_well();
        let streams = PhaseStreams::build(&well, 360, 30.0);
        let nri = well.ownership.nri();

        // Every period before first production is zero
        for period in 1..well.first_prod_month {
            assert_relative_eq!(streams.net_oil[(period - 1) as usize], 0.0);
        }

        // The first production month carries the undeclined volume
        let v0 = well.oil.monthly_volume(0, 30.0);
        let first = (well.first_prod_month - 1) as usize;
        assert_relative_eq!(streams.gross_oil[first], v0, epsilon = 1e-12);
        assert_relative_eq!(streams.net_oil[first], v0 * nri, epsilon = 1e-12);
    }

    #[test]
    fn test_net_never_exceeds_wi() {
        let well = Well::new(
            7,
            "Partial WI",
            TypeCurve::new(490.0, 0.90, 0.943),
            TypeCurve::new(975.0, 0.95, 0.48),
            TypeCurve::new(1200.0, 1.001, 0.805),
            67.0,
            0.26,
            Ownership::new(0.75, 0.1875),
            3,
        );
        let streams = PhaseStreams::build(&well, 120, 30.0);

        for i in 0..120 {
            assert!(streams.net_oil[i] <= streams.wi_oil[i] + 1e-12);
            assert!(streams.net_gas[i] <= streams.wi_gas[i] + 1e-12);
            assert!(streams.net_ngl[i] <= streams.wi_ngl[i] + 1e-12);
        }
    }

    #[test]
    fn test_gas_shrink_applies_to_wi_and_net() {
        let well = test_well();
        let streams = PhaseStreams::build(&well, 12, 30.0);
        let first = (well.first_prod_month - 1) as usize;
        let gross = streams.gross_gas[first];

        assert_relative_eq!(
            streams.wi_gas[first],
            gross * (1.0 - well.shrink) * well.ownership.wi,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            streams.net_gas[first],
            gross * (1.0 - well.shrink) * well.ownership.nri(),
            epsilon = 1e-12
        );
        // NGL comes off gross gas, before shrink
        assert_relative_eq!(
            streams.gross_ngl[first],
            gross * well.ngl_yield / 1000.0,
            epsilon = 1e-12
        );
    }
}
