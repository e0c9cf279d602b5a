//! Rate of return on the well's undiscounted cash-flow stream
//!
//! Solves for the monthly rate that zeroes NPV with Newton-Raphson, falling
//! back to bisection when the derivative flattens out, and reports the
//! annualized rate. The stream is 1-indexed by period: cashflows[0] is
//! period 1 and is discounted one month.

/// Annualized IRR of a monthly cash-flow stream
///
/// Returns `None` when no solution exists: an empty stream, or one without
/// a sign change (a well that never pays out has no internal rate).
pub fn annual_rate_of_return(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }
    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.05 / 12.0;
    let tolerance = 1e-10;

    for _ in 0..1000 {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            return bisect(cashflows);
        }

        let next = (rate - npv / dnpv).clamp(-0.99, 10.0);
        if (next - rate).abs() < tolerance {
            return Some(annualize(next));
        }
        rate = next;
    }

    bisect(cashflows)
}

fn annualize(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powi(12) - 1.0
}

fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (i, &cf) in cashflows.iter().enumerate() {
        let period = (i + 1) as i32;
        npv += cf / (1.0 + rate).powi(period);
        dnpv -= period as f64 * cf / (1.0 + rate).powi(period + 1);
    }

    (npv, dnpv)
}

fn bisect(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99;
    let mut high = 10.0;

    let npv_at = |rate: f64| npv_and_derivative(cashflows, rate).0;

    if npv_at(low) * npv_at(high) > 0.0 {
        return None;
    }

    for _ in 0..200 {
        let mid = (low + high) / 2.0;
        let value = npv_at(mid);

        if value.abs() < 1e-10 || (high - low) / 2.0 < 1e-12 {
            return Some(annualize(mid));
        }
        if npv_at(low) * value < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    Some(annualize((low + high) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_sign_change_has_no_irr() {
        assert_eq!(annual_rate_of_return(&[]), None);
        assert_eq!(annual_rate_of_return(&[100.0, 90.0, 80.0]), None);
        assert_eq!(annual_rate_of_return(&[-100.0, -90.0]), None);
    }

    #[test]
    fn test_all_zero_stream() {
        assert_eq!(annual_rate_of_return(&[0.0, 0.0, 0.0]), Some(0.0));
    }

    #[test]
    fn test_two_flow_stream_recovers_analytic_rate() {
        // -100 then +110 one month later: monthly rate 10%
        let irr = annual_rate_of_return(&[-100.0, 110.0]).unwrap();
        assert_relative_eq!(irr, 1.10_f64.powi(12) - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_break_even_stream() {
        // -100 then +100: zero rate
        let irr = annual_rate_of_return(&[-100.0, 100.0]).unwrap();
        assert_relative_eq!(irr, 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_typical_well_shape() {
        // Capital months, then a declining payout tail
        let mut cashflows = vec![-1600.0, -2200.0];
        for t in 0..120 {
            cashflows.push(900.0 / (1.0 + 0.05 * t as f64));
        }
        let irr = annual_rate_of_return(&cashflows).unwrap();
        assert!(irr > 0.0, "payout well must have a positive rate of return");
    }
}
