//! Discounting for cash-flow present values
//!
//! A single annual rate compounded monthly: the factor for period p is
//! `(1 + rate/12)^p`, so period 0 would be undiscounted and period 12 carries
//! one full year of discounting.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Monthly-compounded discount curve at a flat annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurve {
    /// Annual discount rate (0.20 = PV-20%)
    pub annual_rate: f64,
}

impl DiscountCurve {
    /// Create a curve, rejecting rates that make the monthly base non-positive
    pub fn new(annual_rate: f64) -> Result<Self, ConfigError> {
        if annual_rate <= -12.0 {
            return Err(ConfigError::DegenerateDiscountRate(annual_rate));
        }
        Ok(Self { annual_rate })
    }

    /// Monthly compounding base `1 + rate/12`
    pub fn monthly_base(&self) -> f64 {
        1.0 + self.annual_rate / 12.0
    }

    /// Discount factor for a 1-indexed period
    pub fn factor(&self, period: u32) -> f64 {
        self.monthly_base().powi(period as i32)
    }

    /// Present value of a single cash flow landing in `period`
    pub fn present_value(&self, cashflow: f64, period: u32) -> f64 {
        cashflow / self.factor(period)
    }

    /// Net present value of a (period, cashflow) stream
    pub fn npv(&self, cashflows: &[(u32, f64)]) -> f64 {
        cashflows
            .iter()
            .map(|&(period, cf)| self.present_value(cf, period))
            .sum()
    }

    /// Display label, e.g. `PV-20.0%`
    pub fn label(&self) -> String {
        format!("PV-{:.1}%", self.annual_rate * 100.0)
    }
}
