//! Core evaluation engine: monthly cash-flow buildup, economic-limit
//! truncation, and discounting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, RealizedPrices};
use crate::error::ConfigError;
use crate::forecast::PhaseStreams;
use crate::well::Well;

use super::cashflows::{EvaluationResult, MonthlyRecord, TotalsRecord};
use super::discount::DiscountCurve;

/// Configuration for one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsConfig {
    /// Number of months to forecast before truncation
    pub horizon_months: u32,

    /// Producing days per forecast month
    pub days_per_month: f64,

    /// Annual discount rate, compounded monthly
    pub discount_rate: f64,

    /// Whether exports carry WI volumes, capex components, and period PV
    pub detailed_output: bool,

    /// Evaluation effective date; period 1 maps to this calendar month
    pub effective_date: Option<NaiveDate>,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            horizon_months: 360, // 30 years
            days_per_month: 30.0,
            discount_rate: 0.20,
            detailed_output: false,
            effective_date: None,
        }
    }
}

impl EconomicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_months == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        if self.days_per_month <= 0.0 {
            return Err(ConfigError::InvalidDaysPerMonth(self.days_per_month));
        }
        // Surfaces DegenerateDiscountRate before any rows are built
        DiscountCurve::new(self.discount_rate)?;
        Ok(())
    }
}

/// Main evaluation engine
pub struct EconomicsEngine {
    assumptions: Assumptions,
    config: EconomicsConfig,
}

impl EconomicsEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: EconomicsConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &EconomicsConfig {
        &self.config
    }

    /// Run the full evaluation for a single well
    ///
    /// Pipeline: validate inputs, forecast and allocate phase streams, build
    /// the monthly table, truncate at the economic limit, then discount and
    /// accumulate PV over the retained rows.
    pub fn evaluate(&self, well: &Well) -> Result<EvaluationResult, ConfigError> {
        well.validate()?;
        self.assumptions.validate()?;
        self.config.validate()?;

        let streams = PhaseStreams::build(well, self.config.horizon_months, self.config.days_per_month);
        let prices = self.assumptions.prices.realize();

        let mut rows: Vec<MonthlyRecord> = (1..=self.config.horizon_months)
            .map(|period| self.build_row(well, &streams, &prices, period))
            .collect();

        let completion_month = self.assumptions.capex.completion_month();
        if let Some(cut) = economic_cutoff(&rows, completion_month) {
            log::debug!(
                "well {}: economic limit at period {}, dropping {} of {} rows",
                well.well_id,
                rows[cut].period,
                rows.len() - cut,
                rows.len()
            );
            rows.truncate(cut);
        } else {
            log::debug!(
                "well {}: economic limit not reached within {} months",
                well.well_id,
                self.config.horizon_months
            );
        }

        let curve = DiscountCurve::new(self.config.discount_rate)?;
        let mut cum_pv = 0.0;
        for row in &mut rows {
            row.discount_factor = curve.factor(row.period);
            row.pv = curve.present_value(row.undisc_cf, row.period);
            cum_pv += row.pv;
            row.cum_pv = cum_pv;
        }

        let totals = TotalsRecord::from_rows(&rows);

        Ok(EvaluationResult {
            well_id: well.well_id,
            well_name: well.name.clone(),
            discount_rate: self.config.discount_rate,
            rows,
            totals,
        })
    }

    /// Assemble one undiscounted row (volumes through cash flow)
    fn build_row(
        &self,
        well: &Well,
        streams: &PhaseStreams,
        prices: &RealizedPrices,
        period: u32,
    ) -> MonthlyRecord {
        let i = (period - 1) as usize;
        let wi = well.ownership.wi;
        let mut row = MonthlyRecord::new(period);

        row.gross_oil = streams.gross_oil[i];
        row.gross_gas = streams.gross_gas[i];
        row.gross_ngl = streams.gross_ngl[i];
        row.gross_water = streams.gross_water[i];
        row.wi_oil = streams.wi_oil[i];
        row.wi_gas = streams.wi_gas[i];
        row.wi_ngl = streams.wi_ngl[i];
        row.wi_water = streams.wi_water[i];
        row.net_oil = streams.net_oil[i];
        row.net_gas = streams.net_gas[i];
        row.net_ngl = streams.net_ngl[i];

        row.oil_price = prices.oil;
        row.gas_price = prices.gas;
        row.ngl_price = prices.ngl;

        row.oil_revenue = row.net_oil * prices.oil;
        row.gas_revenue = row.net_gas * prices.gas;
        row.ngl_revenue = row.net_ngl * prices.ngl;
        row.total_revenue = row.oil_revenue + row.gas_revenue + row.ngl_revenue;

        let opex = &self.assumptions.opex;
        row.fixed_loe = opex.fixed_loe.monthly_cost(period) * wi;
        row.variable_loe_oil = row.wi_oil * opex.variable_loe.oil;
        row.variable_loe_gas = row.wi_gas * opex.variable_loe.gas;
        row.variable_loe_water = row.wi_water * opex.variable_loe.water;
        row.total_variable_loe =
            row.variable_loe_oil + row.variable_loe_gas + row.variable_loe_water;
        row.gcp = row.net_gas * opex.gcp_rate;
        row.prod_tax = row.total_revenue * self.assumptions.taxes.production;
        row.ad_val_tax = row.total_revenue * self.assumptions.taxes.ad_valorem;
        row.total_expenses =
            row.fixed_loe + row.total_variable_loe + row.gcp + row.prod_tax + row.ad_val_tax;

        let (drilling, completion) = self.assumptions.capex.gross_at(period);
        row.drilling_capex = drilling * wi;
        row.completion_capex = completion * wi;
        row.total_capex = row.drilling_capex + row.completion_capex;

        row.undisc_cf = row.total_revenue - row.total_expenses - row.total_capex;

        row
    }
}

/// Forward scan for the economic limit
///
/// Returns the index of the first period strictly after `completion_month`
/// with negative undiscounted cash flow. Everything from that index on is
/// permanently uneconomic; capital months at or before completion are never
/// candidates, whatever their sign.
fn economic_cutoff(rows: &[MonthlyRecord], completion_month: u32) -> Option<usize> {
    rows.iter()
        .position(|row| row.period > completion_month && row.undisc_cf < 0.0)
}
