//! Forecast table output structures

use serde::{Deserialize, Serialize};

use super::irr::annual_rate_of_return;

/// One row of the monthly forecast table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// 1-indexed forecast month
    pub period: u32,

    // Gross volumes (MBbls, MMcf)
    pub gross_oil: f64,
    pub gross_gas: f64,
    pub gross_ngl: f64,
    pub gross_water: f64,

    // Working-interest volumes (gas net of shrink)
    pub wi_oil: f64,
    pub wi_gas: f64,
    pub wi_ngl: f64,
    pub wi_water: f64,

    // Net-revenue-interest volumes (water earns nothing, so none is tracked)
    pub net_oil: f64,
    pub net_gas: f64,
    pub net_ngl: f64,

    // Realized prices ($/unit)
    pub oil_price: f64,
    pub gas_price: f64,
    pub ngl_price: f64,

    // Revenue ($000s)
    pub oil_revenue: f64,
    pub gas_revenue: f64,
    pub ngl_revenue: f64,
    pub total_revenue: f64,

    // Expenses ($000s)
    pub fixed_loe: f64,
    pub variable_loe_oil: f64,
    pub variable_loe_gas: f64,
    pub variable_loe_water: f64,
    pub total_variable_loe: f64,
    pub gcp: f64,
    pub prod_tax: f64,
    pub ad_val_tax: f64,
    pub total_expenses: f64,

    // Capital ($000s, working-interest share)
    pub drilling_capex: f64,
    pub completion_capex: f64,
    pub total_capex: f64,

    // Cash flow and discounting
    pub undisc_cf: f64,
    pub discount_factor: f64,
    pub pv: f64,
    pub cum_pv: f64,
}

impl MonthlyRecord {
    /// Create a row with zeroed values for a period
    pub fn new(period: u32) -> Self {
        Self {
            period,
            gross_oil: 0.0,
            gross_gas: 0.0,
            gross_ngl: 0.0,
            gross_water: 0.0,
            wi_oil: 0.0,
            wi_gas: 0.0,
            wi_ngl: 0.0,
            wi_water: 0.0,
            net_oil: 0.0,
            net_gas: 0.0,
            net_ngl: 0.0,
            oil_price: 0.0,
            gas_price: 0.0,
            ngl_price: 0.0,
            oil_revenue: 0.0,
            gas_revenue: 0.0,
            ngl_revenue: 0.0,
            total_revenue: 0.0,
            fixed_loe: 0.0,
            variable_loe_oil: 0.0,
            variable_loe_gas: 0.0,
            variable_loe_water: 0.0,
            total_variable_loe: 0.0,
            gcp: 0.0,
            prod_tax: 0.0,
            ad_val_tax: 0.0,
            total_expenses: 0.0,
            drilling_capex: 0.0,
            completion_capex: 0.0,
            total_capex: 0.0,
            undisc_cf: 0.0,
            discount_factor: 1.0,
            pv: 0.0,
            cum_pv: 0.0,
        }
    }
}

/// Synthetic totals row appended after truncation
///
/// Every numeric column of the retained rows is summed except `period` and
/// cumulative PV; the summed `pv` column is the run's NPV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalsRecord {
    pub gross_oil: f64,
    pub gross_gas: f64,
    pub gross_ngl: f64,
    pub gross_water: f64,
    pub wi_oil: f64,
    pub wi_gas: f64,
    pub wi_ngl: f64,
    pub wi_water: f64,
    pub net_oil: f64,
    pub net_gas: f64,
    pub net_ngl: f64,
    pub oil_price: f64,
    pub gas_price: f64,
    pub ngl_price: f64,
    pub oil_revenue: f64,
    pub gas_revenue: f64,
    pub ngl_revenue: f64,
    pub total_revenue: f64,
    pub fixed_loe: f64,
    pub variable_loe_oil: f64,
    pub variable_loe_gas: f64,
    pub variable_loe_water: f64,
    pub total_variable_loe: f64,
    pub gcp: f64,
    pub prod_tax: f64,
    pub ad_val_tax: f64,
    pub total_expenses: f64,
    pub drilling_capex: f64,
    pub completion_capex: f64,
    pub total_capex: f64,
    pub undisc_cf: f64,
    pub discount_factor: f64,
    pub pv: f64,
}

impl TotalsRecord {
    /// Column sums over the retained rows
    pub fn from_rows(rows: &[MonthlyRecord]) -> Self {
        let mut totals = Self::default();
        for row in rows {
            totals.gross_oil += row.gross_oil;
            totals.gross_gas += row.gross_gas;
            totals.gross_ngl += row.gross_ngl;
            totals.gross_water += row.gross_water;
            totals.wi_oil += row.wi_oil;
            totals.wi_gas += row.wi_gas;
            totals.wi_ngl += row.wi_ngl;
            totals.wi_water += row.wi_water;
            totals.net_oil += row.net_oil;
            totals.net_gas += row.net_gas;
            totals.net_ngl += row.net_ngl;
            totals.oil_price += row.oil_price;
            totals.gas_price += row.gas_price;
            totals.ngl_price += row.ngl_price;
            totals.oil_revenue += row.oil_revenue;
            totals.gas_revenue += row.gas_revenue;
            totals.ngl_revenue += row.ngl_revenue;
            totals.total_revenue += row.total_revenue;
            totals.fixed_loe += row.fixed_loe;
            totals.variable_loe_oil += row.variable_loe_oil;
            totals.variable_loe_gas += row.variable_loe_gas;
            totals.variable_loe_water += row.variable_loe_water;
            totals.total_variable_loe += row.total_variable_loe;
            totals.gcp += row.gcp;
            totals.prod_tax += row.prod_tax;
            totals.ad_val_tax += row.ad_val_tax;
            totals.total_expenses += row.total_expenses;
            totals.drilling_capex += row.drilling_capex;
            totals.completion_capex += row.completion_capex;
            totals.total_capex += row.total_capex;
            totals.undisc_cf += row.undisc_cf;
            totals.discount_factor += row.discount_factor;
            totals.pv += row.pv;
        }
        totals
    }
}

/// Complete single-well evaluation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Well identifier
    pub well_id: u32,

    /// Well display name
    pub well_name: String,

    /// Annual discount rate the PV columns were computed at
    pub discount_rate: f64,

    /// Retained monthly rows, period-ascending, truncated at the economic limit
    pub rows: Vec<MonthlyRecord>,

    /// Appended totals row
    pub totals: TotalsRecord,
}

impl EvaluationResult {
    /// Last retained period, or 0 for an empty table
    pub fn economic_life_months(&self) -> u32 {
        self.rows.last().map(|row| row.period).unwrap_or(0)
    }

    /// Cumulative PV of the final retained period (the run's NPV)
    pub fn npv(&self) -> f64 {
        self.rows.last().map(|row| row.cum_pv).unwrap_or(0.0)
    }

    /// Headline metrics for console output and sensitivity grids
    pub fn summary(&self) -> EvaluationSummary {
        let undisc_cfs: Vec<f64> = self.rows.iter().map(|row| row.undisc_cf).collect();

        EvaluationSummary {
            well_id: self.well_id,
            months: self.rows.len() as u32,
            economic_life_months: self.economic_life_months(),
            net_oil_mbbl: self.totals.net_oil,
            net_gas_mmcf: self.totals.net_gas,
            net_ngl_mbbl: self.totals.net_ngl,
            total_revenue: self.totals.total_revenue,
            total_expenses: self.totals.total_expenses,
            total_capex: self.totals.total_capex,
            undisc_cf: self.totals.undisc_cf,
            npv: self.npv(),
            irr: annual_rate_of_return(&undisc_cfs),
        }
    }
}

/// Headline metrics for one evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub well_id: u32,
    pub months: u32,
    pub economic_life_months: u32,
    pub net_oil_mbbl: f64,
    pub net_gas_mmcf: f64,
    pub net_ngl_mbbl: f64,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_capex: f64,
    pub undisc_cf: f64,
    pub npv: f64,
    /// Annualized rate of return, None when the stream never changes sign
    pub irr: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_row_result() -> EvaluationResult {
        let mut first = MonthlyRecord::new(1);
        first.total_revenue = 100.0;
        first.undisc_cf = -50.0;
        first.pv = -49.0;
        first.cum_pv = -49.0;

        let mut second = MonthlyRecord::new(2);
        second.total_revenue = 80.0;
        second.undisc_cf = 60.0;
        second.pv = 58.0;
        second.cum_pv = 9.0;

        let rows = vec![first, second];
        let totals = TotalsRecord::from_rows(&rows);
        EvaluationResult {
            well_id: 1,
            well_name: "test".into(),
            discount_rate: 0.20,
            rows,
            totals,
        }
    }

    #[test]
    fn test_totals_sum_retained_rows() {
        let result = two_row_result();

        assert_relative_eq!(result.totals.total_revenue, 180.0, epsilon = 1e-12);
        assert_relative_eq!(result.totals.undisc_cf, 10.0, epsilon = 1e-12);
        assert_relative_eq!(result.totals.pv, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_npv_is_final_cum_pv() {
        let result = two_row_result();
        assert_relative_eq!(result.npv(), 9.0, epsilon = 1e-12);
        assert_eq!(result.economic_life_months(), 2);
    }

    #[test]
    fn test_empty_table_is_representable() {
        let result = EvaluationResult {
            well_id: 1,
            well_name: "empty".into(),
            discount_rate: 0.20,
            rows: Vec::new(),
            totals: TotalsRecord::from_rows(&[]),
        };

        assert_eq!(result.economic_life_months(), 0);
        assert_relative_eq!(result.npv(), 0.0);
        assert_eq!(result.summary().irr, None);
    }
}
