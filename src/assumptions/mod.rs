//! Evaluation assumptions: price deck, operating costs, capital, and taxes

mod prices;
mod opex;
mod capex;

pub use prices::{PriceDeck, RealizedPrices};
pub use opex::{LoeTier, FixedLoeSchedule, VariableLoeRates, OpexAssumptions};
pub use capex::{CapexEvent, CapexSchedule};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Severance-style taxes as fractions of total revenue
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxRates {
    /// Production (severance) tax
    pub production: f64,
    /// Ad-valorem tax
    pub ad_valorem: f64,
}

/// Container for all evaluation assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub prices: PriceDeck,
    pub opex: OpexAssumptions,
    pub capex: CapexSchedule,
    pub taxes: TaxRates,
}

impl Assumptions {
    /// Reference deck matching the type-well evaluation
    ///
    /// Fixed LOE steps 9.5 / 8.0 / 7.7 / 4.0 $000s per month anchored at
    /// first production in month 3; drill in month 1, complete in month 2.
    pub fn default_deck() -> Self {
        Self {
            prices: PriceDeck::default(),
            opex: OpexAssumptions {
                fixed_loe: FixedLoeSchedule::from_durations(
                    3,
                    &[(9.5, 18), (8.0, 12), (7.7, 30)],
                    4.0,
                )
                .expect("reference LOE schedule is contiguous"),
                variable_loe: VariableLoeRates {
                    oil: 0.80,
                    gas: 0.00,
                    water: 1.46,
                },
                gcp_rate: 0.92,
            },
            capex: CapexSchedule::default(),
            taxes: TaxRates {
                production: 0.072,
                ad_valorem: 0.00,
            },
        }
    }

    /// Same deck with a different fixed-LOE anchor month
    pub fn default_deck_for_first_prod(first_prod_month: u32) -> Result<Self, ConfigError> {
        let mut assumptions = Self::default_deck();
        assumptions.opex.fixed_loe = FixedLoeSchedule::from_durations(
            first_prod_month,
            &[(9.5, 18), (8.0, 12), (7.7, 30)],
            4.0,
        )?;
        Ok(assumptions)
    }

    /// Validate the parts that are not checked at construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capex.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_deck_is_valid() {
        let assumptions = Assumptions::default_deck();
        assert!(assumptions.validate().is_ok());
        assert_relative_eq!(assumptions.taxes.production, 0.072);
        assert_relative_eq!(assumptions.opex.gcp_rate, 0.92);
    }

    #[test]
    fn test_reanchored_deck_shifts_tiers() {
        let assumptions = Assumptions::default_deck_for_first_prod(5).unwrap();
        let schedule = &assumptions.opex.fixed_loe;

        assert_relative_eq!(schedule.monthly_cost(4), 0.0);
        assert_relative_eq!(schedule.monthly_cost(5), 9.5);
        assert_relative_eq!(schedule.monthly_cost(22), 9.5);
        assert_relative_eq!(schedule.monthly_cost(23), 8.0);
    }
}
