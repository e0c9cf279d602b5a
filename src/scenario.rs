//! Scenario runner for efficient sensitivity batches
//!
//! Holds one set of base assumptions and re-runs the engine with different
//! configs or price decks without rebuilding the deck each time.

use crate::assumptions::{Assumptions, PriceDeck};
use crate::error::ConfigError;
use crate::projection::{EconomicsConfig, EconomicsEngine, EvaluationResult};
use crate::well::Well;

/// Pre-loaded runner for repeated single-well evaluations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [0.10, 0.15, 0.20] {
///     let config = EconomicsConfig { discount_rate: rate, ..Default::default() };
///     let result = runner.run(&well, config)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create a runner with the reference deck
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_deck(),
        }
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single evaluation with the given config
    pub fn run(&self, well: &Well, config: EconomicsConfig) -> Result<EvaluationResult, ConfigError> {
        let engine = EconomicsEngine::new(self.base_assumptions.clone(), config);
        engine.evaluate(well)
    }

    /// Run one well under several configs
    pub fn run_scenarios(
        &self,
        well: &Well,
        configs: &[EconomicsConfig],
    ) -> Result<Vec<EvaluationResult>, ConfigError> {
        configs
            .iter()
            .map(|config| self.run(well, config.clone()))
            .collect()
    }

    /// Run one well with the base assumptions under a substituted price deck
    pub fn run_with_deck(
        &self,
        well: &Well,
        deck: PriceDeck,
        config: EconomicsConfig,
    ) -> Result<EvaluationResult, ConfigError> {
        let mut assumptions = self.base_assumptions.clone();
        assumptions.prices = deck;
        let engine = EconomicsEngine::new(assumptions, config);
        engine.evaluate(well)
    }

    /// Evaluate several independent wells under one config
    ///
    /// Each well is its own evaluation; nothing is aggregated across wells.
    pub fn run_batch(
        &self,
        wells: &[Well],
        config: EconomicsConfig,
    ) -> Result<Vec<EvaluationResult>, ConfigError> {
        log::info!("evaluating {} wells", wells.len());
        wells.iter().map(|well| self.run(well, config.clone())).collect()
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_scenarios() {
        let runner = ScenarioRunner::new();
        let well = Well::reference_type_well();

        let configs: Vec<_> = [0.10, 0.20, 0.30]
            .iter()
            .map(|&rate| EconomicsConfig {
                discount_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&well, &configs).unwrap();
        assert_eq!(results.len(), 3);

        // Truncation does not depend on the discount rate
        assert_eq!(results[0].rows.len(), results[2].rows.len());
        // A harsher discount rate must lower NPV
        assert!(results[0].npv() > results[1].npv());
        assert!(results[1].npv() > results[2].npv());
    }

    #[test]
    fn test_higher_deck_extends_economic_life() {
        let runner = ScenarioRunner::new();
        let well = Well::reference_type_well();
        let config = EconomicsConfig::default();

        let base = runner.run(&well, config.clone()).unwrap();
        let rich_deck = PriceDeck {
            oil_price: 120.0,
            ..runner.assumptions().prices
        };
        let rich = runner.run_with_deck(&well, rich_deck, config).unwrap();

        assert!(rich.economic_life_months() >= base.economic_life_months());
        assert!(rich.npv() > base.npv());
    }

    #[test]
    fn test_batch_runs_are_independent() {
        let runner = ScenarioRunner::new();
        let mut other = Well::reference_type_well();
        other.well_id = 2002;
        other.ownership.wi = 0.5;

        let wells = vec![Well::reference_type_well(), other];
        let results = runner.run_batch(&wells, EconomicsConfig::default()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].well_id, 1001);
        assert_eq!(results[1].well_id, 2002);
        assert!(results[0].totals.total_revenue > results[1].totals.total_revenue);
    }
}
