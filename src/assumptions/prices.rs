//! Price deck assumptions
//!
//! A flat deck: one benchmark price and basis differential per phase, fixed
//! for the entire forecast. Price escalation is intentionally not modeled.

use serde::{Deserialize, Serialize};

/// Benchmark prices and differentials for one evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDeck {
    /// Benchmark oil price ($/Bbl)
    pub oil_price: f64,

    /// Oil basis differential ($/Bbl, usually negative)
    pub oil_basis: f64,

    /// Benchmark gas price ($/MMBtu)
    pub gas_price: f64,

    /// Gas basis differential ($/MMBtu)
    pub gas_basis: f64,

    /// BTU uplift on recovered (post-shrink) gas
    pub btu_factor: f64,

    /// NGL price as a fraction of the oil benchmark
    pub ngl_price_ratio: f64,
}

/// Realized $/unit prices attached to every forecast period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealizedPrices {
    pub oil: f64,
    pub gas: f64,
    pub ngl: f64,
}

impl PriceDeck {
    /// Collapse benchmark + differential into realized prices
    ///
    /// NGL prices off the oil benchmark itself, not the basis-adjusted price.
    pub fn realize(&self) -> RealizedPrices {
        RealizedPrices {
            oil: self.oil_price + self.oil_basis,
            gas: (self.gas_price + self.gas_basis) * self.btu_factor,
            ngl: self.oil_price * self.ngl_price_ratio,
        }
    }
}

impl Default for PriceDeck {
    fn default() -> Self {
        Self {
            oil_price: 80.00,
            oil_basis: -1.80,
            gas_price: 2.25,
            gas_basis: -0.280,
            btu_factor: 1.03,
            ngl_price_ratio: 0.50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_deck_realization() {
        let realized = PriceDeck::default().realize();

        assert_relative_eq!(realized.oil, 78.20, epsilon = 1e-12);
        assert_relative_eq!(realized.gas, (2.25 - 0.280) * 1.03, epsilon = 1e-12);
        assert_relative_eq!(realized.ngl, 40.00, epsilon = 1e-12);
    }

    #[test]
    fn test_ngl_ignores_oil_basis() {
        let deck = PriceDeck {
            oil_basis: -10.0,
            ..PriceDeck::default()
        };
        assert_relative_eq!(deck.realize().ngl, 40.00, epsilon = 1e-12);
    }
}
