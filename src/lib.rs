//! Well Economics - Single-well reserves and economics evaluation engine
//!
//! This library provides:
//! - Hyperbolic (Arps) decline forecasting for oil, gas, and water phases
//! - Working-interest / net-revenue-interest production allocation
//! - Monthly revenue, operating-expense, tax, and capital cashflow buildup
//! - Economic-limit truncation and discounted cash-flow metrics
//! - Scenario framework for price-deck and discount-rate sensitivities

pub mod error;
pub mod well;
pub mod assumptions;
pub mod forecast;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::ConfigError;
pub use well::{Well, TypeCurve, Ownership};
pub use assumptions::{Assumptions, PriceDeck, FixedLoeSchedule, CapexSchedule};
pub use projection::{EconomicsEngine, EconomicsConfig, EvaluationResult, MonthlyRecord};
pub use scenario::ScenarioRunner;
