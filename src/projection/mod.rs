//! Monthly cash-flow projection, economic-limit truncation, and discounting

mod cashflows;
mod discount;
mod engine;
mod irr;

pub use cashflows::{MonthlyRecord, TotalsRecord, EvaluationResult, EvaluationSummary};
pub use discount::DiscountCurve;
pub use engine::{EconomicsEngine, EconomicsConfig};
pub use irr::annual_rate_of_return;
