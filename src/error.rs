//! Configuration error taxonomy
//!
//! Every invalid input is rejected before the forecast loop runs; computed
//! values are never checked after the fact.

use thiserror::Error;

use crate::well::Phase;

/// Errors raised while validating a well, its assumptions, or the run config
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A decline parameter that must be strictly positive is not
    #[error("{phase} type curve: {field} must be > 0, got {value}")]
    InvalidTypeCurve {
        phase: Phase,
        field: &'static str,
        value: f64,
    },

    /// Working interest outside (0, 1]
    #[error("working interest must be in (0, 1], got {0}")]
    InvalidWorkingInterest(f64),

    /// Royalty burden outside [0, 1)
    #[error("royalty must be in [0, 1), got {0}")]
    InvalidRoyalty(f64),

    /// Gas shrink outside [0, 1]
    #[error("gas shrink must be in [0, 1], got {0}")]
    InvalidShrink(f64),

    /// Negative NGL yield
    #[error("NGL yield must be >= 0 Bbls/MMcf, got {0}")]
    InvalidNglYield(f64),

    /// First production month must be a valid 1-indexed period
    #[error("first production month must be >= 1, got {0}")]
    InvalidFirstProdMonth(u32),

    /// Annual discount rate at or below -1200% makes the monthly base non-positive
    #[error("annual discount rate {0} is degenerate (monthly base would be <= 0)")]
    DegenerateDiscountRate(f64),

    /// Zero-length forecast horizon
    #[error("forecast horizon must be at least 1 month")]
    EmptyHorizon,

    /// Non-positive days per period
    #[error("days per month must be > 0, got {0}")]
    InvalidDaysPerMonth(f64),

    /// Fixed LOE tiers must cover contiguous, non-overlapping month ranges
    #[error("fixed LOE schedule has a gap or overlap at month {month}")]
    LoeScheduleGap { month: u32 },

    /// A schedule with no tiers cannot price any period
    #[error("fixed LOE schedule has no tiers")]
    LoeScheduleEmpty,

    /// The last tier must be open-ended so every later period has a cost
    #[error("fixed LOE schedule must end with an open-ended tier")]
    LoeScheduleTruncated,

    /// A tier with end_month before begin_month
    #[error("fixed LOE tier beginning at month {begin} ends at month {end}")]
    LoeTierInverted { begin: u32, end: u32 },

    /// Completion cannot precede drilling
    #[error("completion month {completion} precedes drill month {drill}")]
    CapexMonthOutOfOrder { drill: u32, completion: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = ConfigError::InvalidTypeCurve {
            phase: Phase::Gas,
            field: "qi",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("gas"));
        assert!(msg.contains("qi"));

        let err = ConfigError::LoeScheduleGap { month: 21 };
        assert!(err.to_string().contains("21"));
    }
}
