//! Drilling and completion capital assumptions
//!
//! Each event is a one-time gross charge placed at a configured calendar
//! month; the engine scales amounts by working interest.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A single capital charge firing exactly once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapexEvent {
    /// 1-indexed forecast month the charge lands in
    pub month: u32,
    /// Gross amount in $000s
    pub amount: f64,
}

/// The drilling and completion pair for one well
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapexSchedule {
    pub drilling: CapexEvent,
    pub completion: CapexEvent,
}

impl CapexSchedule {
    pub fn new(drilling: CapexEvent, completion: CapexEvent) -> Self {
        Self { drilling, completion }
    }

    /// Gross (drilling, completion) charges for a period; zero off-impulse
    pub fn gross_at(&self, period: u32) -> (f64, f64) {
        let drilling = if period == self.drilling.month {
            self.drilling.amount
        } else {
            0.0
        };
        let completion = if period == self.completion.month {
            self.completion.amount
        } else {
            0.0
        };
        (drilling, completion)
    }

    /// Month after which sustained negative cash flow ends economic life
    pub fn completion_month(&self) -> u32 {
        self.completion.month
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.completion.month < self.drilling.month {
            return Err(ConfigError::CapexMonthOutOfOrder {
                drill: self.drilling.month,
                completion: self.completion.month,
            });
        }
        Ok(())
    }
}

impl Default for CapexSchedule {
    fn default() -> Self {
        Self {
            drilling: CapexEvent { month: 1, amount: 1600.0 },
            completion: CapexEvent { month: 2, amount: 2200.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_shot_impulses() {
        let capex = CapexSchedule::default();

        assert_eq!(capex.gross_at(1), (1600.0, 0.0));
        assert_eq!(capex.gross_at(2), (0.0, 2200.0));
        assert_eq!(capex.gross_at(3), (0.0, 0.0));
        assert_eq!(capex.gross_at(360), (0.0, 0.0));
    }

    #[test]
    fn test_same_month_events_both_fire() {
        let capex = CapexSchedule::new(
            CapexEvent { month: 2, amount: 1600.0 },
            CapexEvent { month: 2, amount: 2200.0 },
        );
        assert_eq!(capex.gross_at(2), (1600.0, 2200.0));
        assert!(capex.validate().is_ok());
    }

    #[test]
    fn test_completion_before_drill_rejected() {
        let capex = CapexSchedule::new(
            CapexEvent { month: 3, amount: 1600.0 },
            CapexEvent { month: 1, amount: 2200.0 },
        );
        assert_eq!(
            capex.validate(),
            Err(ConfigError::CapexMonthOutOfOrder { drill: 3, completion: 1 })
        );
    }
}
