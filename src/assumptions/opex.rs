//! Operating expense assumptions
//!
//! Fixed LOE steps down through contiguous month tiers as the well ages off
//! artificial lift and workover-heavy early life; variable LOE and GCP are
//! per-unit charges on the corresponding production streams.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One fixed-LOE tier covering `[begin_month, end_month]` inclusive
///
/// `end_month = None` marks the open-ended tail tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoeTier {
    pub begin_month: u32,
    pub end_month: Option<u32>,
    /// Monthly cost in $000s, gross (the engine scales by working interest)
    pub monthly_cost: f64,
}

impl LoeTier {
    fn contains(&self, period: u32) -> bool {
        period >= self.begin_month && self.end_month.map_or(true, |end| period <= end)
    }
}

/// Ordered fixed-LOE tiers with an open-ended tail
///
/// Tier selection is a priority chain in tier order; a period before the
/// first tier's begin month carries no fixed LOE. Construction rejects
/// gaps, overlaps, and a bounded final tier, so no period can ever match
/// two tiers or fall between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLoeSchedule {
    tiers: Vec<LoeTier>,
}

impl FixedLoeSchedule {
    /// Build from explicit tiers, validating contiguity
    pub fn from_tiers(tiers: Vec<LoeTier>) -> Result<Self, ConfigError> {
        if tiers.is_empty() {
            return Err(ConfigError::LoeScheduleEmpty);
        }

        for (i, tier) in tiers.iter().enumerate() {
            let is_last = i == tiers.len() - 1;
            match tier.end_month {
                None if !is_last => {
                    // An open-ended tier anywhere but the tail would shadow
                    // every tier after it
                    return Err(ConfigError::LoeScheduleGap {
                        month: tier.begin_month,
                    });
                }
                None => {}
                Some(end) => {
                    if end < tier.begin_month {
                        return Err(ConfigError::LoeTierInverted {
                            begin: tier.begin_month,
                            end,
                        });
                    }
                    if is_last {
                        return Err(ConfigError::LoeScheduleTruncated);
                    }
                    let next_begin = tiers[i + 1].begin_month;
                    if next_begin != end + 1 {
                        return Err(ConfigError::LoeScheduleGap { month: next_begin });
                    }
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Build from `(monthly_cost, duration_months)` runs anchored at the
    /// first production month, plus the open-ended tail cost
    pub fn from_durations(
        first_prod_month: u32,
        runs: &[(f64, u32)],
        tail_cost: f64,
    ) -> Result<Self, ConfigError> {
        let mut tiers = Vec::with_capacity(runs.len() + 1);
        let mut begin = first_prod_month;

        for &(cost, duration) in runs {
            let end = begin + duration - 1;
            tiers.push(LoeTier {
                begin_month: begin,
                end_month: Some(end),
                monthly_cost: cost,
            });
            begin = end + 1;
        }
        tiers.push(LoeTier {
            begin_month: begin,
            end_month: None,
            monthly_cost: tail_cost,
        });

        Self::from_tiers(tiers)
    }

    /// Gross monthly fixed LOE for a period, zero before the first tier
    pub fn monthly_cost(&self, period: u32) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.contains(period))
            .map(|tier| tier.monthly_cost)
            .unwrap_or(0.0)
    }

    pub fn tiers(&self) -> &[LoeTier] {
        &self.tiers
    }
}

/// Per-unit variable LOE rates; a zero rate disables that term
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableLoeRates {
    /// $/Bbl on WI oil
    pub oil: f64,
    /// $/Mcf on WI gas
    pub gas: f64,
    /// $/Bbl on WI water
    pub water: f64,
}

/// All recurring operating-cost assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpexAssumptions {
    pub fixed_loe: FixedLoeSchedule,
    pub variable_loe: VariableLoeRates,
    /// Gathering, compression, and processing, $/net Mcf
    pub gcp_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_schedule() -> FixedLoeSchedule {
        // (3,20) 9.5 / (21,32) 8.0 / (33,62) 7.7 / (63,inf) 4.0
        FixedLoeSchedule::from_durations(3, &[(9.5, 18), (8.0, 12), (7.7, 30)], 4.0).unwrap()
    }

    #[test]
    fn test_tier_bounds_from_durations() {
        let schedule = reference_schedule();
        let tiers = schedule.tiers();

        assert_eq!(tiers.len(), 4);
        assert_eq!((tiers[0].begin_month, tiers[0].end_month), (3, Some(20)));
        assert_eq!((tiers[1].begin_month, tiers[1].end_month), (21, Some(32)));
        assert_eq!((tiers[2].begin_month, tiers[2].end_month), (33, Some(62)));
        assert_eq!((tiers[3].begin_month, tiers[3].end_month), (63, None));
    }

    #[test]
    fn test_tier_selection() {
        let schedule = reference_schedule();

        // Before first production: no fixed LOE
        assert_relative_eq!(schedule.monthly_cost(1), 0.0);
        assert_relative_eq!(schedule.monthly_cost(2), 0.0);

        // Boundaries land in the right tier
        assert_relative_eq!(schedule.monthly_cost(3), 9.5);
        assert_relative_eq!(schedule.monthly_cost(20), 9.5);
        assert_relative_eq!(schedule.monthly_cost(21), 8.0);
        assert_relative_eq!(schedule.monthly_cost(25), 8.0);
        assert_relative_eq!(schedule.monthly_cost(32), 8.0);
        assert_relative_eq!(schedule.monthly_cost(33), 7.7);
        assert_relative_eq!(schedule.monthly_cost(62), 7.7);

        // Open-ended tail
        assert_relative_eq!(schedule.monthly_cost(63), 4.0);
        assert_relative_eq!(schedule.monthly_cost(360), 4.0);
    }

    #[test]
    fn test_gap_rejected() {
        let tiers = vec![
            LoeTier { begin_month: 3, end_month: Some(20), monthly_cost: 9.5 },
            LoeTier { begin_month: 22, end_month: None, monthly_cost: 4.0 },
        ];
        assert_eq!(
            FixedLoeSchedule::from_tiers(tiers),
            Err(ConfigError::LoeScheduleGap { month: 22 })
        );
    }

    #[test]
    fn test_overlap_rejected() {
        let tiers = vec![
            LoeTier { begin_month: 3, end_month: Some(20), monthly_cost: 9.5 },
            LoeTier { begin_month: 18, end_month: None, monthly_cost: 4.0 },
        ];
        assert!(FixedLoeSchedule::from_tiers(tiers).is_err());
    }

    #[test]
    fn test_bounded_tail_rejected() {
        let tiers = vec![
            LoeTier { begin_month: 3, end_month: Some(20), monthly_cost: 9.5 },
        ];
        assert_eq!(
            FixedLoeSchedule::from_tiers(tiers),
            Err(ConfigError::LoeScheduleTruncated)
        );
    }

    #[test]
    fn test_empty_and_inverted_rejected() {
        assert_eq!(
            FixedLoeSchedule::from_tiers(Vec::new()),
            Err(ConfigError::LoeScheduleEmpty)
        );

        let tiers = vec![
            LoeTier { begin_month: 10, end_month: Some(5), monthly_cost: 9.5 },
            LoeTier { begin_month: 6, end_month: None, monthly_cost: 4.0 },
        ];
        assert_eq!(
            FixedLoeSchedule::from_tiers(tiers),
            Err(ConfigError::LoeTierInverted { begin: 10, end: 5 })
        );
    }
}
