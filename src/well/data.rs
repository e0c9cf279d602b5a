//! Well data structures matching the evaluation input format

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Production phase of a decline-fit stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Oil,
    Gas,
    Water,
}

impl Phase {
    /// Lowercase name used in error messages and CSV headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Oil => "oil",
            Phase::Gas => "gas",
            Phase::Water => "water",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arps hyperbolic decline parameters for one phase
///
/// Rate at month index t (zero-based) is `qi / (1 + b*di*t)^(1/b)`.
/// No terminal-decline (Dmin) switch is modeled: the curve stays hyperbolic
/// for the entire horizon, which overstates the far tail relative to type
/// curves that flip to exponential decline at a minimum rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeCurve {
    /// Initial 24-hr rate (Bblspd for liquids, Mcfpd for gas)
    pub qi: f64,

    /// Hyperbolic exponent
    pub b: f64,

    /// Initial nominal decline rate
    pub di: f64,
}

impl TypeCurve {
    pub fn new(qi: f64, b: f64, di: f64) -> Self {
        Self { qi, b, di }
    }

    /// Reject non-positive parameters before any forecasting happens
    pub fn validate(&self, phase: Phase) -> Result<(), ConfigError> {
        let checks = [("qi", self.qi), ("b", self.b), ("di", self.di)];
        for (field, value) in checks {
            if value <= 0.0 {
                return Err(ConfigError::InvalidTypeCurve { phase, field, value });
            }
        }
        Ok(())
    }
}

/// Working interest and royalty burden
///
/// NRI is always derived from these two fractions, never stored, so the
/// `nri = wi * (1 - royalty)` invariant cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ownership {
    /// Working interest fraction (1.00 = 100%)
    pub wi: f64,

    /// Royalty fraction burdening the working interest
    pub royalty: f64,
}

impl Ownership {
    pub fn new(wi: f64, royalty: f64) -> Self {
        Self { wi, royalty }
    }

    /// Net revenue interest
    pub fn nri(&self) -> f64 {
        self.wi * (1.0 - self.royalty)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wi <= 0.0 || self.wi > 1.0 {
            return Err(ConfigError::InvalidWorkingInterest(self.wi));
        }
        if self.royalty < 0.0 || self.royalty >= 1.0 {
            return Err(ConfigError::InvalidRoyalty(self.royalty));
        }
        Ok(())
    }
}

/// A single well's evaluation inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Well {
    /// Unique well identifier
    pub well_id: u32,

    /// Display name (lease-well label)
    pub name: String,

    /// Oil decline parameters (Bblspd)
    pub oil: TypeCurve,

    /// Gas decline parameters (Mcfpd)
    pub gas: TypeCurve,

    /// Water decline parameters (Bblspd equivalent, cost stream only)
    pub water: TypeCurve,

    /// NGL recovery from gross gas (Bbls/MMcf)
    pub ngl_yield: f64,

    /// Fraction of gas volume lost to processing shrink
    pub shrink: f64,

    /// Ownership fractions
    pub ownership: Ownership,

    /// Calendar month (1-indexed period) that receives the first decline volume
    pub first_prod_month: u32,
}

impl Well {
    pub fn new(
        well_id: u32,
        name: impl Into<String>,
        oil: TypeCurve,
        gas: TypeCurve,
        water: TypeCurve,
        ngl_yield: f64,
        shrink: f64,
        ownership: Ownership,
        first_prod_month: u32,
    ) -> Self {
        Self {
            well_id,
            name: name.into(),
            oil,
            gas,
            water,
            ngl_yield,
            shrink,
            ownership,
            first_prod_month,
        }
    }

    /// Reference single-well type curve used by the CLI and tests
    pub fn reference_type_well() -> Self {
        Self::new(
            1001,
            "Type Well 1001",
            TypeCurve::new(490.0, 0.90, 0.943),
            TypeCurve::new(975.0, 0.95, 0.48),
            TypeCurve::new(1200.0, 1.001, 0.805),
            67.0,  // Bbls/MMcf
            0.26,  // gas shrink
            Ownership::new(1.00, 0.16),
            3,
        )
    }

    /// Validate every phase curve and fraction before a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.oil.validate(Phase::Oil)?;
        self.gas.validate(Phase::Gas)?;
        self.water.validate(Phase::Water)?;
        self.ownership.validate()?;
        if self.shrink < 0.0 || self.shrink > 1.0 {
            return Err(ConfigError::InvalidShrink(self.shrink));
        }
        if self.ngl_yield < 0.0 {
            return Err(ConfigError::InvalidNglYield(self.ngl_yield));
        }
        if self.first_prod_month == 0 {
            return Err(ConfigError::InvalidFirstProdMonth(self.first_prod_month));
        }
        Ok(())
    }
}
