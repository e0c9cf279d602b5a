//! Gross production forecasting: decline curves and ownership allocation

mod decline;
mod allocate;

pub use decline::{forecast_volumes, ngl_from_gas};
pub use allocate::{shift_to_first_prod, PhaseStreams};
