//! Well parameter set: type curves, ownership, and timing

mod data;
pub mod loader;

pub use data::{Phase, TypeCurve, Ownership, Well};
pub use loader::load_wells;
