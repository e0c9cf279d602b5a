//! CSV-based well inventory loader
//!
//! Loads flat well parameter rows from data/wells.csv

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::{Ownership, TypeCurve, Well};

/// Default path to the well inventory
pub const DEFAULT_WELLS_PATH: &str = "data/wells.csv";

/// Load wells from a CSV inventory
///
/// Expected columns:
/// well_id,name,qi_oil,b_oil,di_oil,qi_gas,b_gas,di_gas,qi_water,b_water,
/// di_water,ngl_yield,shrink,wi,royalty,first_prod_month
pub fn load_wells(path: &Path) -> Result<Vec<Well>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut wells = Vec::new();

    for result in reader.records() {
        let record = result?;

        let well = Well::new(
            record[0].parse()?,
            record[1].to_string(),
            TypeCurve::new(record[2].parse()?, record[3].parse()?, record[4].parse()?),
            TypeCurve::new(record[5].parse()?, record[6].parse()?, record[7].parse()?),
            TypeCurve::new(record[8].parse()?, record[9].parse()?, record[10].parse()?),
            record[11].parse()?,
            record[12].parse()?,
            Ownership::new(record[13].parse()?, record[14].parse()?),
            record[15].parse()?,
        );
        well.validate()?;
        wells.push(well);
    }

    log::info!("loaded {} wells from {}", wells.len(), path.display());
    Ok(wells)
}

/// Load wells from the default inventory location
pub fn load_default_wells() -> Result<Vec<Well>, Box<dyn Error>> {
    load_wells(Path::new(DEFAULT_WELLS_PATH))
}
