//! Curve generators — gamma and contrast lookup tables written as text.

pub mod formula;
pub mod table;

use tracing::{debug, info};

use crate::config::CurveConfig;
use crate::error::Result;

use table::LookupTable;

/// Generate the configured table and write it to `config.output_path`.
///
/// The output file is replaced wholesale; identical configs produce
/// byte-identical files.
pub fn generate_curve(config: &CurveConfig) -> Result<LookupTable> {
    let table = LookupTable::generate(config)?;
    debug!(
        name = %config.name,
        formula = %config.formula.describe(),
        last = ?table.row(u8::MAX),
        "computed lookup table"
    );

    table.save(&config.output_path, &config.header)?;
    info!(
        "Wrote {} ({} rows from {:?} to {:?})",
        config.output_path.display(),
        table.rows().len(),
        table.row(0),
        table.row(u8::MAX)
    );
    Ok(table)
}
