//! CSV target loader.
//!
//! # CSV format
//!
//! One row per target, in hunt order.  `color` may be left empty.
//!
//! ```csv
//! id,lat,lon,color
//! box1,6.985161867439368,81.07362372073608,#4CC3D9
//! box2,6.985462148939262,81.0734485580701,
//! ```
//!
//! The returned list is validated with [`validate_targets`] before it is
//! handed back, so duplicate ids and non-finite coordinates surface here
//! rather than at tracker construction.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, ConfigResult, Target, validate_targets};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TargetRecord {
    id:    String,
    lat:   f64,
    lon:   f64,
    #[serde(default)]
    color: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate targets from a CSV file.
pub fn load_targets_csv(path: &Path) -> ConfigResult<Vec<Target>> {
    let file = std::fs::File::open(path)
        .map_err(ConfigError::Io)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for target lists
/// embedded in the binary.
pub fn load_targets_reader<R: Read>(reader: R) -> ConfigResult<Vec<Target>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut targets = Vec::new();
    for (row, result) in csv_reader.deserialize::<TargetRecord>().enumerate() {
        let record = result.map_err(|e| ConfigError::Parse(format!("row {}: {e}", row + 1)))?;
        targets.push(Target {
            id:       record.id,
            position: hunt_core::GeoPoint::new(record.lat, record.lon),
            color:    record.color.filter(|c| !c.is_empty()),
        });
    }

    validate_targets(&targets)?;
    log::debug!("loaded {} targets", targets.len());
    Ok(targets)
}
