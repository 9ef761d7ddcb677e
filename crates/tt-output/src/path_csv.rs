//! Fine-stage path export and the matching per-vertex weights reader.
//!
//! # Path file
//!
//! ```text
//!                LON,                LAT,                DEP
//! 120.000000000000, 23.000000000000, 0.000000000000
//! ...
//! ```
//!
//! Rows run from the station down to the source.  The fixed-width,
//! 12-decimal layout matches the historical exports byte for byte.
//!
//! # Weights file
//!
//! Same layout plus a fourth `TIME` column holding the travel time in
//! seconds.  The station sample comes first.  The reader converts each row
//! to its fine-grid index, ready for [`TravelTimeStore::import`] when the
//! `sqlite` feature is enabled.
//!
//! [`TravelTimeStore::import`]: crate::store::TravelTimeStore::import

use std::io::{BufWriter, Write};
use std::path::Path;

use tt_core::{Grid, Location, Stage};

use crate::error::{OutputError, OutputResult};

/// Write the shortest-path coordinates in the legacy fixed-width layout.
pub fn write_path(path: &Path, points: &[Location]) -> OutputResult<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{:>18}, {:>18}, {:>18}", "LON", "LAT", "DEP")?;
    for p in points {
        writeln!(out, "{:>6.12}, {:>6.12}, {:>6.12}", p.lon, p.lat, p.dep)?;
    }
    out.flush()?;
    Ok(())
}

/// Per-vertex travel times read back from a weights CSV.
#[derive(Debug)]
pub struct PathWeights {
    /// `(fine grid index, travel time seconds)` per row, file order.
    pub entries: Vec<(i64, f64)>,
    /// Fine-grid index of the first row — the station sample.
    pub station_index: i64,
}

/// Read a `(lon, lat, dep, time)` weights CSV into fine-grid index/time
/// pairs.
pub fn read_weights_csv(path: &Path) -> OutputResult<PathWeights> {
    let name = path.display().to_string();
    let malformed =
        |reason: String| OutputError::Malformed { file: name.clone(), reason };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let grid = Grid::global();
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            return Err(malformed(format!("expected 4 fields, found {}", record.len())));
        }
        let mut fields = [0.0f64; 4];
        for (slot, raw) in fields.iter_mut().zip(record.iter()) {
            *slot = raw
                .parse::<f64>()
                .map_err(|_| malformed(format!("bad number {raw:?}")))?;
        }
        let loc = Location::new(fields[0], fields[1], fields[2]);
        entries.push((grid.norm_index(loc, Stage::Fine)?, fields[3]));
    }

    let station_index = entries
        .first()
        .map(|(idx, _)| *idx)
        .ok_or_else(|| malformed("no data rows".to_string()))?;
    Ok(PathWeights { entries, station_index })
}
