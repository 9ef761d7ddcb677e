//! The pseudo-bending travel-time oracle.
//!
//! An alternative to the graph search: a bundled native binary that traces a
//! bending ray between the two points.  The binary reads
//! `sta_location.txt` and `sou_location.txt` from its working directory and
//! writes the travel time to the first line of `RESULTS.txt`.
//!
//! The station file carries depth negated and in metres while the source
//! file keeps kilometres — an asymmetry inherited from the binary's input
//! convention, preserved verbatim.

use std::path::PathBuf;
use std::process::Command;

use tt_core::{Grid, Location, Stage};

use crate::error::{PathError, PathResult};

/// Wrapper around the `pseudo_bending` executable living in `dir`.
pub struct BendingOracle {
    dir: PathBuf,
}

impl BendingOracle {
    /// `dir` must contain the `pseudo_bending` binary; the location files
    /// and `RESULTS.txt` are exchanged inside it.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Travel time in seconds between the fine-grid-snapped endpoints.
    pub fn travel_time(&self, sta: Location, sou: Location) -> PathResult<f64> {
        let grid = Grid::global();
        let sta = grid.snap(sta, Stage::Fine)?;
        let sou = grid.snap(sou, Stage::Fine)?;

        std::fs::write(
            self.dir.join("sta_location.txt"),
            format!("{} {} {}", sta.lon, sta.lat, -sta.dep * 1000.0),
        )?;
        std::fs::write(
            self.dir.join("sou_location.txt"),
            format!("{} {} {}", sou.lon, sou.lat, sou.dep),
        )?;

        let program = self.dir.join("pseudo_bending");
        let output = Command::new(&program).current_dir(&self.dir).output()?;
        if !output.status.success() {
            return Err(PathError::External {
                tool: program.display().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let results = std::fs::read_to_string(self.dir.join("RESULTS.txt"))?;
        let first = results.lines().next().unwrap_or("");
        first.trim().parse::<f64>().map_err(|_| PathError::Malformed {
            what: "RESULTS.txt".to_string(),
            reason: format!("bad travel time {first:?}"),
        })
    }
}
