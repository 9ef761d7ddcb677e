//! uniform — smallest end-to-end demo of the travel-time solver.
//!
//! Synthesizes a uniform 1 km/s velocity model (so the expected travel time
//! is simply the chord length of the descent), runs the two-stage shortest
//! path for the reference station/source pair, and exports the fine-stage
//! path.  Swap the generated file for a real `MOD_H13` to run against an
//! actual regional model.

use std::path::PathBuf;

use anyhow::Result;

use tt_core::Location;
use tt_graph::{BuilderConfig, Extent};
use tt_model::VelocityModel;
use tt_path::ShortestPath;

/// Uniform 1 km/s model covering 119–122°E, 21–26°N, −10–60 km.
const MOD_H13_UNIFORM: &str = "\
0 0 2 2 2
119.0 122.0
21.0 26.0
-10.0 60.0
1.0 1.0
1.0 1.0
1.0 1.0
1.0 1.0
";

fn main() -> Result<()> {
    let dir: PathBuf = std::env::temp_dir().join("tt_uniform_demo");
    std::fs::create_dir_all(&dir)?;

    let model_file = dir.join("MOD_H13_uniform");
    std::fs::write(&model_file, MOD_H13_UNIFORM)?;
    let model = VelocityModel::from_path(&model_file)?;

    // The reference scenario: no coarse padding, one coarse cell per fine box.
    let config = BuilderConfig {
        extra_range: Extent::ZERO,
        ranges: Extent::new(0.01, 0.01, 1.0),
    };
    let driver = ShortestPath::with_config(&model, config);

    let sta = Location::new(120.0, 23.0, 0.0);
    let sou = Location::new(120.01, 23.01, 1.0);
    println!("station {sta}  →  source {sou}");

    let result = driver.run(sta, sou)?;
    println!("first-arrival travel time: {:.5} s", result.seconds);
    println!("fine-stage path ({} points):", result.path.len());
    for p in &result.path {
        println!("  {p}");
    }

    let out = dir.join("result.csv");
    result.export_path(&out)?;
    println!("path exported to {}", out.display());

    Ok(())
}
