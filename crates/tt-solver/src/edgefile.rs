//! The legacy edge-file hand-off format.
//!
//! ```text
//! <num_vertices>, <sink_slot>
//! <u_slot>, <v_slot>, <weight>
//! ...
//! ```
//!
//! Comma+space separated, one trailing newline per line.  Weights use Rust's
//! shortest round-trip `f64` formatting, so write → read reproduces the edge
//! list exactly.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::engine::SlotEdge;
use crate::error::{SolverError, SolverResult};

/// Write the edge file consumed by an external Dijkstra engine.
pub fn write_edge_file(
    path: &Path,
    edges: &[SlotEdge],
    num_vertices: usize,
    sink: usize,
) -> SolverResult<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{num_vertices}, {sink}")?;
    for e in edges {
        writeln!(out, "{}, {}, {}", e.u, e.v, e.weight)?;
    }
    out.flush()?;
    Ok(())
}

/// Read an edge file back into `(edges, num_vertices, sink_slot)`.
pub fn read_edge_file(path: &Path) -> SolverResult<(Vec<SlotEdge>, usize, usize)> {
    let name = path.display().to_string();
    let malformed =
        |reason: String| SolverError::Malformed { what: format!("edge file {name}"), reason };

    let file = std::fs::File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .ok_or_else(|| malformed("empty file".to_string()))??;
    let (num_vertices, sink) = match split_fields(&header)[..] {
        [n, s] => (
            parse::<usize>(n, &malformed)?,
            parse::<usize>(s, &malformed)?,
        ),
        _ => return Err(malformed(format!("bad header {header:?}"))),
    };

    let mut edges = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match split_fields(&line)[..] {
            [u, v, w] => edges.push(SlotEdge {
                u: parse::<usize>(u, &malformed)?,
                v: parse::<usize>(v, &malformed)?,
                weight: parse::<f64>(w, &malformed)?,
            }),
            _ => return Err(malformed(format!("bad edge line {line:?}"))),
        }
    }
    Ok((edges, num_vertices, sink))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn parse<T: std::str::FromStr>(
    field: &str,
    malformed: &impl Fn(String) -> SolverError,
) -> SolverResult<T> {
    field
        .parse::<T>()
        .map_err(|_| malformed(format!("bad number {field:?}")))
}
