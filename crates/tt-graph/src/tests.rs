//! Unit tests for graph construction.
//!
//! All tests run against a small uniform-speed model (1 km/s) so edge
//! weights equal chord lengths and counts are easy to reason about.

use std::io::Cursor;

use tt_model::VelocityModel;

use crate::builder::BuilderConfig;
use crate::corridor::Extent;

/// Uniform 1 km/s model covering 119–122°E, 21–26°N, −10–60 km.
fn uniform_model() -> VelocityModel {
    let text = "\
0 0 2 2 2
119.0 122.0
21.0 26.0
-10.0 60.0
1.0 1.0
1.0 1.0
1.0 1.0
1.0 1.0
";
    VelocityModel::from_reader(Cursor::new(text), "UNIFORM").unwrap()
}

/// The corridor sizing used by the reference scenarios: no coarse padding,
/// one coarse cell per fine box.
fn tight_config() -> BuilderConfig {
    BuilderConfig {
        extra_range: Extent::ZERO,
        ranges: Extent::new(0.01, 0.01, 1.0),
    }
}

#[cfg(test)]
mod offsets {
    use tt_core::{Grid, Stage};

    use crate::builder::offsets;

    #[test]
    fn coarse_count_and_members() {
        let g = Grid::global();
        let num_lon = g.num_lon(Stage::Coarse);
        let num_lat = g.num_lat(Stage::Coarse);
        let incs = offsets(Stage::Coarse, num_lon, num_lat);
        assert_eq!(incs.len(), 17);
        assert!(!incs.contains(&0));
        for delta in [1, -1, num_lon, -num_lon, num_lon * num_lat, num_lon * num_lat + num_lon + 1] {
            assert!(incs.contains(&delta), "missing {delta}");
        }
        // No upward (negative-depth) neighbors in the coarse sweep.
        assert!(incs.iter().all(|&d| d > -2 * num_lon));
    }

    #[test]
    fn fine_count_and_members() {
        let g = Grid::global();
        let num_lon = g.num_lon(Stage::Fine);
        let num_lat = g.num_lat(Stage::Fine);
        let incs = offsets(Stage::Fine, num_lon, num_lat);
        assert_eq!(incs.len(), 74);
        assert!(!incs.contains(&0));
        let plane = num_lon * num_lat;
        for delta in [2, -2, 2 * num_lon, 2 * plane, 2 * plane + 2 * num_lon + 2] {
            assert!(incs.contains(&delta), "missing {delta}");
        }
    }
}

#[cfg(test)]
mod edge_set {
    use crate::EdgeSet;

    #[test]
    fn dedup_by_unordered_pair() {
        let mut edges = EdgeSet::new();
        assert!(edges.insert(7, 3, 1.5));
        assert!(!edges.insert(7, 3, 2.5));
        assert!(!edges.insert(3, 7, 2.5));
        assert_eq!(edges.len(), 1);
        let e = edges.iter().next().unwrap();
        // Canonical form, first weight wins.
        assert_eq!((e.u, e.v), (3, 7));
        assert_eq!(e.weight, 1.5);
    }

    #[test]
    fn contains_pair_is_symmetric() {
        let mut edges = EdgeSet::new();
        edges.insert(10, 20, 0.1);
        assert!(edges.contains_pair(10, 20));
        assert!(edges.contains_pair(20, 10));
        assert!(!edges.contains_pair(10, 21));
    }

    #[test]
    fn vertex_indices_sorted_unique() {
        let mut edges = EdgeSet::new();
        edges.insert(5, 2, 0.0);
        edges.insert(2, 9, 0.0);
        edges.insert(9, 5, 0.0);
        assert_eq!(edges.vertex_indices(), vec![2, 5, 9]);
    }
}

#[cfg(test)]
mod boundary {
    use tt_core::{Grid, Location, Stage};

    use crate::corridor::BoundaryBox;

    #[test]
    fn rejects_row_and_plane_wrap() {
        let g = Grid::global();
        let lo = Location::new(120.0, 23.0, 0.0);
        let hi = Location::new(120.02, 23.02, 2.0);
        let bnd = BoundaryBox::new(g, lo, hi, Stage::Coarse).unwrap();
        let num_lon = g.num_lon(Stage::Coarse);
        let num_lat = g.num_lat(Stage::Coarse);

        // Corner ordering invariant.
        assert!(bnd.idx_min <= bnd.idx_lon_max);
        assert!(bnd.idx_lon_max <= bnd.idx_lon_lat_max);
        assert!(bnd.idx_lon_lat_max <= bnd.idx_max);

        // Everything inside the 3×3×3 cuboid is accepted.
        for dl in 0..3 {
            for da in 0..3 {
                for dd in 0..3 {
                    let idx = bnd.idx_min + dl + da * num_lon + dd * num_lon * num_lat;
                    assert!(bnd.contains(idx, num_lon, num_lat));
                }
            }
        }

        // One gap east of the box: inside the linear span, outside the row.
        let east = g.norm_index(Location::new(120.03, 23.0, 0.0), Stage::Coarse).unwrap();
        assert!(east > bnd.idx_min && east < bnd.idx_max);
        assert!(!bnd.contains(east, num_lon, num_lat));

        // One gap north of the box: rejected by the plane clause.
        let north = g.norm_index(Location::new(120.0, 23.03, 0.0), Stage::Coarse).unwrap();
        assert!(!bnd.contains(north, num_lon, num_lat));

        // Below the deepest plane: rejected by the linear clause.
        let deep = g.norm_index(Location::new(120.0, 23.0, 3.0), Stage::Coarse).unwrap();
        assert!(!bnd.contains(deep, num_lon, num_lat));
    }
}

#[cfg(test)]
mod coarse {
    use tt_core::{Grid, Location, Stage};

    use crate::{GraphBuilder, GraphError};

    use super::{tight_config, uniform_model};

    fn loc(lon: f64, lat: f64, dep: f64) -> Location {
        Location::new(lon, lat, dep)
    }

    #[test]
    fn unit_cell_vertex_and_edge_count() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let edges = builder
            .build(loc(120.0, 23.0, 0.0), loc(120.01, 23.01, 1.0), Stage::Coarse, None)
            .unwrap();
        // A 2×2×2 cell: 8 vertices, all 28 unordered pairs are neighbors.
        assert_eq!(edges.vertex_indices().len(), 8);
        assert_eq!(edges.len(), 28);
    }

    #[test]
    fn single_latitude_row() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let edges = builder
            .build(loc(120.0, 23.0, 0.0), loc(120.01, 23.0, 1.0), Stage::Coarse, None)
            .unwrap();
        // 2 lon × 1 lat × 2 dep patch: 4 vertices, 6 edges.
        assert_eq!(edges.vertex_indices().len(), 4);
        assert_eq!(edges.len(), 6);
    }

    #[test]
    fn edges_are_simple_and_non_negative() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let edges = builder
            .build(loc(120.0, 23.0, 0.0), loc(120.02, 23.02, 2.0), Stage::Coarse, None)
            .unwrap();
        for e in &edges {
            assert!(e.u < e.v);
            assert!(e.weight >= 0.0);
        }
    }

    #[test]
    fn radial_edge_weight_is_depth_gap() {
        let g = Grid::global();
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let edges = builder
            .build(loc(120.0, 23.0, 0.0), loc(120.01, 23.01, 1.0), Stage::Coarse, None)
            .unwrap();
        let top = g.norm_index(loc(120.0, 23.0, 0.0), Stage::Coarse).unwrap();
        let bottom = g.norm_index(loc(120.0, 23.0, 1.0), Stage::Coarse).unwrap();
        let e = edges
            .iter()
            .find(|e| (e.u, e.v) == (top.min(bottom), top.max(bottom)))
            .expect("radial edge present");
        // Uniform 1 km/s: weight equals the 1 km chord.
        assert!((e.weight - 1.0).abs() < 1e-9, "got {}", e.weight);
    }

    #[test]
    fn coincident_endpoints_rejected() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let p = loc(120.0, 23.0, 0.0);
        assert!(matches!(
            builder.build(p, p, Stage::Coarse, None),
            Err(GraphError::CoincidentEndpoints)
        ));
    }

    #[test]
    fn coarse_rejects_corridor_path() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let path = [loc(120.0, 23.0, 0.0)];
        assert!(matches!(
            builder.build(loc(120.0, 23.0, 0.0), loc(120.01, 23.0, 1.0), Stage::Coarse, Some(&path)),
            Err(GraphError::UnexpectedPath)
        ));
    }

    #[test]
    fn out_of_range_station_surfaces() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        assert!(matches!(
            builder.build(loc(200.0, 23.0, 0.0), loc(120.01, 23.0, 1.0), Stage::Coarse, None),
            Err(GraphError::Grid(_))
        ));
    }

    #[test]
    fn corridor_outside_model_yields_no_edges() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        // Valid grid region, but far outside the Taiwan-regional axis span:
        // every vertex has infinite slowness, so every edge is dropped.
        let edges = builder
            .build(loc(0.0, 0.0, 0.0), loc(0.01, 0.01, 1.0), Stage::Coarse, None)
            .unwrap();
        assert!(edges.is_empty());
    }
}

#[cfg(test)]
mod fine {
    use tt_core::{Grid, Location, Stage};

    use crate::{GraphBuilder, GraphError};

    use super::{tight_config, uniform_model};

    fn loc(lon: f64, lat: f64, dep: f64) -> Location {
        Location::new(lon, lat, dep)
    }

    #[test]
    fn requires_corridor_path() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let sta = loc(120.0, 23.0, 0.0);
        let sou = loc(120.01, 23.01, 1.0);
        assert!(matches!(
            builder.build(sta, sou, Stage::Fine, None),
            Err(GraphError::EmptyCorridor)
        ));
        assert!(matches!(
            builder.build(sta, sou, Stage::Fine, Some(&[])),
            Err(GraphError::EmptyCorridor)
        ));
    }

    #[test]
    fn corridor_edge_count_bound() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let sta = loc(120.0, 23.0, 0.0);
        let sou = loc(120.01, 23.01, 1.0);
        let path = [sou, sta];
        let edges = builder.build(sta, sou, Stage::Fine, Some(&path)).unwrap();
        assert!(!edges.is_empty());
        // Each 0.01° × 0.01° × 1 km box holds 5×5×5 fine vertices; the edge
        // count is bounded by vertices × |incs|, and well below it once
        // boundary and dedup effects kick in.
        let vertex_bound = 2 * 5 * 5 * 5;
        assert!(edges.vertex_indices().len() <= vertex_bound);
        assert!(edges.len() <= vertex_bound * 74);
    }

    #[test]
    fn overlapping_boxes_do_not_duplicate() {
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let sta = loc(120.0, 23.0, 0.0);
        let sou = loc(120.01, 23.01, 1.0);
        let single = builder.build(sta, sou, Stage::Fine, Some(&[sta])).unwrap();
        let doubled = builder.build(sta, sou, Stage::Fine, Some(&[sta, sta])).unwrap();
        assert_eq!(single.len(), doubled.len());
    }

    #[test]
    fn station_connects_toward_the_source() {
        let g = Grid::global();
        let model = uniform_model();
        let builder = GraphBuilder::with_config(&model, tight_config());
        let sta = loc(120.0, 23.0, 0.0);
        let sou = loc(120.01, 23.01, 1.0);
        let edges = builder.build(sta, sou, Stage::Fine, Some(&[sou, sta])).unwrap();
        let idx_sta = g.norm_index(sta, Stage::Fine).unwrap();
        // The (+2, +2, +2) fine offset from the station — the first hop of
        // the straight-line descent — must be present.
        let num_lon = g.num_lon(Stage::Fine);
        let plane = num_lon * g.num_lat(Stage::Fine);
        let mid = idx_sta + 2 + 2 * num_lon + 2 * plane;
        assert!(edges.contains_pair(idx_sta, mid));
    }
}
