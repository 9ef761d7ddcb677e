//! Integration tests for tt-output.

#[cfg(test)]
mod path_file {
    use tempfile::TempDir;

    use tt_core::Location;

    use crate::path_csv::write_path;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn reference_path() -> Vec<Location> {
        vec![
            Location::new(120.0, 23.0, 0.0),
            Location::new(120.005, 23.005, 0.5),
            Location::new(120.01, 23.01, 1.0),
        ]
    }

    #[test]
    fn header_and_row_layout() {
        let dir = tmp();
        let file = dir.path().join("result.csv");
        write_path(&file, &reference_path()).unwrap();

        let text = std::fs::read_to_string(&file).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "               LON,                LAT,                DEP"
        );
        // Station first…
        let first = lines.next().unwrap();
        assert!(first.starts_with("120."), "got {first:?}");
        // …source last, with the full 12-decimal depth field.
        let last = text.lines().last().unwrap();
        assert!(last.ends_with("1.000000000000"), "got {last:?}");
    }

    #[test]
    fn row_count_matches_path() {
        let dir = tmp();
        let file = dir.path().join("result.csv");
        write_path(&file, &reference_path()).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        assert_eq!(text.lines().count(), 1 + reference_path().len());
    }

    #[test]
    fn empty_path_writes_header_only() {
        let dir = tmp();
        let file = dir.path().join("result.csv");
        write_path(&file, &[]).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

#[cfg(test)]
mod weights_file {
    use tempfile::TempDir;

    use tt_core::{Grid, Location, Stage};

    use crate::path_csv::read_weights_csv;
    use crate::OutputError;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    const WEIGHTS: &str = "\
               LON,                LAT,                DEP,               TIME
120.000000000000, 23.000000000000, 0.000000000000, 0.000000000000
120.005000000000, 23.005000000000, 0.500000000000, 0.905149867697
120.010000000000, 23.010000000000, 1.000000000000, 1.810240055517
";

    #[test]
    fn rows_become_fine_indices() {
        let dir = tmp();
        let file = dir.path().join("weights.csv");
        std::fs::write(&file, WEIGHTS).unwrap();

        let weights = read_weights_csv(&file).unwrap();
        assert_eq!(weights.entries.len(), 3);

        let grid = Grid::global();
        let idx_sta = grid
            .norm_index(Location::new(120.0, 23.0, 0.0), Stage::Fine)
            .unwrap();
        assert_eq!(weights.station_index, idx_sta);
        assert_eq!(weights.entries[0], (idx_sta, 0.0));

        let idx_sou = grid
            .norm_index(Location::new(120.01, 23.01, 1.0), Stage::Fine)
            .unwrap();
        assert_eq!(weights.entries[2].0, idx_sou);
        assert!((weights.entries[2].1 - 1.810240055517).abs() < 1e-12);
    }

    #[test]
    fn wrong_field_count_rejected() {
        let dir = tmp();
        let file = dir.path().join("weights.csv");
        std::fs::write(&file, "LON, LAT, DEP\n120.0, 23.0, 0.0\n").unwrap();
        assert!(matches!(
            read_weights_csv(&file),
            Err(OutputError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_body_rejected() {
        let dir = tmp();
        let file = dir.path().join("weights.csv");
        std::fs::write(&file, "LON, LAT, DEP, TIME\n").unwrap();
        assert!(matches!(
            read_weights_csv(&file),
            Err(OutputError::Malformed { .. })
        ));
    }
}

// ── SQLite store tests ────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod store {
    use tempfile::TempDir;

    use tt_core::Location;

    use crate::store::TravelTimeStore;
    use crate::OutputError;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn import_then_lookup() {
        let dir = tmp();
        let mut store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        store.import(42, &[(7, 1.5), (8, 2.5)]).unwrap();
        assert_eq!(store.lookup_index(42, 7).unwrap(), Some(1.5));
        assert_eq!(store.lookup_index(42, 8).unwrap(), Some(2.5));
        assert_eq!(store.lookup_index(42, 9).unwrap(), None);
    }

    #[test]
    fn collision_keeps_minimum() {
        let dir = tmp();
        let mut store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        store.import(42, &[(7, 2.5)]).unwrap();
        store.import(42, &[(7, 1.5)]).unwrap();
        assert_eq!(store.lookup_index(42, 7).unwrap(), Some(1.5));
        // A larger re-import does not overwrite the better time.
        store.import(42, &[(7, 9.0)]).unwrap();
        assert_eq!(store.lookup_index(42, 7).unwrap(), Some(1.5));
    }

    #[test]
    fn stations_do_not_share_tables() {
        let dir = tmp();
        let mut store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        store.import(1, &[(7, 1.0)]).unwrap();
        store.import(2, &[(7, 2.0)]).unwrap();
        assert_eq!(store.lookup_index(1, 7).unwrap(), Some(1.0));
        assert_eq!(store.lookup_index(2, 7).unwrap(), Some(2.0));
    }

    #[test]
    fn infinite_times_are_skipped() {
        let dir = tmp();
        let mut store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        store.import(1, &[(7, f64::INFINITY), (8, 3.0)]).unwrap();
        assert_eq!(store.lookup_index(1, 7).unwrap(), None);
        assert_eq!(store.lookup_index(1, 8).unwrap(), Some(3.0));
    }

    #[test]
    fn unknown_station_is_none() {
        let dir = tmp();
        let store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        assert_eq!(store.lookup_index(99, 7).unwrap(), None);
    }

    #[test]
    fn survives_reopen() {
        let dir = tmp();
        let db = dir.path().join("tt.db");
        {
            let mut store = TravelTimeStore::open(&db).unwrap();
            store.import(42, &[(7, 1.5)]).unwrap();
        }
        let store = TravelTimeStore::open(&db).unwrap();
        assert_eq!(store.lookup_index(42, 7).unwrap(), Some(1.5));
    }

    #[test]
    fn location_lookup_uses_fine_grid() {
        let dir = tmp();
        let mut store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        let grid = tt_core::Grid::global();
        let sta = Location::new(120.0, 23.0, 0.0);
        let sou = Location::new(120.01, 23.01, 1.0);
        let idx_sta = grid.norm_index(sta, tt_core::Stage::Fine).unwrap();
        let idx_sou = grid.norm_index(sou, tt_core::Stage::Fine).unwrap();
        store.import(idx_sta, &[(idx_sou, 1.81024)]).unwrap();
        assert_eq!(store.lookup(sta, sou).unwrap(), Some(1.81024));
    }

    #[test]
    fn coincident_lookup_rejected() {
        let dir = tmp();
        let store = TravelTimeStore::open(&dir.path().join("tt.db")).unwrap();
        let p = Location::new(120.0, 23.0, 0.0);
        assert!(matches!(
            store.lookup(p, p),
            Err(OutputError::CoincidentEndpoints)
        ));
    }
}
