//! SQLite travel-time store (feature `sqlite`).
//!
//! A keyed map per station: one `travel_time_<station_index>` table whose
//! rows are `(source fine-grid index, seconds)`.  Re-importing an existing
//! key keeps the smaller time — travel times for the same pair can only
//! improve as corridors widen, so the minimum is the authoritative value.

use std::path::Path;

use rusqlite::Connection;

use tt_core::{Grid, Location, Stage};

use crate::error::{OutputError, OutputResult};

/// Persisted first-arrival travel times, one table per station.
pub struct TravelTimeStore {
    conn: Connection,
}

impl TravelTimeStore {
    /// Open (or create) the store database at `path`.
    pub fn open(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    fn table(station: i64) -> String {
        format!("travel_time_{station}")
    }

    fn has_table(&self, table: &str) -> OutputResult<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
        Ok(stmt.exists([table])?)
    }

    /// Import per-source travel times for one station.
    ///
    /// Non-finite times (unreachable vertices) are skipped; an existing key
    /// keeps the minimum of the stored and imported values.
    pub fn import(&mut self, station: i64, times: &[(i64, f64)]) -> OutputResult<()> {
        let table = Self::table(station);
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                 id      INTEGER PRIMARY KEY,
                 seconds REAL NOT NULL
             )"
        ))?;
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO {table} (id, seconds) VALUES (?1, ?2) \
                 ON CONFLICT(id) DO UPDATE SET seconds = MIN(seconds, excluded.seconds)"
            ))?;
            for &(source, seconds) in times {
                if !seconds.is_finite() {
                    continue;
                }
                stmt.execute(rusqlite::params![source, seconds])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Travel time for a `(station, source)` index pair, if present.
    pub fn lookup_index(&self, station: i64, source: i64) -> OutputResult<Option<f64>> {
        let table = Self::table(station);
        if !self.has_table(&table)? {
            return Ok(None);
        }
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT seconds FROM {table} WHERE id = ?1"))?;
        let mut rows = stmt.query([source])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Travel time between two locations, keyed on the fine grid.
    pub fn lookup(&self, sta: Location, sou: Location) -> OutputResult<Option<f64>> {
        if sta == sou {
            return Err(OutputError::CoincidentEndpoints);
        }
        let grid = Grid::global();
        self.lookup_index(
            grid.norm_index(sta, Stage::Fine)?,
            grid.norm_index(sou, Stage::Fine)?,
        )
    }
}
