//! Disk-backed reservation store.
//!
//! Layout under the ledger root:
//!
//! ```text
//! <root>/venues/<venue_id>/<YYYY-MM-DD>.json   one bucket per venue/date
//! <root>/requesters/<requester_id>.json        one index per requester
//! ```
//!
//! Each file holds a JSON array of reservations. A bucket that empties out
//! is deleted rather than left as `[]` on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::ReservationStore;
use crate::error::{LedgerError, LedgerResult};
use crate::reservation::Reservation;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`. Directories are created lazily on
    /// first write, so opening never touches the disk.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn venue_bucket_path(&self, venue_id: &str, date: NaiveDate) -> LedgerResult<PathBuf> {
        Ok(self
            .root
            .join("venues")
            .join(path_component(venue_id)?)
            .join(format!("{}.json", date.format("%Y-%m-%d"))))
    }

    fn requester_index_path(&self, requester_id: &str) -> LedgerResult<PathBuf> {
        Ok(self
            .root
            .join("requesters")
            .join(format!("{}.json", path_component(requester_id)?)))
    }
}

impl ReservationStore for FileStore {
    fn venue_day(&self, venue_id: &str, date: NaiveDate) -> LedgerResult<Vec<Reservation>> {
        read_bucket(&self.venue_bucket_path(venue_id, date)?)
    }

    fn requester_index(&self, requester_id: &str) -> LedgerResult<Vec<Reservation>> {
        read_bucket(&self.requester_index_path(requester_id)?)
    }

    fn insert(&mut self, reservation: &Reservation) -> LedgerResult<()> {
        let bucket_path = self.venue_bucket_path(&reservation.venue_id, reservation.date)?;
        let index_path = self.requester_index_path(&reservation.requester_id)?;

        let mut bucket = read_bucket(&bucket_path)?;
        bucket.push(reservation.clone());
        write_bucket(&bucket_path, &bucket)?;

        let mut index = read_bucket(&index_path)?;
        index.push(reservation.clone());
        write_bucket(&index_path, &index)
    }

    fn remove(&mut self, reservation: &Reservation) -> LedgerResult<()> {
        let bucket_path = self.venue_bucket_path(&reservation.venue_id, reservation.date)?;
        let index_path = self.requester_index_path(&reservation.requester_id)?;

        let mut bucket = read_bucket(&bucket_path)?;
        bucket.retain(|r| r.id != reservation.id);
        write_bucket(&bucket_path, &bucket)?;

        let mut index = read_bucket(&index_path)?;
        index.retain(|r| r.id != reservation.id);
        write_bucket(&index_path, &index)
    }

    fn all(&self) -> LedgerResult<Vec<Reservation>> {
        let venues_dir = self.root.join("venues");
        let mut reservations = Vec::new();

        let Ok(venues) = std::fs::read_dir(&venues_dir) else {
            return Ok(reservations);
        };

        for venue in venues.filter_map(|e| e.ok()) {
            if !venue.path().is_dir() {
                continue;
            }
            for entry in std::fs::read_dir(venue.path())?.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "json") {
                    reservations.extend(read_bucket(&path)?);
                }
            }
        }

        Ok(reservations)
    }
}

/// Read a JSON bucket file, treating a missing file as an empty bucket.
fn read_bucket(path: &Path) -> LedgerResult<Vec<Reservation>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        LedgerError::Serialization(format!("Corrupt bucket {}: {}", path.display(), e))
    })
}

/// Write a bucket file, deleting it instead when the bucket is empty.
fn write_bucket(path: &Path, reservations: &[Reservation]) -> LedgerResult<()> {
    if reservations.is_empty() {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(reservations)
        .map_err(|e| LedgerError::Serialization(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Ids become file and directory names, so they must be plain tokens.
fn path_component(id: &str) -> LedgerResult<&str> {
    if id.is_empty() || id.contains(['/', '\\', '.']) {
        return Err(LedgerError::Config(format!(
            "Invalid id '{}': ids may not be empty or contain path separators",
            id
        )));
    }
    Ok(id)
}
