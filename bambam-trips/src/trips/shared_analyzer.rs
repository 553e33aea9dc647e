use super::{
    RowRejectionObserver, SlotCount, TripAnalyzer, TripAnalyzerConfig, TripError, ZoneCount,
};
use std::{
    io::BufRead,
    path::Path,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// a [`TripAnalyzer`] that can be shared across threads. ingestion holds the
/// write lock for the whole run, so queries only ever see a completed cache.
#[derive(Debug, Clone, Default)]
pub struct SharedTripAnalyzer {
    inner: Arc<RwLock<TripAnalyzer>>,
}

impl SharedTripAnalyzer {
    pub fn new(config: TripAnalyzerConfig) -> SharedTripAnalyzer {
        SharedTripAnalyzer {
            inner: Arc::new(RwLock::new(TripAnalyzer::new(config))),
        }
    }

    // a panic mid-ingest leaves the cache empty, never partially written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, TripAnalyzer> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, TripAnalyzer> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn ingest<R: BufRead>(&self, reader: R) {
        self.write().ingest(reader)
    }

    pub fn ingest_file(&self, path: &Path) {
        self.write().ingest_file(path)
    }

    pub fn try_ingest_file<O: RowRejectionObserver>(
        &self,
        path: &Path,
        observer: &mut O,
    ) -> Result<(), TripError> {
        self.write().try_ingest_file(path, observer)
    }

    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        self.read().top_zones(k)
    }

    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        self.read().top_busy_slots(k)
    }
}

impl From<TripAnalyzer> for SharedTripAnalyzer {
    fn from(value: TripAnalyzer) -> Self {
        SharedTripAnalyzer {
            inner: Arc::new(RwLock::new(value)),
        }
    }
}
