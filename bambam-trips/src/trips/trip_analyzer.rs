use super::{
    RowRejection, RowRejectionObserver, SlotCount, TripAggregator, TripAnalyzerConfig, TripCache,
    TripError, TripRow, ZoneCount,
};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// bytes read between progress bar refreshes
const PROGRESS_STRIDE: usize = 1 << 20;

/// ingests trip record files and answers ranked queries over the result.
///
/// each ingestion run replaces the cache in full. queries are read-only and
/// may be repeated any number of times against the same cache. see
/// [`super::SharedTripAnalyzer`] for a handle that can be shared across threads.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    config: TripAnalyzerConfig,
    cache: TripCache,
}

impl TripAnalyzer {
    pub fn new(config: TripAnalyzerConfig) -> TripAnalyzer {
        TripAnalyzer {
            config,
            cache: TripCache::default(),
        }
    }

    pub fn config(&self) -> &TripAnalyzerConfig {
        &self.config
    }

    /// zone counts from the last ingestion run, in arbitrary order.
    pub fn zones(&self) -> &[ZoneCount] {
        &self.cache.zones
    }

    /// non-zero slot counts from the last ingestion run, in arbitrary order.
    pub fn slots(&self) -> &[SlotCount] {
        &self.cache.slots
    }

    /// ingests the file at `path`. if the file cannot be opened or read, the
    /// cache is left empty and the failure is only logged.
    pub fn ingest_file(&mut self, path: &Path) {
        if let Err(e) = self.try_ingest_file(path, &mut ()) {
            log::warn!("{e}");
        }
    }

    /// ingests the file at `path`, reporting rejected rows to `observer`.
    /// on error the cache is left empty.
    pub fn try_ingest_file<O: RowRejectionObserver>(
        &mut self,
        path: &Path,
        observer: &mut O,
    ) -> Result<(), TripError> {
        self.cache = TripCache::default();
        let file = File::open(path).map_err(|source| TripError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut bar = match self.config.progress {
            false => None,
            true => {
                let total = file.metadata().map(|m| m.len() as usize).unwrap_or_default();
                Bar::builder()
                    .total(total)
                    .desc(format!("reading {}", path.display()))
                    .unit("B")
                    .unit_scale(true)
                    .build()
                    .map_err(|e| log::warn!("error building progress bar: {e}"))
                    .ok()
            }
        };
        let result = self.run(BufReader::new(file), observer, bar.as_mut());
        if bar.is_some() {
            eprintln!();
        }
        result
    }

    /// ingests trip rows from any line-oriented reader. rows that cannot be
    /// read are dropped silently. a failing reader leaves the cache empty.
    pub fn ingest<R: BufRead>(&mut self, reader: R) {
        self.ingest_with_observer(reader, &mut ())
    }

    /// as [`TripAnalyzer::ingest`], reporting each rejected row to `observer`.
    pub fn ingest_with_observer<R: BufRead, O: RowRejectionObserver>(
        &mut self,
        reader: R,
        observer: &mut O,
    ) {
        self.cache = TripCache::default();
        if let Err(e) = self.run(reader, observer, None) {
            log::warn!("{e}");
        }
    }

    /// the single pass over the source. the cache is only replaced once the
    /// whole source has been read.
    fn run<R: BufRead, O: RowRejectionObserver>(
        &mut self,
        mut reader: R,
        observer: &mut O,
        mut bar: Option<&mut Bar>,
    ) -> Result<(), TripError> {
        self.cache = TripCache::default();
        let mut aggregator = TripAggregator::default();
        let mut buf: Vec<u8> = Vec::with_capacity(256);
        let mut line_number: usize = 0;
        let mut n_accepted: usize = 0;
        let mut n_rejected: usize = 0;
        let mut unreported_bytes: usize = 0;

        loop {
            buf.clear();
            let n_read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| TripError::ReadError {
                    line_number: line_number + 1,
                    source,
                })?;
            if n_read == 0 {
                break;
            }
            line_number += 1;
            if let Some(bar) = bar.as_mut() {
                unreported_bytes += n_read;
                if unreported_bytes >= PROGRESS_STRIDE {
                    let _ = bar.update(unreported_bytes);
                    unreported_bytes = 0;
                }
            }
            if line_number <= self.config.header_lines {
                continue;
            }

            let line = trim_line_terminator(&buf);
            if line.is_empty() {
                continue;
            }
            let parsed = std::str::from_utf8(line)
                .map_err(|_| RowRejection::InvalidEncoding)
                .and_then(|line| TripRow::parse(line, &self.config.hour_columns));
            match parsed {
                Ok(row) => {
                    aggregator.observe(&row);
                    n_accepted += 1;
                }
                Err(reason) => {
                    observer.on_rejected(line_number, reason);
                    n_rejected += 1;
                }
            }
        }
        if let Some(bar) = bar {
            let _ = bar.update(unreported_bytes);
        }

        log::debug!(
            "read {line_number} lines, accepted {n_accepted} rows, rejected {n_rejected} rows across {} zones",
            aggregator.n_zones()
        );
        self.cache = aggregator.materialize();
        Ok(())
    }

    /// the `k` zones with the most trips, ordered by count descending then
    /// zone ascending. returns an empty list when `k <= 0` and fewer than `k`
    /// entries when fewer zones were observed.
    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        match usize::try_from(k) {
            Ok(k) if k > 0 => self
                .cache
                .zones
                .iter()
                .cloned()
                .sorted_by(ZoneCount::rank_cmp)
                .take(k)
                .collect_vec(),
            _ => vec![],
        }
    }

    /// the `k` busiest (zone, hour) slots, ordered by count descending, then
    /// zone ascending, then hour ascending. returns an empty list when
    /// `k <= 0`.
    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        match usize::try_from(k) {
            Ok(k) if k > 0 => self
                .cache
                .slots
                .iter()
                .cloned()
                .sorted_by(SlotCount::rank_cmp)
                .take(k)
                .collect_vec(),
            _ => vec![],
        }
    }
}

/// strips one trailing `\n` and then one trailing `\r`.
fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
