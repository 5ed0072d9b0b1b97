use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use anyhow::{Result, anyhow};

use crate::data::filter::{distinct_sectors, filtered_indices};
use crate::data::loader::load_file;
use crate::data::model::{SectorDataset, SectorFilter, SectorRecord};

// ---------------------------------------------------------------------------
// SectorDataStore – dashboard data state
// ---------------------------------------------------------------------------

/// Records for one dashboard activation, independent of rendering.
///
/// Created fresh whenever the dashboard opens and dropped when it closes;
/// a load still in flight at that point is discarded.
#[derive(Default)]
pub struct SectorDataStore {
    /// Full record list (empty until a load succeeds).
    records: Vec<SectorRecord>,

    /// Bytes the records were parsed from, for the download action.
    raw: Option<Vec<u8>>,

    /// Current sector selection.
    selected: SectorFilter,

    /// Indices of records passing `selected` (cached).
    visible_indices: Vec<usize>,

    /// Whether a load is in progress.
    loading: bool,

    /// Why the last load failed, if it did.
    status_message: Option<String>,

    /// Result channel of the background loader.
    pending: Option<Receiver<Result<SectorDataset>>>,
}

impl SectorDataStore {
    /// Start reading `path` on a background thread.
    ///
    /// `notify` runs on the loader thread once the result is queued; the UI
    /// passes a repaint request so the next frame picks it up via [`poll`].
    ///
    /// [`poll`]: SectorDataStore::poll
    pub fn load<F>(&mut self, path: PathBuf, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.loading = true;
        self.status_message = None;
        self.pending = Some(rx);

        log::info!("Loading sector data from {}", path.display());
        let spawned = std::thread::Builder::new()
            .name("sector-data-loader".into())
            .spawn(move || {
                // The receiver is gone if the dashboard closed meanwhile.
                let _ = tx.send(load_file(&path));
                notify();
            });

        if let Err(e) = spawned {
            self.finish_load(Err(anyhow!(e).context("spawning loader thread")));
        }
    }

    /// Apply a finished background load, if any. Returns `true` when the
    /// store changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.finish_load(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.finish_load(Err(anyhow!("loader thread exited without a result")));
                true
            }
        }
    }

    /// Ingest a load result. Failures leave an empty record list.
    pub fn finish_load(&mut self, result: Result<SectorDataset>) {
        self.pending = None;
        match result {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load sector data: {e:#}");
                self.records.clear();
                self.raw = None;
                self.visible_indices.clear();
                self.selected = SectorFilter::All;
                self.status_message = Some(format!("{e:#}"));
                self.loading = false;
            }
        }
    }

    /// Replace the records and reset the selection to everything.
    pub fn set_dataset(&mut self, dataset: SectorDataset) {
        if dataset.is_empty() {
            log::warn!("No sector records in {}", dataset.source.display());
        } else {
            log::info!(
                "Loaded {} sector records from {}",
                dataset.len(),
                dataset.source.display()
            );
        }
        self.visible_indices = (0..dataset.len()).collect();
        self.records = dataset.records;
        self.raw = Some(dataset.raw);
        self.selected = SectorFilter::All;
        self.status_message = None;
        self.loading = false;
    }

    /// Select `filter` and recompute the visible subset.
    pub fn filter_by_sector(&mut self, filter: SectorFilter) {
        self.visible_indices = filtered_indices(&self.records, &filter);
        self.selected = filter;
    }

    /// Records passing the current selection, in source order.
    pub fn filtered_records(&self) -> Vec<&SectorRecord> {
        self.visible_indices
            .iter()
            .filter_map(|&i| self.records.get(i))
            .collect()
    }

    pub fn distinct_sectors(&self) -> Vec<SectorFilter> {
        distinct_sectors(&self.records)
    }

    pub fn records(&self) -> &[SectorRecord] {
        &self.records
    }

    pub fn selected(&self) -> &SectorFilter {
        &self.selected
    }

    /// Raw bytes of the last successful load.
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::data::loader::parse_records;
    use crate::data::model::record;

    fn asset_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("cyberattack_data_structured.csv")
    }

    fn wait_for_load(store: &mut SectorDataStore) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !store.poll() {
            assert!(Instant::now() < deadline, "loader did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn dataset(records: Vec<SectorRecord>) -> SectorDataset {
        SectorDataset {
            records,
            raw: b"header\n".to_vec(),
            source: PathBuf::from("memory.csv"),
        }
    }

    fn seven() -> SectorDataset {
        dataset(vec![
            record("Healthcare", 9.77, 1710, 1542, 0.90),
            record("Financial Services", 6.08, 3348, 1115, 0.33),
            record("Industrial & Energy", 5.56, 4259, 3540, 0.83),
            record("IT & Telecommunications", 4.78, 1700, 1666, 0.98),
            record("Education & Research", 3.65, 1780, 1537, 0.86),
            record("Government & Public Services", 2.55, 1982, 1125, 0.57),
            record("Retail & E-commerce", 3.48, 837, 419, 0.50),
        ])
    }

    #[test]
    fn new_store_is_empty_and_idle() {
        let mut store = SectorDataStore::default();
        assert!(!store.poll());
        assert!(store.records().is_empty());
        assert!(store.filtered_records().is_empty());
        assert!(!store.is_loading());
    }

    #[test]
    fn loads_shipped_asset_in_background() {
        let mut store = SectorDataStore::default();
        store.load(asset_path(), || {});
        assert!(store.is_loading());
        wait_for_load(&mut store);

        assert!(!store.is_loading());
        assert_eq!(store.records().len(), 7);
        assert_eq!(store.filtered_records().len(), 7);
        assert_eq!(store.selected(), &SectorFilter::All);
        assert_eq!(store.distinct_sectors().len(), 8);
        assert_eq!(
            store.raw_bytes().unwrap(),
            std::fs::read(asset_path()).unwrap().as_slice()
        );
    }

    #[test]
    fn unreachable_resource_leaves_empty_store() {
        let mut store = SectorDataStore::default();
        store.load(PathBuf::from("/no/such/dir/data.csv"), || {});
        wait_for_load(&mut store);

        assert!(!store.is_loading());
        assert!(store.records().is_empty());
        assert!(store.filtered_records().is_empty());
        assert!(store.raw_bytes().is_none());
        assert!(store.status_message().is_some());
        assert_eq!(store.distinct_sectors(), vec![SectorFilter::All]);
    }

    #[test]
    fn header_only_dataset() {
        let mut store = SectorDataStore::default();
        store.set_dataset(dataset(parse_records(b"Secteur,Cout\n")));
        assert!(store.records().is_empty());
        assert!(store.filtered_records().is_empty());
        assert_eq!(store.distinct_sectors(), vec![SectorFilter::All]);
    }

    #[test]
    fn vanished_loader_thread_is_a_failure() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        let (tx, rx) = mpsc::channel::<Result<SectorDataset>>();
        drop(tx);
        store.pending = Some(rx);
        store.loading = true;

        assert!(store.poll());
        assert!(!store.is_loading());
        assert!(store.records().is_empty());
        assert!(store.filtered_records().is_empty());
        assert_eq!(
            store.status_message(),
            Some("loader thread exited without a result")
        );
        assert!(!store.poll());
    }

    #[test]
    fn filter_by_present_sector() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        store.filter_by_sector(SectorFilter::Sector("Healthcare".into()));

        let visible = store.filtered_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sector, "Healthcare");
        assert_eq!(store.selected(), &SectorFilter::Sector("Healthcare".into()));
    }

    #[test]
    fn filter_by_absent_sector_is_empty() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        store.filter_by_sector(SectorFilter::Sector("Agriculture".into()));
        assert!(store.filtered_records().is_empty());
        assert_eq!(store.records().len(), 7);
    }

    #[test]
    fn filter_all_restores_full_list() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        store.filter_by_sector(SectorFilter::Sector("Retail & E-commerce".into()));
        store.filter_by_sector(SectorFilter::All);

        let sectors: Vec<&str> = store
            .filtered_records()
            .iter()
            .map(|r| r.sector.as_str())
            .collect();
        let expected: Vec<&str> = store.records().iter().map(|r| r.sector.as_str()).collect();
        assert_eq!(sectors, expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        let filter = SectorFilter::Sector("Financial Services".into());

        store.filter_by_sector(filter.clone());
        let first: Vec<SectorRecord> = store.filtered_records().into_iter().cloned().collect();
        store.filter_by_sector(filter);
        let second: Vec<SectorRecord> = store.filtered_records().into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn failure_after_success_clears_records() {
        let mut store = SectorDataStore::default();
        store.set_dataset(seven());
        store.finish_load(Err(anyhow!("gone")));
        assert!(store.records().is_empty());
        assert!(store.filtered_records().is_empty());
        assert_eq!(store.status_message(), Some("gone"));
    }
}
