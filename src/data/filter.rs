use super::model::{SectorFilter, SectorRecord};

// ---------------------------------------------------------------------------
// Sector filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass `filter`, in source order.
///
/// An unknown sector name is not an error; it simply matches nothing.
pub fn filtered_indices(records: &[SectorRecord], filter: &SectorFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(i, _)| i)
        .collect()
}

/// The selectable filter options: [`SectorFilter::All`] first, then every
/// distinct sector name in first-seen order.
pub fn distinct_sectors(records: &[SectorRecord]) -> Vec<SectorFilter> {
    let mut options = vec![SectorFilter::All];
    for record in records {
        let seen = options.iter().any(|opt| match opt {
            SectorFilter::Sector(name) => *name == record.sector,
            SectorFilter::All => false,
        });
        if !seen {
            options.push(SectorFilter::Sector(record.sector.clone()));
        }
    }
    options
}
