use std::cmp::Ordering;

use super::model::SectorRecord;

// ---------------------------------------------------------------------------
// Headline insights shown under the dashboard table
// ---------------------------------------------------------------------------

/// The three "key insight" cards, derived from whatever records are loaded.
#[derive(Debug, Clone, Default)]
pub struct Insights {
    /// Highest average breach cost.
    pub most_costly: Option<SectorRecord>,
    /// Highest incident count.
    pub largest_volume: Option<SectorRecord>,
    /// Highest breach-to-incident ratio.
    pub most_vulnerable: Option<SectorRecord>,
}

impl Insights {
    pub fn from_records(records: &[SectorRecord]) -> Self {
        Self {
            most_costly: max_by_key(records, |r| Some(r.average_breach_cost_musd)),
            largest_volume: max_by_key(records, |r| r.incident_count.map(|n| n as f64)),
            most_vulnerable: max_by_key(records, |r| Some(r.breach_to_incident_ratio)),
        }
    }
}

/// First record with the greatest key. Missing and NaN keys never win.
fn max_by_key<F>(records: &[SectorRecord], key: F) -> Option<SectorRecord>
where
    F: Fn(&SectorRecord) -> Option<f64>,
{
    let mut best: Option<(f64, &SectorRecord)> = None;
    for record in records {
        let Some(value) = key(record).filter(|v| !v.is_nan()) else {
            continue;
        };
        match best {
            Some((current, _)) if value.partial_cmp(&current) != Some(Ordering::Greater) => {}
            _ => best = Some((value, record)),
        }
    }
    best.map(|(_, record)| record.clone())
}
