use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// SectorRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// One industry sector as published in the structured CSV.
///
/// Numeric columns are parsed leniently: a decimal that cannot be read is
/// `f64::NAN`, an integer that cannot be read is `None`. Both are displayed,
/// never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRecord {
    /// Sector name. Doubles as the table key and the filter value.
    pub sector: String,
    /// Average cost of a data breach, millions of USD.
    pub average_breach_cost_musd: f64,
    /// Attribution for the cost figure (e.g. "IBM 2024").
    pub cost_source: String,
    pub incident_count: Option<i64>,
    pub breach_count: Option<i64>,
    /// Attack patterns, most frequent first.
    pub top_patterns: [String; 3],
    pub primary_motive: String,
    /// `breach_count / incident_count`, precomputed upstream (0–1 expected).
    pub breach_to_incident_ratio: f64,
}

// ---------------------------------------------------------------------------
// SectorFilter – the dashboard selection
// ---------------------------------------------------------------------------

/// Which records the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SectorFilter {
    /// No filtering applied.
    #[default]
    All,
    /// Exact, case-sensitive match on [`SectorRecord::sector`].
    Sector(String),
}

impl SectorFilter {
    pub fn matches(&self, record: &SectorRecord) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Sector(name) => record.sector == *name,
        }
    }

    /// Button label shown in the filter bar.
    pub fn label(&self) -> &str {
        match self {
            SectorFilter::All => "Tous les Secteurs",
            SectorFilter::Sector(name) => name,
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SectorDataset – the complete fetched resource
// ---------------------------------------------------------------------------

/// Parsed records plus the exact bytes they were parsed from.
#[derive(Debug, Clone)]
pub struct SectorDataset {
    pub records: Vec<SectorRecord>,
    /// Unmodified file content, offered as-is by the download action.
    pub raw: Vec<u8>,
    pub source: PathBuf,
}

impl SectorDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(sector: &str, cost: f64, incidents: i64, breaches: i64, ratio: f64) -> SectorRecord {
    SectorRecord {
        sector: sector.to_string(),
        average_breach_cost_musd: cost,
        cost_source: "IBM 2024".to_string(),
        incident_count: Some(incidents),
        breach_count: Some(breaches),
        top_patterns: [
            "System Intrusion".to_string(),
            "Social Engineering".to_string(),
            "Miscellaneous Errors".to_string(),
        ],
        primary_motive: "Financial".to_string(),
        breach_to_incident_ratio: ratio,
    }
}
