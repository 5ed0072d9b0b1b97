/// Data layer: record types, CSV loading, filtering and derived insights.
///
/// Architecture:
/// ```text
///  cyberattack_data_structured.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  bytes → SectorDataset (records + raw bytes)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  SectorFilter → visible indices, distinct sectors
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ insights  │  most costly / largest volume / most vulnerable
///   └──────────┘
/// ```

pub mod filter;
pub mod insights;
pub mod loader;
pub mod model;
