/// Data layer: core types, loading, and derived metrics.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StudentTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ StudentTable  │  Vec<StudentRecord>, header order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  subject means + per-row final scores → DashboardMetrics
///   └──────────┘
/// ```
pub mod error;
pub mod loader;
pub mod metrics;
pub mod model;
