/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  UTF-8 → ISO-8859-1 fallback → TenureDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TenureDataset │  headers + typed cells
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  profession equality → row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
