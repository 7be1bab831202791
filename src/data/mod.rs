/// Data layer: core types and the bundled-dataset loader.
///
/// Architecture:
/// ```text
///  assets/iris.csv (include_str!)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  IrisDataset  │  Vec<IrisRecord>, per-feature / per-species slices
///   └──────────────┘
/// ```
///
/// The dataset is loaded once at startup and never mutated afterwards; the
/// UI layers only read from it.

pub mod loader;
pub mod model;
