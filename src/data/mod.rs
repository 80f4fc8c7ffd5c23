/// Data layer: core types, loading, filtering, and derivations.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<CountryRecord>, selector domains, bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  predicates + stable sort → view indices
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │ aggregate │      │  charts   │  KPI sums / chart series
///   └──────────┘      └──────────┘
/// ```
///
/// Everything below `loader` is a pure derivation of `Dataset` plus the
/// current `FilterState`, recomputed in full on every control change.

pub mod aggregate;
pub mod charts;
pub mod filter;
pub mod loader;
pub mod model;
