//! Best-effort static-asset resolution by filename probing.
//!
//! Asset images are keyed by a human-authored logical name (a skill, project, or company
//! title) whose on-disk filename is not known in advance. The resolver derives candidate
//! filenames from the logical name, probes the asset origin for each candidate in a
//! strict order, and memoizes the first hit in a process-scoped cache injected by the
//! composition root. Exhaustion is a quiet "not found", never an error: callers render a
//! placeholder instead.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod cache;
mod probe;
mod resolve;

pub use cache::AssetCache;
pub use probe::{AssetProbe, AssetProbeFuture, NoopAssetProbe, StaticAssetProbe};
pub use resolve::{name_variants, resolve_asset, AssetRequest, DEFAULT_EXTENSIONS};
