//! Business logic: field resolution, row transformation, batched
//! generation, and the atomic export driver.

pub mod collection;
pub mod export;
pub mod generator;
pub mod resolve;
pub mod transform;

pub use collection::{Collection, CollectionBuilder, FilenameRule};
pub use export::{export_collection, ExportSummary};
pub use generator::{DocumentIter, ExportLimits};
pub use resolve::related_lookup_parts;
pub use transform::parse_to_document;
