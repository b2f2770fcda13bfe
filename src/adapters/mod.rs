//! External integrations: record sources and write sinks.

pub mod filesystem;
pub mod json;
pub mod sink;

pub use filesystem::FileSystemSink;
pub use json::{JsonRecord, JsonRecordSource};
pub use sink::{NullSink, WriteSink};
