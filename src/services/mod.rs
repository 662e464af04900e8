// Service exports
pub mod repository;
pub mod source;

pub use repository::{Snapshot, SnapshotRepository};
pub use source::{SourceClient, SourceError};
