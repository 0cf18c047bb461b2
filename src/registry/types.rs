//! Common types for registry access

/// A single version of a container package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersion {
    /// Registry-assigned identifier; a higher id was created later
    pub id: u64,
    /// Tags in the order the registry returned them
    pub tags: Vec<String>,
}

impl PackageVersion {
    /// Creates a new PackageVersion with the given id and tags
    pub fn new(id: u64, tags: Vec<String>) -> Self {
        Self { id, tags }
    }
}

/// Result of a delete request that reached the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The registry answered 204 No Content
    Deleted,
    /// The registry answered with any other status
    Rejected(u16),
}
