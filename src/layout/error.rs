use thiserror::Error;

/// Failures that reject an input graph before any layout is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("duplicate node id `{id}`")]
    DuplicateNode { id: String },

    #[error("`{referenced_by}` references unknown node id `{id}`")]
    UnknownNode { id: String, referenced_by: String },

    #[error("containment cycle through node `{id}`")]
    Cycle { id: String },
}
