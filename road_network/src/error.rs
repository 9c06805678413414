use thiserror::Error;

/// Anything that stops the network from being built. No partial network is ever returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
    #[error("{record} refers to {missing}, which doesn't exist")]
    MalformedReference { record: String, missing: String },
    #[error("can't order the lanes of road block {block}: {reason}")]
    AmbiguousAdjacency { block: String, reason: String },
    #[error("more than one element has uid {0}")]
    DuplicateIdentifier(String),
    #[error("bad geometry for {uid}: {reason}")]
    MalformedGeometry { uid: String, reason: String },
    #[error("bad config: {0}")]
    InvalidConfig(String),
}

impl BuildError {
    pub(crate) fn missing(record: &str, missing: String) -> BuildError {
        BuildError::MalformedReference {
            record: record.to_string(),
            missing,
        }
    }

    pub(crate) fn adjacency(block: &str, reason: String) -> BuildError {
        BuildError::AmbiguousAdjacency {
            block: block.to_string(),
            reason,
        }
    }

    pub(crate) fn geometry(uid: &str, reason: String) -> BuildError {
        BuildError::MalformedGeometry {
            uid: uid.to_string(),
            reason,
        }
    }
}
