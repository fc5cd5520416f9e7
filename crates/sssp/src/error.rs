use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphError {
    /// An edge or query referenced a vertex that was never added.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}

impl GraphError {
    pub(crate) fn unknown<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{vertex:?}"))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
