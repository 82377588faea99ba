/// Convenience result type used across codewalk.
pub type CodewalkResult<T> = Result<T, CodewalkError>;

/// Top-level error taxonomy used by compiler and loader APIs.
#[derive(thiserror::Error, Debug)]
pub enum CodewalkError {
    /// A scene with no steps was handed to the sequencer.
    #[error("empty scene: a scene needs at least one step")]
    EmptyScene,

    /// A `prev`/`next` identifier did not resolve against the minted frame keys.
    ///
    /// This is a compiler defect, never a user error.
    #[error("missing linked frame: {0}")]
    MissingLinkedFrame(String),

    /// Invalid user-provided script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when reading or decoding script documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CodewalkError {
    /// Build a [`CodewalkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CodewalkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CodewalkError::MissingLinkedFrame`] value.
    pub fn missing_linked_frame(msg: impl Into<String>) -> Self {
        Self::MissingLinkedFrame(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
