use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// `position` is one-based, as shown to users.
    #[error("case {position} is out of range (collection holds {len} cases)")]
    CaseOutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
