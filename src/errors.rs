use thiserror::Error;

/// Failures surfaced while re-rendering the collapsible groups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The document contains no element carrying the controlling id.
    #[error("no element with id `{0}` in the document")]
    ControlNotFound(String),
}
