//! Error types for the greetings library.

use thiserror::Error;

/// Errors that can occur when generating greetings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    /// A name was the empty string.
    #[error("empty name")]
    EmptyName,

    /// A name appeared more than once under [`DuplicatePolicy::Reject`].
    ///
    /// [`DuplicatePolicy::Reject`]: crate::DuplicatePolicy::Reject
    #[error("duplicate name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}
