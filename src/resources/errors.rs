//! Resolution errors for record operations.
//!
//! These errors surface before any network traffic: asking for a record
//! type the client does not know, or a transformation SuiteTalk does not
//! accept. They are the caller's to fix, which is why they are `Err`
//! values rather than
//! [`OperationResult`](crate::resources::OperationResult) variants.

use thiserror::Error;

use crate::resources::path::TransformTarget;

/// Error type for record resolution failures.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::resources::ResourceError;
///
/// let error = ResourceError::UnknownResource {
///     name: "widget".to_string(),
/// };
/// assert_eq!(error.to_string(), "The resource [widget] does not exist.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The requested record type is not in the descriptor table.
    #[error("The resource [{name}] does not exist.")]
    UnknownResource {
        /// The name that failed to resolve.
        name: String,
    },

    /// The requested transformation is not accepted for this record type.
    #[error("Cannot transform {resource} into {target}.")]
    UnsupportedTransform {
        /// The wire name of the source record type.
        resource: &'static str,
        /// The rejected transform target.
        target: TransformTarget,
    },
}
