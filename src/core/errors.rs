/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::QueueId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for all queue and registry operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Queue-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Queue {0} not found")]
    #[diagnostic(
        code(queue::not_found),
        help("The identifier was never issued or the registry has been torn down.")
    )]
    NotFound(QueueId),

    #[error("Queue limit reached: {0}")]
    #[diagnostic(
        code(queue::limit_reached),
        help("Identifiers are not recycled. Raise the registry limit or create fewer queues.")
    )]
    LimitReached(String),

    #[error("Memory allocation failed: {0}")]
    #[diagnostic(
        code(queue::allocation_failed),
        help("System may be low on memory. Free other queues and retry.")
    )]
    AllocationFailed(String),
}
