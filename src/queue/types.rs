/*!
 * Queue Types
 * Diagnostics snapshots exposed by the registry
 */

use crate::core::types::QueueId;
use serde::{Deserialize, Serialize};

/// Per-queue statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub id: QueueId,
    pub length: usize,
}

/// Registry-wide statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Identifiers issued so far (the teardown sweep's upper bound)
    pub queues_created: usize,
    /// Elements currently held across all registered queues
    pub total_elements: usize,
    /// Lifetime cap on identifiers
    pub limit: usize,
}
