/*!
 * Queue Registry
 * Owning table of every live queue, slot-indexed by identifier
 */

use super::chain::Chain;
use crate::core::errors::{QueueError, QueueResult};
use crate::core::limits::MAX_QUEUES;
use crate::core::types::QueueId;
use log::info;
use std::fmt;

/// One registered queue: an identifier plus the chain it owns
pub(super) struct Queue {
    pub id: QueueId,
    pub chain: Chain,
}

impl Queue {
    pub fn new(id: QueueId) -> Self {
        Self {
            id,
            chain: Chain::new(),
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[QUEUE {}]  --->  {}", self.id, self.chain)
    }
}

/// Owning registry of FIFO queues
///
/// The slot index doubles as the queue identifier; identifiers are issued
/// monotonically and never recycled while the registry lives, so the slot
/// count is also the allocation high-water mark. Teardown happens
/// explicitly via [`teardown_all`](QueueRegistry::teardown_all) or
/// implicitly when the registry is dropped.
pub struct QueueRegistry {
    pub(super) slots: Vec<Option<Queue>>,
    pub(super) limit: usize,
}

impl QueueRegistry {
    pub fn new() -> Self {
        Self::with_limit(MAX_QUEUES)
    }

    /// Registry bounded to `limit` identifiers over its lifetime
    pub fn with_limit(limit: usize) -> Self {
        info!("queue registry initialized (limit: {})", limit);
        Self {
            slots: Vec::new(),
            limit,
        }
    }

    /// Lifetime cap on identifiers
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub(super) fn queue(&self, id: QueueId) -> QueueResult<&Queue> {
        self.slots
            .get(id as usize)
            .and_then(Option::as_ref)
            .ok_or(QueueError::NotFound(id))
    }

    pub(super) fn queue_mut(&mut self, id: QueueId) -> QueueResult<&mut Queue> {
        self.slots
            .get_mut(id as usize)
            .and_then(Option::as_mut)
            .ok_or(QueueError::NotFound(id))
    }
}

impl Default for QueueRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QueueRegistry {
    fn drop(&mut self) {
        self.teardown_all();
    }
}
