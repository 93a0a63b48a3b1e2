/*!
 * Queue Operations
 * Push, pop, peek, search, and inspection operations
 */

use super::registry::QueueRegistry;
use super::types::{QueueStats, RegistryStats};
use crate::core::errors::{QueueError, QueueResult};
use crate::core::types::{Position, QueueId, Value};
use log::{debug, info};

impl QueueRegistry {
    /// Append a value at the queue's tail
    pub fn push(&mut self, id: QueueId, value: Value) -> QueueResult<()> {
        let queue = self.queue_mut(id)?;
        queue.chain.push_back(value).map_err(|_| {
            QueueError::AllocationFailed(format!("node allocation failed for queue {}", id))
        })?;

        debug!("pushed {} to queue {} (len: {})", value, id, queue.chain.len());
        Ok(())
    }

    /// Remove and return the value at the queue's head, `None` when empty
    pub fn pop(&mut self, id: QueueId) -> QueueResult<Option<Value>> {
        let queue = self.queue_mut(id)?;
        let value = queue.chain.pop_front();

        match value {
            Some(v) => debug!("popped {} from queue {} (len: {})", v, id, queue.chain.len()),
            None => debug!("pop on empty queue {}", id),
        }
        Ok(value)
    }

    /// Head value without removal, `None` when empty
    pub fn peek(&self, id: QueueId) -> QueueResult<Option<Value>> {
        Ok(self.queue(id)?.chain.peek_front())
    }

    /// 1-based position of the first element equal to `value`, scanning
    /// from the head
    pub fn search(&self, id: QueueId, value: Value) -> QueueResult<Option<Position>> {
        let queue = self.queue(id)?;
        let position = queue.chain.position_of(value);

        if position.is_none() {
            debug!(
                "value {} not found in queue {} ({} elements scanned)",
                value,
                id,
                queue.chain.len()
            );
        }
        Ok(position)
    }

    /// Current element count
    pub fn len(&self, id: QueueId) -> QueueResult<usize> {
        Ok(self.queue(id)?.chain.len())
    }

    /// True when the queue holds no elements
    pub fn is_empty(&self, id: QueueId) -> QueueResult<bool> {
        Ok(self.queue(id)?.chain.is_empty())
    }

    /// Log a left-to-right rendering of the chain, head to tail
    pub fn dump(&self, id: QueueId) -> QueueResult<()> {
        info!("{}", self.queue(id)?);
        Ok(())
    }

    /// Per-queue diagnostics snapshot
    pub fn stats(&self, id: QueueId) -> QueueResult<QueueStats> {
        let queue = self.queue(id)?;
        Ok(QueueStats {
            id: queue.id,
            length: queue.chain.len(),
        })
    }

    /// Registry-wide diagnostics snapshot
    pub fn registry_stats(&self) -> RegistryStats {
        RegistryStats {
            queues_created: self.slots.len(),
            total_elements: self.slots.iter().flatten().map(|q| q.chain.len()).sum(),
            limit: self.limit,
        }
    }
}
