/*!
 * Queue Lifecycle Operations
 * Create, free, and teardown operations
 */

use super::registry::{Queue, QueueRegistry};
use crate::core::errors::{QueueError, QueueResult};
use crate::core::types::QueueId;
use log::{debug, info};

impl QueueRegistry {
    /// Create an empty queue and register it under the next identifier
    pub fn create(&mut self) -> QueueResult<QueueId> {
        self.check_registry_limit()?;
        self.reserve_slot()?;

        let id = self.slots.len() as QueueId;
        self.slots.push(Some(Queue::new(id)));

        info!(
            "created queue {} ({}/{} identifiers issued)",
            id,
            self.slots.len(),
            self.limit
        );
        Ok(id)
    }

    /// Check if the identifier space is exhausted
    fn check_registry_limit(&self) -> QueueResult<()> {
        if self.slots.len() >= self.limit {
            return Err(QueueError::LimitReached(format!(
                "cannot create more than {} queues",
                self.limit
            )));
        }
        Ok(())
    }

    /// Grow slot storage, surfacing allocation failure to the caller
    fn reserve_slot(&mut self) -> QueueResult<()> {
        self.slots.try_reserve(1).map_err(|e| {
            QueueError::AllocationFailed(format!("registry slot reservation failed: {}", e))
        })
    }

    /// Release every node in the queue's chain
    ///
    /// The identifier stays registered and the queue is usable again
    /// immediately. Freeing an already-empty queue is a logged no-op.
    pub fn free(&mut self, id: QueueId) -> QueueResult<()> {
        let queue = self.queue_mut(id)?;
        if queue.chain.is_empty() {
            debug!("queue {} already empty, skipping free", id);
            return Ok(());
        }

        let released = queue.chain.len();
        queue.chain.clear();
        info!("freed queue {} ({} nodes released)", id, released);
        Ok(())
    }

    /// Free every registered queue and reset the identifier counter
    ///
    /// Runs automatically when the registry is dropped; calling it again
    /// afterwards is harmless.
    pub fn teardown_all(&mut self) {
        if self.slots.is_empty() {
            return;
        }

        let mut freed = 0;
        for slot in self.slots.iter_mut() {
            if let Some(queue) = slot.take() {
                if !queue.chain.is_empty() {
                    debug!(
                        "teardown releasing queue {} ({} nodes)",
                        queue.id,
                        queue.chain.len()
                    );
                }
                freed += 1;
            }
        }
        self.slots.clear();
        info!("queue registry torn down ({} queues freed)", freed);
    }
}
