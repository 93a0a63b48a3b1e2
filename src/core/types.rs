/*!
 * Core Types
 * Common types used across the crate
 */

/// Queue identifier, doubling as the registry slot index
pub type QueueId = u32;

/// Element type stored in queues
pub type Value = i64;

/// 1-based position of an element within a queue
pub type Position = usize;
