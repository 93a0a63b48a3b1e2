/*!
 * Limits
 *
 * Centralized location for registry-wide limits and thresholds.
 */

/// Maximum number of queue identifiers a registry issues over its lifetime
/// Identifiers are monotonic and never recycled, so this bounds total
/// creations, not just the concurrently-live population
pub const MAX_QUEUES: usize = 100;
