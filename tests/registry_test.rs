/*!
 * Registry Lifecycle Tests
 * Identifier allocation, limits, free semantics, and teardown
 */

use chainq::{QueueError, QueueRegistry, MAX_QUEUES};
use pretty_assertions::assert_eq;

#[test]
fn test_limit_reached_on_excess_create() {
    let mut registry = QueueRegistry::with_limit(3);

    for _ in 0..3 {
        registry.create().unwrap();
    }
    assert!(matches!(
        registry.create(),
        Err(QueueError::LimitReached(_))
    ));
}

#[test]
fn test_default_limit_is_max_queues() {
    let mut registry = QueueRegistry::new();
    assert_eq!(registry.limit(), MAX_QUEUES);

    for _ in 0..MAX_QUEUES {
        registry.create().unwrap();
    }
    assert!(matches!(
        registry.create(),
        Err(QueueError::LimitReached(_))
    ));
}

#[test]
fn test_identifiers_not_recycled_by_free() {
    let mut registry = QueueRegistry::with_limit(2);
    let first = registry.create().unwrap();
    registry.push(first, 1).unwrap();
    registry.free(first).unwrap();

    // Freeing releases nodes, not the identifier slot
    assert_eq!(registry.create().unwrap(), 1);
    assert!(matches!(
        registry.create(),
        Err(QueueError::LimitReached(_))
    ));
}

#[test]
fn test_freed_queue_behaves_like_fresh_queue() {
    let mut registry = QueueRegistry::new();
    let id = registry.create().unwrap();
    for value in [10, 20, 30] {
        registry.push(id, value).unwrap();
    }

    registry.free(id).unwrap();

    assert_eq!(registry.len(id).unwrap(), 0);
    assert!(registry.is_empty(id).unwrap());
    assert_eq!(registry.pop(id).unwrap(), None);
    assert_eq!(registry.peek(id).unwrap(), None);
    assert_eq!(registry.search(id, 10).unwrap(), None);
}

#[test]
fn test_free_is_idempotent() {
    let mut registry = QueueRegistry::new();
    let id = registry.create().unwrap();
    registry.push(id, 1).unwrap();

    registry.free(id).unwrap();
    registry.free(id).unwrap();
    assert!(registry.is_empty(id).unwrap());
}

#[test]
fn test_freed_queue_accepts_new_pushes() {
    let mut registry = QueueRegistry::new();
    let id = registry.create().unwrap();
    registry.push(id, 1).unwrap();
    registry.free(id).unwrap();

    registry.push(id, 2).unwrap();
    assert_eq!(registry.pop(id).unwrap(), Some(2));
}

#[test]
fn test_teardown_all_clears_registry() {
    let mut registry = QueueRegistry::new();
    let first = registry.create().unwrap();
    let second = registry.create().unwrap();
    registry.push(first, 1).unwrap();
    registry.push(second, 2).unwrap();

    registry.teardown_all();

    assert_eq!(registry.len(first), Err(QueueError::NotFound(first)));
    assert_eq!(registry.len(second), Err(QueueError::NotFound(second)));
    assert_eq!(registry.registry_stats().queues_created, 0);

    // Identifier counter restarts from zero
    assert_eq!(registry.create().unwrap(), 0);
}

#[test]
fn test_registry_stats_counts() {
    let mut registry = QueueRegistry::with_limit(10);
    let first = registry.create().unwrap();
    let second = registry.create().unwrap();
    for value in 0..4 {
        registry.push(first, value).unwrap();
    }
    registry.push(second, 9).unwrap();

    let stats = registry.registry_stats();
    assert_eq!(stats.queues_created, 2);
    assert_eq!(stats.total_elements, 5);
    assert_eq!(stats.limit, 10);
}

#[test]
fn test_queue_stats_snapshot() {
    let mut registry = QueueRegistry::new();
    let id = registry.create().unwrap();
    registry.push(id, 10).unwrap();
    registry.push(id, 20).unwrap();

    let stats = registry.stats(id).unwrap();
    assert_eq!(stats.id, id);
    assert_eq!(stats.length, 2);
}

#[test]
fn test_error_display() {
    assert_eq!(
        QueueError::NotFound(7).to_string(),
        "Queue 7 not found"
    );
    assert_eq!(
        QueueError::LimitReached("cannot create more than 3 queues".into()).to_string(),
        "Queue limit reached: cannot create more than 3 queues"
    );
}
