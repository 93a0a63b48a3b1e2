/*!
 * chainq - Demo Entry Point
 *
 * Exercises the queue API end to end: create, push, peek, pop, search,
 * inspect, free. Teardown of anything left over happens when the registry
 * goes out of scope.
 */

use chainq::QueueRegistry;
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut registry = QueueRegistry::new();
    let id = registry.create()?;

    registry.push(id, 10)?;
    registry.push(id, 20)?;
    registry.push(id, 30)?;
    registry.dump(id)?;

    if let Some(front) = registry.peek(id)? {
        info!("front element: {}", front);
    }

    registry.pop(id)?;
    registry.dump(id)?;

    info!(
        "queue is {}",
        if registry.is_empty(id)? { "empty" } else { "not empty" }
    );

    match registry.search(id, 20)? {
        Some(position) => info!("element 20 found at position {}", position),
        None => info!("element 20 not in queue"),
    }
    info!("queue size: {}", registry.len(id)?);

    registry.free(id)?;
    Ok(())
}
