use tracing::debug;

use crate::queue::WorkQueue;

pub const WILDCARD: char = '*';

pub fn contains_wildcard(name: &str) -> bool {
    name.contains(WILDCARD)
}

/// Re-queue every wildcard name so the next pass looks up what crt.sh has
/// indexed under it. There is no visited set: a service that keeps returning
/// the same wildcard keeps the run going.
pub fn expand(queue: &mut WorkQueue, results: &[String], recurse: bool) -> usize {
    if !recurse {
        return 0;
    }

    let mut pushed = 0;
    for name in results.iter().filter(|n| contains_wildcard(n)) {
        debug!("Queueing wildcard {}", name);
        queue.push(name.as_str());
        pushed += 1;
    }
    pushed
}
