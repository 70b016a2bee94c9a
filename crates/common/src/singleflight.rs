//! Single-flight request coalescing.
//!
//! When several callers ask for the same key at the same time, exactly one
//! of them (the leader) performs the underlying load; the rest subscribe
//! and receive a clone of the leader's result. Used in front of the remote
//! data service so a burst of identical reads costs one upstream call.

use std::future::Future;
use std::hash::Hash;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::broadcast;

/// Coalesces concurrent loads for the same key into a single execution.
///
/// `V` must be `Clone` because followers receive a copy of the leader's
/// result; fallible loads use `V = Result<T, E>` with a cloneable error.
#[derive(Debug)]
pub struct SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    in_flight: DashMap<K, broadcast::Sender<V>>,
}

/// Removes the in-flight entry when the leader finishes or is cancelled.
///
/// Without this, a cancelled leader would leave followers waiting on a
/// channel that never produces a value.
struct FlightGuard<'a, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    map: &'a DashMap<K, broadcast::Sender<V>>,
    key: &'a K,
}

impl<K, V> Drop for FlightGuard<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn drop(&mut self) {
        self.map.remove(self.key);
    }
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self { in_flight: DashMap::new() }
    }

    /// Runs `load` for `key`, coalescing with any in-flight load of the
    /// same key.
    ///
    /// The first caller becomes the leader and executes `load`; concurrent
    /// callers wait and receive a clone of the leader's result. If the
    /// leader is cancelled before producing a value, one of the waiters
    /// retries as the new leader, so `load` must be callable more than once.
    pub async fn run<F, Fut>(&self, key: K, load: F) -> V
    where
        F: Fn() -> Fut,
        Fut: Future<Output = V>,
    {
        loop {
            let leader_tx = match self.in_flight.entry(key.clone()) {
                Entry::Occupied(entry) => {
                    let mut rx = entry.get().subscribe();
                    drop(entry);
                    match rx.recv().await {
                        Ok(value) => return value,
                        // Leader dropped without sending; take over
                        Err(_) => continue,
                    }
                }
                Entry::Vacant(entry) => {
                    let (tx, _rx) = broadcast::channel(1);
                    entry.insert(tx.clone());
                    tx
                }
            };

            let guard = FlightGuard { map: &self.in_flight, key: &key };
            let value = load().await;
            // Unregister before broadcasting so late subscribers start a
            // fresh flight instead of missing the message
            drop(guard);
            let _ = leader_tx.send(value.clone());
            return value;
        }
    }

    /// Number of keys currently in flight.
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

impl<K, V> Default for SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
