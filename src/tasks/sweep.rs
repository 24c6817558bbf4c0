//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiry on read only reclaims entries that are looked up again;
//! entries that are set and then forgotten would accumulate forever
//! without this sweep.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep takes the cache lock only for the synchronous
/// scan. A panic inside one sweep iteration is caught and logged so it
/// cannot take down future iterations or the host process. The sweep never
/// evicts live entries; capacity is enforced in `set` alone.
///
/// # Arguments
/// * `cache` - Shared handle to the cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during graceful shutdown.
pub fn spawn_sweeper<T>(
    cache: Arc<Mutex<TtlCache<T>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Clone + Send + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let outcome = {
                let mut guard = cache.lock().await;
                catch_unwind(AssertUnwindSafe(|| guard.cleanup_expired()))
            };

            match outcome {
                Ok(removed) if removed > 0 => {
                    info!("TTL sweep: removed {} expired entries", removed);
                }
                Ok(_) => {
                    debug!("TTL sweep: no expired entries found");
                }
                Err(_) => {
                    error!("TTL sweep iteration panicked; continuing");
                }
            }
        }
    })
}
