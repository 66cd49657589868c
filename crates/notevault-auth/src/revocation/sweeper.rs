//! Periodic eviction of revocation entries whose tokens have expired anyway.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use notevault_core::error::AppError;
use notevault_core::traits::RevocationStore;

/// Evicts revoked tokens once their own `exp` has passed.
///
/// An expired-and-revoked token is rejected by signature/expiry checks
/// alone, so eviction never changes an authentication outcome.
#[derive(Clone)]
pub struct RevocationSweeper {
    store: Arc<dyn RevocationStore>,
    interval: Duration,
}

impl std::fmt::Debug for RevocationSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationSweeper")
            .field("interval", &self.interval)
            .finish()
    }
}

impl RevocationSweeper {
    /// Creates a sweeper for `store` running every `interval`.
    pub fn new(store: Arc<dyn RevocationStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Runs one sweep. Returns the number of entries evicted.
    pub async fn run_once(&self) -> Result<usize, AppError> {
        let evicted = self.store.evict_expired(Utc::now().timestamp()).await?;
        if evicted > 0 {
            info!(evicted, "Revocation sweep completed");
        }
        Ok(evicted)
    }

    /// Spawns the sweep loop onto the tokio runtime. A zero interval spawns
    /// nothing.
    pub fn spawn(self) -> Option<JoinHandle<()>> {
        if self.interval.is_zero() {
            info!("Revocation sweeper disabled");
            return None;
        }

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_once().await {
                    error!(error = %e, "Revocation sweep failed");
                }
            }
        }))
    }
}
