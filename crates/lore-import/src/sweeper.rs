//! Background task that drops expired previews on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use lore_observability::events;

use crate::registry::PreviewRegistry;

/// Owns the sweeper task. Dropping the handle stops the task.
#[derive(Debug)]
pub struct SweeperHandle {
    task: JoinHandle<()>,
}

impl SweeperHandle {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the sweeper on the current Tokio runtime. Panics if called
/// outside a runtime.
pub fn spawn_preview_sweeper(registry: Arc<PreviewRegistry>, interval: Duration) -> SweeperHandle {
    let period = interval.max(Duration::from_millis(1));
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // first tick completes immediately

        loop {
            ticker.tick().await;
            let removed = registry.sweep(Utc::now());
            events::previews_swept(removed, registry.len());
        }
    });
    SweeperHandle { task }
}
