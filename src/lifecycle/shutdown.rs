//! Shutdown coordination.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// Built on a watch channel so listeners are cloneable and a listener created
/// after the trigger still observes the shutdown.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Create a listener for the shutdown signal.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle awaited by long-running tasks.
#[derive(Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once shutdown is triggered or the coordinator is dropped.
    pub async fn recv(mut self) {
        loop {
            if *self.rx.borrow() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Coordinator gone; treat as shutdown.
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_releases_listeners() {
        let shutdown = Shutdown::new();
        let listener = shutdown.listener();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), listener.recv())
            .await
            .expect("listener should resolve after trigger");
    }

    #[tokio::test]
    async fn late_listener_sees_earlier_trigger() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        let listener = shutdown.listener();
        tokio::time::timeout(Duration::from_secs(1), listener.recv())
            .await
            .expect("late listener should resolve immediately");
    }

    #[tokio::test]
    async fn dropped_coordinator_releases_listeners() {
        let shutdown = Shutdown::new();
        let listener = shutdown.listener();
        drop(shutdown);
        tokio::time::timeout(Duration::from_secs(1), listener.recv())
            .await
            .expect("listener should resolve when coordinator is dropped");
    }
}
