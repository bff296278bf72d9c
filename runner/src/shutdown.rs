//! Stop signal for a control session, backed by a single watch channel.
//! Main holds the handle; the listener task and the tick thread each get a
//! signal clone.

use tokio::sync::watch;

#[derive(Clone)]
pub struct StopHandle(watch::Sender<bool>);

#[derive(Clone)]
pub struct StopSignal(watch::Receiver<bool>);

pub fn stop_pair() -> (StopHandle, StopSignal) {
    let (tx, rx) = watch::channel(false);
    (StopHandle(tx), StopSignal(rx))
}

impl StopHandle {
    /// Raise the stop signal for every subscriber.
    pub fn stop(&self) {
        let _ = self.0.send(true);
    }
}

impl StopSignal {
    /// Polled by the tick thread between ticks.
    pub fn is_stopped(&self) -> bool {
        *self.0.borrow()
    }

    /// Await the signal; lets main react to a subsystem-raised stop.
    pub async fn stopped(&mut self) {
        while !*self.0.borrow() {
            if self.0.changed().await.is_err() {
                return; // handle dropped
            }
        }
    }

    /// Raw watch receiver for the net crate's cancellable reads.
    pub fn into_watch(self) -> watch::Receiver<bool> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn stop_is_visible_to_every_subscriber() {
        let (handle, signal) = stop_pair();
        let tick_side = signal.clone();
        let net_side = signal.into_watch();
        assert!(!tick_side.is_stopped());

        handle.stop();
        assert!(tick_side.is_stopped());
        assert!(*net_side.borrow());
    }

    #[tokio::test]
    async fn pending_wait_is_woken_by_stop() {
        let (handle, mut signal) = stop_pair();
        let waiter = tokio::spawn(async move {
            signal.stopped().await;
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.stop();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("stopped() never woke")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_if_handle_is_dropped() {
        let (handle, mut signal) = stop_pair();
        drop(handle);
        // No sender left: treated as stop rather than waiting forever.
        tokio::time::timeout(Duration::from_secs(1), signal.stopped())
            .await
            .expect("stopped() hung after handle drop");
    }
}
