use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::error::NetError;
use crate::protocol::Command;
use crate::slot::CommandSlot;

const READ_BUF_SIZE: usize = 1024;

/// Run the command listener: bind, accept exactly one controller client, and
/// publish each decoded command into the shared slot until shutdown is
/// signaled. Zero-length reads are retried rather than treated as a session
/// end.
///
/// Bind failure is returned to the caller (fatal at startup). Mid-stream
/// socket errors end remote input for the session but are not errors at
/// process scope: there is no reconnection by design.
pub async fn run_command_listener(
    addr: String,
    slot: Arc<CommandSlot>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), NetError> {
    let listener = TcpListener::bind(&addr).await.map_err(|source| NetError::Bind {
        addr: addr.clone(),
        source,
    })?;
    tracing::info!("command listener on {}", addr);

    let (mut stream, peer_addr) = tokio::select! {
        accepted = listener.accept() => accepted?,
        _ = wait_shutdown(&mut shutdown) => {
            tracing::info!("shutdown before a controller connected");
            return Ok(());
        }
    };
    tracing::info!(%peer_addr, "controller connected");

    let mut buf = [0u8; READ_BUF_SIZE];
    loop {
        let read = tokio::select! {
            read = stream.read(&mut buf) => read,
            _ = wait_shutdown(&mut shutdown) => {
                tracing::info!("shutdown requested, closing controller connection");
                break;
            }
        };
        match read {
            Ok(0) => {
                // A zero-length read is not a session end: the controller may
                // have half-closed its write side and still be in play. Keep
                // polling; only shutdown or a socket error ends the session.
                tracing::trace!(%peer_addr, "zero-length read, retrying");
                continue;
            }
            Ok(n) => match std::str::from_utf8(&buf[..n]) {
                Ok(text) => {
                    if let Some(cmd) = Command::parse(text) {
                        tracing::debug!(command = ?cmd, "command received");
                        slot.publish(cmd);
                    }
                }
                Err(e) => {
                    tracing::warn!(bytes = n, error = %e, "dropping non-UTF-8 payload");
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "socket error, remote input ends for this session");
                break;
            }
        }
    }
    // Stream and listener drop here on every exit path.
    Ok(())
}

async fn wait_shutdown(rx: &mut watch::Receiver<bool>) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            return; // sender dropped
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpStream;

    use super::*;

    /// Reserve a free loopback address for the listener under test.
    async fn free_addr() -> String {
        let placeholder = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = placeholder.local_addr().unwrap();
        drop(placeholder);
        addr.to_string()
    }

    #[tokio::test]
    async fn commands_reach_the_slot() {
        let addr = free_addr().await;
        let slot = Arc::new(CommandSlot::new());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run_command_listener(
            addr.clone(),
            slot.clone(),
            shutdown_rx,
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;

        let mut stream = TcpStream::connect(&addr).await.unwrap();
        stream.write_all(b"1").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(slot.take(), Some(Command::Boost));

        stream.write_all(b"0\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(slot.take(), Some(Command::Stop));

        drop(stream);
        handle.abort();
    }

    #[tokio::test]
    async fn unknown_tokens_are_published_as_unknown() {
        let addr = free_addr().await;
        let slot = Arc::new(CommandSlot::new());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run_command_listener(
            addr.clone(),
            slot.clone(),
            shutdown_rx,
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;

        let mut stream = TcpStream::connect(&addr).await.unwrap();
        stream.write_all(b"boost").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(slot.take(), Some(Command::Unknown("boost".to_string())));

        drop(stream);
        handle.abort();
    }

    #[tokio::test]
    async fn shutdown_unblocks_a_pending_read() {
        let addr = free_addr().await;
        let slot = Arc::new(CommandSlot::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run_command_listener(
            addr.clone(),
            slot.clone(),
            shutdown_rx,
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Connect but never write, leaving the listener blocked in read.
        let _stream = TcpStream::connect(&addr).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        shutdown_tx.send(true).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("listener did not exit after shutdown")
            .unwrap();
        assert!(result.is_ok());

        // Socket released: the address can be bound again.
        let rebind = TcpListener::bind(&addr).await;
        assert!(rebind.is_ok());
    }

    #[tokio::test]
    async fn half_close_keeps_the_session_alive() {
        let addr = free_addr().await;
        let slot = Arc::new(CommandSlot::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run_command_listener(
            addr.clone(),
            slot.clone(),
            shutdown_rx,
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;

        let mut stream = TcpStream::connect(&addr).await.unwrap();
        stream.write_all(b"1").await.unwrap();
        stream.shutdown().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        // The command written before the half-close was delivered, and the
        // listener is still running rather than ended by the zero-length reads.
        assert_eq!(slot.take(), Some(Command::Boost));
        assert!(!handle.is_finished());

        shutdown_tx.send(true).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("listener did not exit after shutdown")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap().to_string();

        let slot = Arc::new(CommandSlot::new());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let result = run_command_listener(addr, slot, shutdown_rx).await;
        assert!(matches!(result, Err(NetError::Bind { .. })));
    }
}
