use std::sync::{Mutex, PoisonError};

use crate::protocol::Command;

/// Single-slot cell between the listener task and the tick thread.
///
/// Holds at most one pending command: a publish unconditionally replaces any
/// unread prior value (last-write-wins, no queueing), and a drain
/// takes-and-clears atomically. Bursts between two drains therefore collapse
/// to the most recent command; that lossy policy is deliberate.
#[derive(Debug, Default)]
pub struct CommandSlot {
    cell: Mutex<Option<Command>>,
}

impl CommandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot's content with `cmd`, discarding any unread value.
    pub fn publish(&self, cmd: Command) {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        *cell = Some(cmd);
    }

    /// Take-and-clear the pending command, if any.
    pub fn take(&self) -> Option<Command> {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        cell.take()
    }

    pub fn is_empty(&self) -> bool {
        let cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        cell.is_none()
    }
}
