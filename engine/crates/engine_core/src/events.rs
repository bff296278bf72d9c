use mechanics::jump::JumpEvent;

/// Session-level signals raised by external collaborators (trigger zones).
/// The core records and forwards them; scene transition itself is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The actor entered the designated transition zone.
    ZoneReached,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    Jump(JumpEvent),
    Session(SessionEvent),
}

/// Per-tick event queue, drained by external consumers each tick.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<CoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: CoreEvent) {
        self.queue.push(event);
    }

    pub fn drain_all(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_and_drain() {
        let mut bus = EventBus::new();
        bus.emit(CoreEvent::Jump(JumpEvent::Jumped));
        bus.emit(CoreEvent::Session(SessionEvent::ZoneReached));

        let events = bus.drain_all();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], CoreEvent::Jump(JumpEvent::Jumped));
        assert!(bus.is_empty());

        // Drained, nothing left for the next tick.
        assert!(bus.drain_all().is_empty());
    }
}
