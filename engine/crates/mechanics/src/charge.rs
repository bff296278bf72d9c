/// Counter of boost signals received during the current grounded period.
///
/// The grounded/not-yet-jumped precondition is enforced by the state machine
/// that owns this counter; a rejected increment is a silent no-op, never an
/// error. Reset happens only on the `Landed -> Grounded` transition (and the
/// respawn entry point), never on external request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeAccumulator {
    count: u32,
    cap: Option<u32>,
}

impl ChargeAccumulator {
    /// `cap = None` leaves accumulation unbounded.
    pub fn new(cap: Option<u32>) -> Self {
        Self { count: 0, cap }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        let next = self.count.saturating_add(1);
        self.count = match self.cap {
            Some(cap) => next.min(cap),
            None => next,
        };
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl Default for ChargeAccumulator {
    fn default() -> Self {
        Self::new(None)
    }
}
