use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[derive(Debug, Clone)]
pub struct TickMetrics {
    pub tick_number: u64,
    pub duration_us: u128,
    /// Whether this tick drained a pending command from the slot.
    pub command_seen: bool,
    /// Jump phase after the tick, as a static label.
    pub phase: &'static str,
}

impl TickMetrics {
    pub fn log(&self) {
        const TICK_BUDGET_US: u128 = 16_000;
        if self.duration_us > TICK_BUDGET_US {
            tracing::warn!(
                tick = self.tick_number,
                duration_us = self.duration_us,
                command = self.command_seen,
                phase = self.phase,
                "tick exceeded budget ({}us > {}us)",
                self.duration_us,
                TICK_BUDGET_US
            );
        } else {
            tracing::trace!(
                tick = self.tick_number,
                duration_us = self.duration_us,
                command = self.command_seen,
                phase = self.phase,
                "tick completed"
            );
        }
    }
}
