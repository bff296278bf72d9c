use std::time::{Duration, Instant};

use mechanics::controller::JumpControl;
use observability::TickMetrics;

use crate::dispatch::CommandDispatcher;
use crate::events::{CoreEvent, EventBus};

/// Tick loop configuration.
#[derive(Debug, Clone, Copy)]
pub struct TickConfig {
    /// Ticks per second.
    pub tps: u32,
    /// Maximum ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tps: 60,
            max_ticks: 0,
        }
    }
}

impl TickConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tps as f64)
    }
}

/// The fixed-tick simulation loop: dispatch the pending command, then advance
/// the controller's state machine. There is no mid-tick cancellation point;
/// a started tick runs to completion.
pub struct TickLoop<C: JumpControl> {
    pub controller: C,
    pub dispatcher: CommandDispatcher,
    pub event_bus: EventBus,
    pub config: TickConfig,
    pub current_tick: u64,
}

impl<C: JumpControl> TickLoop<C> {
    pub fn new(config: TickConfig, controller: C, dispatcher: CommandDispatcher) -> Self {
        Self {
            controller,
            dispatcher,
            event_bus: EventBus::new(),
            config,
            current_tick: 0,
        }
    }

    /// Execute a single tick: drain slot -> apply command -> advance phase ->
    /// queue events -> metrics.
    pub fn step(&mut self) -> TickMetrics {
        let start = Instant::now();

        let command = self.dispatcher.dispatch(&mut self.controller);
        if let Some(event) = self.controller.update() {
            self.event_bus.emit(CoreEvent::Jump(event));
        }

        self.current_tick += 1;
        TickMetrics {
            tick_number: self.current_tick,
            duration_us: start.elapsed().as_micros(),
            command_seen: command.is_some(),
            phase: self.controller.phase().as_str(),
        }
    }

    /// Run until `max_ticks` (if nonzero), sleeping out each interval.
    /// Hosts that need a shutdown poll drive `step` themselves.
    pub fn run(&mut self) -> Vec<TickMetrics> {
        let mut all_metrics = Vec::new();
        let tick_duration = self.config.tick_duration();

        loop {
            if self.config.max_ticks > 0 && self.current_tick >= self.config.max_ticks {
                break;
            }

            let tick_start = Instant::now();
            let metrics = self.step();
            metrics.log();
            all_metrics.push(metrics);

            for event in self.event_bus.drain_all() {
                tracing::debug!(?event, "core event");
            }

            let elapsed = tick_start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            }
        }

        all_metrics
    }
}
