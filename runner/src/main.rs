mod config;
mod shutdown;
mod zones;

use std::sync::Arc;
use std::time::Instant;

use engine_core::dispatch::CommandDispatcher;
use engine_core::events::{CoreEvent, SessionEvent};
use engine_core::tick::TickLoop;
use mechanics::actor::{Actor, KinematicBody};
use mechanics::controller::{ChargeJumpController, JumpControl};
use mechanics::jump::JumpEvent;
use net::slot::CommandSlot;

use crate::config::{parse_cli_args, RunnerConfig};
use crate::shutdown::StopSignal;
use crate::zones::TriggerZones;

#[tokio::main]
async fn main() {
    observability::init_logging();

    let config = parse_cli_args();
    tracing::info!("Runner control server starting...");

    let (stop_handle, stop_signal) = shutdown::stop_pair();
    let slot = Arc::new(CommandSlot::new());

    // Command listener task. Bind failure is fatal: it takes the whole
    // process down through the stop channel.
    let listener_slot = slot.clone();
    let listener_stop = stop_signal.clone();
    let listener_handle = stop_handle.clone();
    let addr = config.net.addr();
    tokio::spawn(async move {
        if let Err(e) =
            net::listener::run_command_listener(addr, listener_slot, listener_stop.into_watch())
                .await
        {
            tracing::error!(error = %e, "command listener failed");
            listener_handle.stop();
        }
    });

    // Tick thread (blocking).
    let tick_stop = stop_signal.clone();
    let tick_handle = std::thread::spawn(move || {
        run_tick_thread(slot, config, tick_stop);
    });

    let mut main_stop = stop_signal;
    tokio::select! {
        _ = wait_for_signal() => {
            tracing::info!("Shutdown signal received, stopping server...");
            stop_handle.stop();
        }
        _ = main_stop.stopped() => {
            tracing::info!("Subsystem requested stop, shutting down...");
        }
    }

    let _ = tick_handle.join();
    tracing::info!("Server stopped.");
}

/// Wait for SIGINT or SIGTERM (Unix) or Ctrl+C (all platforms).
async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to register SIGINT");
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM");
        tokio::select! {
            _ = sigint.recv() => { tracing::info!("Received SIGINT"); }
            _ = sigterm.recv() => { tracing::info!("Received SIGTERM"); }
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
        tracing::info!("Received Ctrl+C");
    }
}

fn run_tick_thread(slot: Arc<CommandSlot>, config: RunnerConfig, stop: StopSignal) {
    let body = KinematicBody::new(config.jump.max_speed, config.jump.gravity);
    let controller = ChargeJumpController::new(body, config.to_jump_tuning());
    let dispatcher = CommandDispatcher::new(slot);
    let mut tick_loop = TickLoop::new(config.to_tick_config(), controller, dispatcher);
    let mut zones = TriggerZones::new(
        config.world.fence_zone_x,
        config.world.jump_zone_x,
        config.world.transition_zone_x,
    );

    let tick_duration = tick_loop.config.tick_duration();
    let dt = tick_duration.as_secs_f32();

    while !stop.is_stopped() {
        let tick_start = Instant::now();

        advance_world(&mut tick_loop, &mut zones, &config, dt);

        for event in tick_loop.event_bus.drain_all() {
            match event {
                CoreEvent::Jump(JumpEvent::Jumped) => {
                    tracing::info!(tick = tick_loop.current_tick, "jumped");
                }
                CoreEvent::Jump(JumpEvent::Landed { distance }) => {
                    tracing::info!(tick = tick_loop.current_tick, distance, "landed");
                }
                CoreEvent::Session(SessionEvent::ZoneReached) => {
                    tracing::info!(tick = tick_loop.current_tick, "transition zone reached");
                }
            }
        }

        let elapsed = tick_start.elapsed();
        if elapsed < tick_duration {
            std::thread::sleep(tick_duration - elapsed);
        }
    }

    tracing::info!("tick thread stopped");
}

/// One world tick: control step, position integration, then trigger zones.
fn advance_world(
    tick_loop: &mut TickLoop<ChargeJumpController<KinematicBody>>,
    zones: &mut TriggerZones,
    config: &RunnerConfig,
    dt: f32,
) {
    let metrics = tick_loop.step();
    tick_loop.controller.actor.integrate(dt);

    let crossings = zones.check(tick_loop.controller.actor.position().x);
    if crossings.fence {
        tracing::info!(tick = tick_loop.current_tick, "fence hit, recovering speed");
        tick_loop
            .controller
            .actor
            .halt_and_recover(config.world.recovery_ticks);
    }
    if crossings.jump {
        tick_loop.controller.contact_jump();
    }
    if crossings.transition {
        tick_loop
            .event_bus
            .emit(CoreEvent::Session(SessionEvent::ZoneReached));
    }
    metrics.log();
}
