use std::sync::Arc;

use mechanics::controller::JumpControl;
use net::protocol::Command;
use net::slot::CommandSlot;

/// Per-tick bridge between the shared command slot and the active controller.
///
/// Runs once per fixed tick, decoupling network arrival cadence from
/// simulation cadence. Drains at most one command; an empty slot is a
/// guaranteed no-op. The dispatcher cannot fault on malformed or absent
/// input — every boundary condition degrades to "no command this tick".
pub struct CommandDispatcher {
    slot: Arc<CommandSlot>,
}

impl CommandDispatcher {
    pub fn new(slot: Arc<CommandSlot>) -> Self {
        Self { slot }
    }

    /// Drain-and-apply the pending command, if any. Returns the command
    /// observed this tick.
    pub fn dispatch<C: JumpControl>(&self, controller: &mut C) -> Option<Command> {
        let cmd = self.slot.take()?;
        match &cmd {
            Command::Boost => controller.boost(),
            Command::Stop => controller.stop(),
            Command::Unknown(token) => {
                tracing::warn!(%token, "unrecognized command dropped");
            }
        }
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use mechanics::actor::{Actor, KinematicBody, Vec2};
    use mechanics::controller::{ChargeJumpController, JumpControl};
    use mechanics::jump::{JumpPhase, JumpTuning};

    use super::*;

    fn setup() -> (Arc<CommandSlot>, CommandDispatcher, ChargeJumpController<KinematicBody>) {
        let slot = Arc::new(CommandSlot::new());
        let dispatcher = CommandDispatcher::new(slot.clone());
        let controller =
            ChargeJumpController::new(KinematicBody::new(7.0, 9.8), JumpTuning::default());
        (slot, dispatcher, controller)
    }

    #[test]
    fn empty_slot_is_a_no_op() {
        let (_slot, dispatcher, mut controller) = setup();
        for _ in 0..10 {
            assert_eq!(dispatcher.dispatch(&mut controller), None);
        }
        assert_eq!(controller.machine.phase(), JumpPhase::Grounded);
        assert_eq!(controller.machine.charge(), 0);
        assert!(!controller.machine.has_jumped());
    }

    #[test]
    fn boost_while_grounded_charges_and_initiates() {
        let (slot, dispatcher, mut controller) = setup();
        slot.publish(Command::Boost);
        assert_eq!(dispatcher.dispatch(&mut controller), Some(Command::Boost));
        assert_eq!(controller.machine.charge(), 1);
        assert_eq!(controller.machine.phase(), JumpPhase::PrepareToJump);
    }

    #[test]
    fn burst_collapses_to_most_recent_command() {
        let (slot, dispatcher, mut controller) = setup();
        slot.publish(Command::Boost);
        slot.publish(Command::Boost);
        slot.publish(Command::Boost);
        // Three writes before one drain: exactly one boost observed.
        assert_eq!(dispatcher.dispatch(&mut controller), Some(Command::Boost));
        assert_eq!(controller.machine.charge(), 1);
        assert_eq!(dispatcher.dispatch(&mut controller), None);
    }

    #[test]
    fn boost_after_launch_changes_nothing() {
        let (slot, dispatcher, mut controller) = setup();
        slot.publish(Command::Boost);
        dispatcher.dispatch(&mut controller);
        controller.update(); // impulse applied, has_jumped set

        slot.publish(Command::Boost);
        dispatcher.dispatch(&mut controller);
        assert_eq!(controller.machine.charge(), 1);
    }

    #[test]
    fn stop_zeroes_velocity_without_touching_phase() {
        let (slot, dispatcher, mut controller) = setup();
        slot.publish(Command::Boost);
        dispatcher.dispatch(&mut controller);
        controller.update();
        controller.actor.set_grounded(false);
        controller.update();
        assert_eq!(controller.machine.phase(), JumpPhase::InFlight);

        slot.publish(Command::Stop);
        dispatcher.dispatch(&mut controller);
        assert_eq!(controller.actor.velocity(), Vec2::ZERO);
        assert_eq!(controller.machine.phase(), JumpPhase::InFlight);
    }

    #[test]
    fn unknown_command_changes_no_state() {
        let (slot, dispatcher, mut controller) = setup();
        slot.publish(Command::Unknown("jump".to_string()));
        let seen = dispatcher.dispatch(&mut controller);
        assert_eq!(seen, Some(Command::Unknown("jump".to_string())));
        assert_eq!(controller.machine.phase(), JumpPhase::Grounded);
        assert_eq!(controller.machine.charge(), 0);
        assert_eq!(controller.actor.velocity(), Vec2::ZERO);
    }
}
