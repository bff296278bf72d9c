use crate::actor::{Actor, Vec2};
use crate::jump::{JumpEvent, JumpPhase, JumpTuning, MotionStateMachine};

/// Shared capability surface of a controllable runner. The dispatcher works
/// against this trait with explicit dispatch; there are no conversions
/// between controller variants.
pub trait JumpControl {
    /// Boost signal from the command dispatcher.
    fn boost(&mut self);
    /// Zero the actor's velocity, independent of jump phase.
    fn stop(&mut self);
    /// Jump initiation from the contact/trigger collaborator.
    fn contact_jump(&mut self);
    /// Respawn entry point.
    fn reset(&mut self);
    fn is_grounded(&self) -> bool;
    fn phase(&self) -> JumpPhase;
    /// Per-tick update; returns an event when a notable transition fired.
    fn update(&mut self) -> Option<JumpEvent>;
}

/// Primary controller variant: boosts accumulate charge while grounded and
/// scale the next jump impulse.
#[derive(Debug)]
pub struct ChargeJumpController<A: Actor> {
    pub actor: A,
    pub machine: MotionStateMachine,
}

impl<A: Actor> ChargeJumpController<A> {
    pub fn new(actor: A, tuning: JumpTuning) -> Self {
        Self {
            actor,
            machine: MotionStateMachine::new(tuning),
        }
    }
}

impl<A: Actor> JumpControl for ChargeJumpController<A> {
    fn boost(&mut self) {
        self.machine.boost();
    }

    fn stop(&mut self) {
        self.actor.stop();
    }

    fn contact_jump(&mut self) {
        self.machine.contact_jump();
    }

    fn reset(&mut self) {
        self.machine.reset();
    }

    fn is_grounded(&self) -> bool {
        self.actor.is_grounded()
    }

    fn phase(&self) -> JumpPhase {
        self.machine.phase()
    }

    fn update(&mut self) -> Option<JumpEvent> {
        self.machine.update(&mut self.actor)
    }
}

/// Secondary variant: a boost while grounded launches immediately at base
/// speed, with no charge accumulation. One launch per grounded period.
#[derive(Debug)]
pub struct InstantJumpController<A: Actor> {
    pub actor: A,
    tuning: JumpTuning,
    has_jumped: bool,
    airborne: bool,
}

impl<A: Actor> InstantJumpController<A> {
    pub fn new(actor: A, tuning: JumpTuning) -> Self {
        Self {
            actor,
            tuning,
            has_jumped: false,
            airborne: false,
        }
    }
}

impl<A: Actor> JumpControl for InstantJumpController<A> {
    fn boost(&mut self) {
        if !self.actor.is_grounded() || self.has_jumped {
            return;
        }
        let v = self.actor.velocity();
        self.actor.set_velocity(Vec2::new(
            v.x,
            self.tuning.base_jump_speed * self.tuning.jump_modifier,
        ));
        self.has_jumped = true;
    }

    fn stop(&mut self) {
        self.actor.stop();
    }

    fn contact_jump(&mut self) {
        self.boost();
    }

    fn reset(&mut self) {
        self.has_jumped = false;
        self.airborne = false;
    }

    fn is_grounded(&self) -> bool {
        self.actor.is_grounded()
    }

    fn phase(&self) -> JumpPhase {
        if self.actor.is_grounded() {
            JumpPhase::Grounded
        } else {
            JumpPhase::InFlight
        }
    }

    fn update(&mut self) -> Option<JumpEvent> {
        if !self.actor.is_grounded() {
            self.airborne = true;
            return None;
        }
        if self.airborne {
            self.airborne = false;
            self.has_jumped = false;
        }
        None
    }
}
