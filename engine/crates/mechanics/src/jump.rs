use crate::actor::{Actor, Vec2};
use crate::charge::ChargeAccumulator;

/// Jump cycle phases. One instance per actor; advances at most once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

impl JumpPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            JumpPhase::Grounded => "grounded",
            JumpPhase::PrepareToJump => "prepare_to_jump",
            JumpPhase::Jumping => "jumping",
            JumpPhase::InFlight => "in_flight",
            JumpPhase::Landed => "landed",
        }
    }
}

/// Tuning parameters for the jump impulse.
#[derive(Debug, Clone)]
pub struct JumpTuning {
    /// Base vertical take-off speed before charge scaling.
    pub base_jump_speed: f32,
    /// Extra vertical speed per accumulated boost.
    pub charge_multiplier: f32,
    /// Scalar converting raw speed parameters into effective velocity.
    pub jump_modifier: f32,
    /// Horizontal impulse applied at launch.
    pub horizontal_boost: f32,
    /// Charge value substituted for contact-triggered jumps.
    pub contact_charge: u32,
    /// Optional upper bound on accumulated charge (None = unbounded).
    pub charge_cap: Option<u32>,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            base_jump_speed: 7.0,
            charge_multiplier: 0.5,
            jump_modifier: 1.0,
            horizontal_boost: 5.0,
            contact_charge: 0,
            charge_cap: None,
        }
    }
}

/// Events emitted on phase transitions, for external consumers
/// (audio, scoring, scene transitions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpEvent {
    Jumped,
    /// Emitted on landing with the horizontal distance covered since launch.
    Landed { distance: f32 },
}

/// Per-actor jump-phase tracker. Converts phase transitions and accumulated
/// charge into velocity impulses.
#[derive(Debug, Clone)]
pub struct MotionStateMachine {
    phase: JumpPhase,
    has_jumped: bool,
    charge: ChargeAccumulator,
    tuning: JumpTuning,
    /// Set when the pending launch came from the contact collaborator and
    /// must use the fixed charge value instead of the accumulated one.
    contact_pending: bool,
    launch_x: f32,
}

impl MotionStateMachine {
    pub fn new(tuning: JumpTuning) -> Self {
        let charge = ChargeAccumulator::new(tuning.charge_cap);
        Self {
            phase: JumpPhase::Grounded,
            has_jumped: false,
            charge,
            tuning,
            contact_pending: false,
            launch_x: 0.0,
        }
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn has_jumped(&self) -> bool {
        self.has_jumped
    }

    pub fn charge(&self) -> u32 {
        self.charge.count()
    }

    /// Boost signal from the dispatcher. Under the grounded/not-yet-jumped
    /// precondition this accumulates charge and initiates the jump; any
    /// other call is a silent no-op. Returns whether the signal was accepted.
    ///
    /// Because a boost both charges and initiates, a dispatcher-driven launch
    /// always takes off at charge 1; counts above 1 only reach the impulse
    /// through `contact_charge` tunings or hosts that charge out of band.
    pub fn boost(&mut self) -> bool {
        if self.phase != JumpPhase::Grounded || self.has_jumped {
            return false;
        }
        self.charge.increment();
        self.phase = JumpPhase::PrepareToJump;
        true
    }

    /// Jump initiation from the contact/trigger collaborator. Bypasses
    /// charge scaling (the impulse uses the fixed contact charge) but still
    /// blocks duplicate launches until the next grounded period.
    pub fn contact_jump(&mut self) -> bool {
        if self.has_jumped {
            return false;
        }
        self.contact_pending = true;
        self.phase = JumpPhase::PrepareToJump;
        true
    }

    /// Respawn entry point: back to `Grounded` with charge and flag cleared.
    /// Exposed for the host; the core never calls it on its own.
    pub fn reset(&mut self) {
        self.phase = JumpPhase::Grounded;
        self.has_jumped = false;
        self.contact_pending = false;
        self.charge.reset();
    }

    /// Advance the phase once for this tick, applying the launch impulse at
    /// `PrepareToJump -> Jumping`.
    pub fn update<A: Actor>(&mut self, actor: &mut A) -> Option<JumpEvent> {
        match self.phase {
            JumpPhase::Grounded => None,
            JumpPhase::PrepareToJump => {
                let charge = if self.contact_pending {
                    self.tuning.contact_charge
                } else {
                    self.charge.count()
                };
                let take_off =
                    self.tuning.base_jump_speed + charge as f32 * self.tuning.charge_multiplier;
                actor.set_velocity(Vec2::new(
                    self.tuning.horizontal_boost,
                    take_off * self.tuning.jump_modifier,
                ));
                self.has_jumped = true;
                self.contact_pending = false;
                self.launch_x = actor.position().x;
                self.phase = JumpPhase::Jumping;
                tracing::debug!(charge, "jump impulse applied");
                Some(JumpEvent::Jumped)
            }
            JumpPhase::Jumping => {
                if !actor.is_grounded() {
                    self.phase = JumpPhase::InFlight;
                }
                None
            }
            JumpPhase::InFlight => {
                if actor.is_grounded() {
                    self.phase = JumpPhase::Landed;
                }
                None
            }
            JumpPhase::Landed => {
                self.phase = JumpPhase::Grounded;
                self.charge.reset();
                self.has_jumped = false;
                let distance = actor.position().x - self.launch_x;
                tracing::debug!(distance, "landed");
                Some(JumpEvent::Landed { distance })
            }
        }
    }
}
