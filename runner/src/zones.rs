/// Stand-in for the collision/trigger collaborator: three one-shot zones along
/// the course. Crossing the fence halts the runner and starts the speed
/// recovery ramp; crossing the jump zone force-triggers a jump; crossing the
/// last zone raises the session-transition signal. All are inputs to the
/// control core.
#[derive(Debug)]
pub struct TriggerZones {
    fence_zone_x: f32,
    jump_zone_x: f32,
    transition_zone_x: f32,
    fence_fired: bool,
    jump_fired: bool,
    transition_fired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneCrossings {
    pub fence: bool,
    pub jump: bool,
    pub transition: bool,
}

impl TriggerZones {
    pub fn new(fence_zone_x: f32, jump_zone_x: f32, transition_zone_x: f32) -> Self {
        Self {
            fence_zone_x,
            jump_zone_x,
            transition_zone_x,
            fence_fired: false,
            jump_fired: false,
            transition_fired: false,
        }
    }

    /// Report zones newly crossed at horizontal position `x`.
    pub fn check(&mut self, x: f32) -> ZoneCrossings {
        let mut crossings = ZoneCrossings::default();
        if !self.fence_fired && x >= self.fence_zone_x {
            self.fence_fired = true;
            crossings.fence = true;
        }
        if !self.jump_fired && x >= self.jump_zone_x {
            self.jump_fired = true;
            crossings.jump = true;
        }
        if !self.transition_fired && x >= self.transition_zone_x {
            self.transition_fired = true;
            crossings.transition = true;
        }
        crossings
    }
}
