/// Minimal 2D vector for velocities and positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Capability surface of a controllable body as seen by the control core.
/// Integration of position against velocity happens outside the core.
pub trait Actor {
    fn is_grounded(&self) -> bool;
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, v: Vec2);

    /// Hard stop: zero both velocity axes.
    fn stop(&mut self) {
        self.set_velocity(Vec2::ZERO);
    }
}

/// Simple kinematic body: constant forward run while grounded, gravity in
/// flight, landing on a flat ground plane. Enough for the demo binary and
/// tests; a real game supplies its own `Actor`.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f32,
    pub gravity: f32,
    grounded: bool,
    ground_y: f32,
    /// Forward-speed recovery ramp after a halt, in remaining/total ticks.
    recovery_left: u32,
    recovery_window: u32,
}

impl KinematicBody {
    pub fn new(max_speed: f32, gravity: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            max_speed,
            gravity,
            grounded: true,
            ground_y: 0.0,
            recovery_left: 0,
            recovery_window: 0,
        }
    }

    /// Halt forward motion and ramp it back to full over `window` ticks.
    pub fn halt_and_recover(&mut self, window: u32) {
        self.velocity.x = 0.0;
        self.recovery_left = window;
        self.recovery_window = window;
    }

    /// Current forward-speed factor in [0, 1].
    fn run_factor(&self) -> f32 {
        if self.recovery_window == 0 || self.recovery_left == 0 {
            return 1.0;
        }
        1.0 - self.recovery_left as f32 / self.recovery_window as f32
    }

    /// Advance one interval of `dt` seconds. While grounded the body runs
    /// forward at `max_speed` (scaled by the recovery ramp); in flight it
    /// keeps its launch velocity and falls under gravity until it crosses
    /// the ground plane.
    pub fn integrate(&mut self, dt: f32) {
        if self.grounded {
            if self.velocity.y > 0.0 {
                // Launch impulse applied this tick: leave the ground.
                self.grounded = false;
            } else {
                self.velocity.x = self.max_speed * self.run_factor();
                self.velocity.y = 0.0;
                self.recovery_left = self.recovery_left.saturating_sub(1);
            }
        }
        if !self.grounded {
            self.velocity.y -= self.gravity * dt;
        }
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        if !self.grounded && self.position.y <= self.ground_y && self.velocity.y <= 0.0 {
            self.position.y = self.ground_y;
            self.velocity.y = 0.0;
            self.grounded = true;
        }
    }

    /// Force the grounded flag, for hosts with their own collision model.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }
}

impl Actor for KinematicBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, v: Vec2) {
        self.velocity = v;
    }
}
