pub mod actor;
pub mod charge;
pub mod controller;
pub mod jump;

pub use actor::{Actor, KinematicBody, Vec2};
pub use charge::ChargeAccumulator;
pub use controller::{ChargeJumpController, InstantJumpController, JumpControl};
pub use jump::{JumpEvent, JumpPhase, JumpTuning, MotionStateMachine};
