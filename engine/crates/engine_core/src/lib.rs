pub mod dispatch;
pub mod events;
pub mod tick;

pub use dispatch::CommandDispatcher;
pub use events::{CoreEvent, EventBus, SessionEvent};
pub use tick::{TickConfig, TickLoop};
