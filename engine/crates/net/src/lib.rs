pub mod error;
pub mod listener;
pub mod protocol;
pub mod slot;

pub use error::NetError;
pub use protocol::Command;
pub use slot::CommandSlot;
