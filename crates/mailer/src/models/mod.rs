//! Domain models read from the store database.

pub mod event;
pub mod order;

pub use event::Event;
pub use order::{Order, OrderAddress, OrderItem};
