pub mod store;
pub mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{LaunchEvent, LaunchEventKind};
