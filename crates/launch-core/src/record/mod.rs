pub mod types;

pub use types::{ActionSlot, ActionStatus, InMemoryRunRepository, LaunchRecord, RunRepository};
