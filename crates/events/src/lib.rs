//! Subscription bus for the order lifecycle engine.
//!
//! UI observers subscribe here to re-render after every committed
//! transition, rework spawn, or notification read. The bus is an
//! in-process fan-out hub backed by `tokio::sync::broadcast`; it carries
//! no payload state of its own — observers re-read the engine's snapshot
//! after each event.

pub mod bus;

pub use bus::{EngineEvent, EventBus};
