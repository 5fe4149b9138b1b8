//! Core module - states, events, and fundamental systems.
//!
//! Everything else in the crate hangs off the states defined here.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
