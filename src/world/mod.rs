//! World module - the demo room the mover is hosted in.

mod builder;
mod plugin;

pub use plugin::{setup_level, WorldPlugin};
