//! Observer hooks for host applications.
//!
//! Extensions read engine state through snapshots and never reach into core
//! paths directly.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
