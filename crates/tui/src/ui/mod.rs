//! UI rendering module for the Trailhead TUI.
//!
//! Provides the main layout, components, theme, and the event-loop
//! runtime.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
