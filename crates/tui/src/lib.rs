//! # Trailhead TUI Library
//!
//! Terminal user interface for the Trailhead learning roadmap. The screen
//! is a page of independently mounted regions (the roadmap navigator, one
//! section per module, and a footer) that all track a single "currently
//! active section" value without a shared owner: the navigator (or any
//! region with a navigation control) updates its own copy and publishes
//! the new value on a page-scoped [`bus::SelectionBus`], and every mounted
//! region converges on the published selection.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture: each region is a
//! component that handles events against its own state and renders itself,
//! reporting side effects back to the runtime as `Effect`s.

mod app;
pub mod bus;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use trailhead_registry::WidgetRegistry;
use trailhead_util::ProgressStore;

/// Runs the main TUI application loop.
///
/// Initializes the terminal, mounts all components against a fresh
/// selection bus, and drives the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event-loop runtime
/// issues. Progress-store write failures are not among them; those are
/// swallowed at the call site and logged.
pub async fn run(registry: WidgetRegistry, progress: Arc<ProgressStore>) -> Result<()> {
    ui::runtime::run_app(registry, progress).await
}
