//! Component trait for the Trailhead UI.
//!
//! Components are self-contained UI regions that handle their own events
//! and rendering while integrating with the application through a
//! consistent interface. They own only local behavior; durable state lives
//! on [`crate::app::App`] and cross-cutting changes are reported back as
//! `Effect`s rather than applied directly.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use trailhead_types::{Effect, Msg};

use crate::app::App;

/// A UI region with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. `init()` runs once after construction
/// 2. Input arrives via `handle_key_events` / `handle_mouse_events` while
///    the component has focus
/// 3. `update()` processes application messages (ticks, resizes)
/// 4. `render()` draws into the provided area every frame
pub(crate) trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle key events when this component has focus. Returns effects
    /// for the runtime to execute.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events targeting this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state from an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Implementations should be
    /// side-effect free except for frame drawing and recording layout
    /// geometry needed by later event handling.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
