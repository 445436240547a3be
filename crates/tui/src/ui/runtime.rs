//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Own the terminal (raw mode, alternate screen, mouse capture).
//! - Forward input from a dedicated blocking reader onto a channel.
//! - Route keys to the focused component and execute returned `Effect`s.
//! - Tick on a fixed interval so deferred work (the post-navigation
//!   scroll) fires without user input.
//! - Render via `MainView` only when the app marks itself dirty.

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use trailhead_registry::WidgetRegistry;
use trailhead_types::{Effect, Msg};
use trailhead_util::ProgressStore;

use crate::app::App;
use crate::ui::main_component::MainView;

const TICK_INTERVAL: Duration = Duration::from_millis(125);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Forward terminal input over a channel from a dedicated blocking task.
///
/// Polling with a timeout lets the reader notice a closed channel and shut
/// down instead of blocking forever on `read()`.
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        if sender.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if sender.blocking_send(ev).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "failed to read terminal event");
                    break;
                }
            },
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(%error, "failed to poll terminal events");
                break;
            }
        }
    });
    receiver
}

/// Entry point called from `lib::run`: terminal setup, event processing,
/// teardown.
pub async fn run_app(registry: WidgetRegistry, progress: Arc<ProgressStore>) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_event_loop(registry, progress).await;

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    result
}

async fn run_event_loop(registry: WidgetRegistry, progress: Arc<ProgressStore>) -> Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(backend)?;

    let mut app = App::new(registry, progress);
    let mut view = MainView::new();
    view.init()?;
    if app.ctx.debug_enabled {
        tracing::debug!(
            listeners = app.ctx.bus.listener_count(),
            sections = app.sections.len(),
            "components mounted"
        );
    }

    let mut input = spawn_input_reader();
    let mut tick = time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        if app.take_dirty() {
            terminal.draw(|frame| view.render(frame, &mut app))?;
        }

        let mut effects: Vec<Effect> = Vec::new();
        tokio::select! {
            maybe_event = input.recv() => {
                let Some(ev) = maybe_event else {
                    break;
                };
                match ev {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => effects.push(Effect::Quit),
                            KeyCode::Char('c')
                                if key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                effects.push(Effect::Quit);
                            }
                            KeyCode::Tab => effects.push(Effect::FocusNext),
                            KeyCode::BackTab => effects.push(Effect::FocusPrev),
                            KeyCode::Char(c @ ('n' | 'p' | 'o')) => {
                                effects.extend(app.handle_global_key(c));
                            }
                            _ => {
                                effects.extend(view.handle_key_events(&mut app, key));
                            }
                        }
                        app.mark_dirty();
                    }
                    Event::Mouse(mouse) => {
                        effects.extend(view.handle_mouse_events(&mut app, mouse));
                        app.mark_dirty();
                    }
                    Event::Resize(width, height) => {
                        app.update(&Msg::Resize(width, height));
                    }
                    _ => {}
                }
            }
            _ = tick.tick() => {
                app.update(&Msg::Tick);
            }
            _ = signal::ctrl_c() => {
                effects.push(Effect::Quit);
            }
        }

        for effect in effects {
            if app.apply_effect(effect) {
                return Ok(());
            }
        }
    }

    Ok(())
}
