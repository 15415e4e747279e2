//! Runtime: event loop and input routing for the page.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over input, the pulse ticker, catalog
//!   reloads and Ctrl+C.
//! - Route input to `MainView` and apply the returned `Effect`s.
//!
//! A dedicated blocking input thread polls `crossterm` and forwards events
//! over a channel. The pulse ticker fires every 500 ms and drives the badge
//! and chat button dots.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_catalog::CatalogWatcher;
use folio_types::{ContentCatalog, Effect, Msg};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// Interval between pulse ticks.
const PULSE_INTERVAL: Duration = Duration::from_millis(500);
const INPUT_POLL: Duration = Duration::from_millis(16);

/// Options for a TUI session.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Theme id or alias chosen on the command line.
    pub theme: Option<String>,
    /// Catalog rendered at startup.
    pub catalog: ContentCatalog,
    /// Catalog file to watch for changes.
    pub watch: Option<PathBuf>,
}

/// Spawns a blocking input thread that forwards `crossterm` events.
///
/// Mouse move events are throttled to one per poll interval. The thread
/// exits once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let mut last_mouse_move = Instant::now();
        while !sender.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            };
            let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
            if is_mouse_move {
                if last_mouse_move.elapsed() < INPUT_POLL {
                    continue;
                }
                last_mouse_move = Instant::now();
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus so layout changes (menu open, compact mode) are reflected.
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(&*app, Some(old_focus));
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Starts the catalog watcher, logging and continuing without it on failure.
fn start_watcher(options: &RunOptions, sender: mpsc::UnboundedSender<ContentCatalog>) -> Option<CatalogWatcher> {
    let path = options.watch.as_ref()?;
    match CatalogWatcher::spawn(path, options.catalog.clone(), sender) {
        Ok(watcher) => {
            info!(path = %watcher.path().display(), "Watching catalog for changes");
            Some(watcher)
        }
        Err(error) => {
            warn!(error = %error, "Catalog watcher unavailable; continuing without live reload");
            None
        }
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop and restores the terminal on exit.
pub async fn run_app(options: RunOptions) -> Result<()> {
    let loaded = theme::load(options.theme.as_deref());

    let (catalog_sender, mut catalog_receiver) = mpsc::unbounded_channel();
    let _watcher = start_watcher(&options, catalog_sender);

    let (width, height) = crossterm::terminal::size()?;
    let mut app = App::new(loaded, options.catalog, width, height);
    info!(theme = app.ctx.theme_id, width, height, "Starting folio");
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;
    let input_receiver = spawn_input_thread();

    let result = event_loop(&mut terminal, &mut app, &mut main_view, input_receiver, &mut catalog_receiver).await;

    app.nav_bar.unmount();
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    mut input_receiver: mpsc::Receiver<Event>,
    catalog_receiver: &mut mpsc::UnboundedReceiver<ContentCatalog>,
) -> Result<()> {
    let mut ticker = time::interval(PULSE_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare sizes each turn.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("Input channel closed");
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => main_view.handle_message(app, Msg::Tick),
            Some(catalog) = catalog_receiver.recv() => {
                info!("Catalog reloaded");
                main_view.handle_message(app, Msg::CatalogReloaded(Box::new(catalog)))
            }
            _ = signal::ctrl_c() => break,
        };

        if app.apply_effects(effects) {
            break;
        }

        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            app.update(&Msg::Resize(w, h));
        }

        render(terminal, app, main_view)?;
    }
    Ok(())
}
