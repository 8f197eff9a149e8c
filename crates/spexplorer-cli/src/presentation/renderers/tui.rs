//! TUI Renderer for the interactive explorer
//!
//! Runs the event loop on the calling thread. Activations run as tokio tasks
//! and report back over a channel; the renderer applies them to its
//! [`ExplorerState`], which drops any result whose ticket is stale.
//!
//! ## Design:
//! - Renderer owns the domain state and the loader
//! - `ExplorerComponent` owns UI state (grid scroll) and handles keys
//! - Side effects (refresh, opening a link) come back as actions

use std::io;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use spexplorer_runtime::{ExplorerState, MetadataLoader, RequestTicket};
use spexplorer_types::{ListMetadataEntry, User};
use tokio::runtime::Handle;

use crate::presentation::presenters::{present_header, present_screen};
use crate::presentation::views::tui::components::{ExplorerAction, ExplorerComponent};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Events delivered to the renderer from background tasks
pub enum TuiEvent {
    /// An activation finished
    Loaded {
        ticket: RequestTicket,
        entries: Vec<ListMetadataEntry>,
    },
}

pub struct TuiRenderer {
    loader: MetadataLoader,
    runtime: Handle,
    user: User,
    environment: String,
    state: ExplorerState,
    component: ExplorerComponent,
    tx: Sender<TuiEvent>,
    rx: Receiver<TuiEvent>,
    tick: usize,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(loader: MetadataLoader, runtime: Handle, user: User, environment: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            loader,
            runtime,
            user,
            environment,
            state: ExplorerState::new(),
            component: ExplorerComponent::new(),
            tx,
            rx,
            tick: 0,
            should_quit: false,
        }
    }

    /// Sets up the terminal, runs the loop and always restores the terminal.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        // Mount: the first activation for the starting user
        if self.state.set_user(self.user.clone()) {
            self.activate();
        }

        loop {
            let header = present_header(
                &self.environment,
                &self.state,
                self.loader.source_description(),
            );
            let screen = present_screen(&self.state, header);
            let tick = self.tick;
            let component = &mut self.component;
            terminal.draw(|f| {
                let area = f.area();
                component.render(f, area, &screen, tick);
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(action) = self.component.handle_input(key, &mut self.state) {
                        self.dispatch(action);
                    }
                }
            }

            while let Ok(tui_event) = self.rx.try_recv() {
                match tui_event {
                    TuiEvent::Loaded { ticket, entries } => {
                        self.state.complete(ticket, entries);
                    }
                }
            }

            if self.should_quit {
                break;
            }

            self.tick = self.tick.wrapping_add(1);
        }

        Ok(())
    }

    fn dispatch(&mut self, action: ExplorerAction) {
        match action {
            ExplorerAction::Quit => self.should_quit = true,
            ExplorerAction::Refresh => {
                tracing::info!(user = %self.user.id, "manual refresh");
                self.activate();
            }
            ExplorerAction::OpenLink(url) => {
                if let Err(err) = open_in_browser(&url) {
                    tracing::warn!(url = %url, error = %err, "could not open link");
                }
            }
        }
    }

    /// Starts an activation; the fetch half runs on the tokio runtime.
    fn activate(&mut self) {
        let Some(pending) = self.loader.start(&mut self.state, &self.user) else {
            return;
        };

        let loader = self.loader.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let (ticket, entries) = loader.fetch(pending).await;
            // The receiver is gone once the user quit; nothing left to update
            let _ = tx.send(TuiEvent::Loaded { ticket, entries });
        });
    }
}

/// Opens `url` in a new browser context without blocking the loop.
fn open_in_browser(url: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launching browser for {}", url))?;
    Ok(())
}
