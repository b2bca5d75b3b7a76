//! TUI rendering and terminal management (impure shell).
//!
//! The terminal surface implements [`Renderer`], so the session controller
//! drives it exactly like any other output: one draw when the session
//! opens, one redraw per accepted action. Scrolling and the expiry notice
//! are view-local and redraw from the last delivered view.

mod card;
mod controls_bar;
mod styles;

pub use card::{card_row_count, render_card};
pub use controls_bar::{
    button_label, controls_text, page_indicator, render_controls, EXPIRED_NOTICE,
};
pub use styles::{CardStyles, ColorConfig, ControlStyles};

use crate::model::{NavAction, Page, SessionError};
use crate::render::{NavStatus, PageView, Renderer};
use crate::state::{NavSession, SessionController};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Session error surfaced by the controller.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Terminal renderer showing one card plus a controls bar.
///
/// Keeps a copy of the last delivered view so view-local changes (scroll,
/// the expiry notice, resize) can repaint without a new navigation event.
pub struct FrameRenderer<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    card_styles: CardStyles,
    control_styles: ControlStyles,
    last: Option<(Page, NavStatus)>,
    scroll: u16,
    expired: bool,
}

impl<B> FrameRenderer<B>
where
    B: ratatui::backend::Backend,
{
    /// Renderer over an initialized terminal.
    pub fn new(terminal: Terminal<B>, color: ColorConfig) -> Self {
        Self {
            terminal,
            card_styles: CardStyles::with_color_config(color),
            control_styles: ControlStyles::with_color_config(color),
            last: None,
            scroll: 0,
            expired: false,
        }
    }

    /// Repaint the last delivered view, if any.
    pub fn redraw(&mut self) -> io::Result<()> {
        self.draw_view()
    }

    /// Scroll the card body up one row and repaint.
    pub fn scroll_up(&mut self) -> io::Result<()> {
        if self.scroll > 0 {
            self.scroll -= 1;
            self.draw_view()?;
        }
        Ok(())
    }

    /// Scroll the card body down one row and repaint.
    ///
    /// Clamps against the wrapped row count at the current width, so the
    /// final body row stays reachable even when long lines wrap.
    pub fn scroll_down(&mut self) -> io::Result<()> {
        let Some((page, _)) = self.last.as_ref() else {
            return Ok(());
        };
        let width = self.terminal.size()?.width;
        let rows = card_row_count(page, width);
        let max = u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX);
        if self.scroll < max {
            self.scroll += 1;
            self.draw_view()?;
        }
        Ok(())
    }

    /// Swap the controls bar for the expiry notice and repaint.
    pub fn mark_expired(&mut self) -> io::Result<()> {
        if !self.expired {
            self.expired = true;
            self.draw_view()?;
        }
        Ok(())
    }

    /// Whether the expiry notice is showing.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// The backing terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn draw_view(&mut self) -> io::Result<()> {
        let Some((page, status)) = self.last.as_ref() else {
            return Ok(());
        };
        let card_styles = &self.card_styles;
        let control_styles = &self.control_styles;
        let scroll = self.scroll;
        let expired = self.expired;

        self.terminal.draw(|frame| {
            let [card_area, bar_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                    .areas(frame.area());
            render_card(frame, card_area, page, card_styles, scroll);
            render_controls(frame, bar_area, status, expired, control_styles);
        })?;
        Ok(())
    }
}

impl<B> Renderer for FrameRenderer<B>
where
    B: ratatui::backend::Backend,
{
    type Handle = ();

    fn render(&mut self, view: PageView<'_>) -> io::Result<()> {
        self.last = Some((view.page.clone(), view.status));
        self.scroll = 0;
        self.draw_view()
    }

    fn update(&mut self, _handle: &mut (), view: PageView<'_>) -> io::Result<()> {
        // Scroll survives clamped edge actions but resets on a page change.
        let moved = self
            .last
            .as_ref()
            .is_none_or(|(_, last)| last.cursor != view.status.cursor);
        if moved {
            self.scroll = 0;
        }
        self.last = Some((view.page.clone(), view.status));
        self.draw_view()
    }
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    controller: SessionController<FrameRenderer<B>>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and
    /// renders the session's first page.
    pub fn new(
        session: NavSession,
        timeout: Duration,
        color: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::with_terminal(terminal, session, timeout, color)
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q, Esc, or Ctrl+C). Idle ticks only
    /// check expiry, so an untouched session consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(500);

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.on_key(key)? {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => {
                        self.controller.renderer_mut().redraw()?;
                    }
                    _ => {}
                }
            } else {
                self.tick()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an application over an existing terminal and render the
    /// session's first page.
    pub fn with_terminal(
        terminal: Terminal<B>,
        session: NavSession,
        timeout: Duration,
        color: ColorConfig,
    ) -> Result<Self, TuiError> {
        let renderer = FrameRenderer::new(terminal, color);
        let controller = SessionController::open(session, renderer, timeout)?;
        Ok(Self { controller })
    }

    /// The controller driving the renderer.
    pub fn controller(&self) -> &SessionController<FrameRenderer<B>> {
        &self.controller
    }

    /// Handle a single key event.
    ///
    /// Returns `true` when the app should quit.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures; rejected navigation (expired session,
    /// single page) is absorbed as a no-op.
    pub fn on_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => self.controller.renderer_mut().scroll_up()?,
            KeyCode::Down | KeyCode::Char('j') => self.controller.renderer_mut().scroll_down()?,
            code => {
                if let Some(action) = nav_action_for(code) {
                    self.dispatch(action)?;
                }
            }
        }
        Ok(false)
    }

    fn dispatch(&mut self, action: NavAction) -> Result<(), TuiError> {
        match self.controller.handle(action) {
            Ok(_) => Ok(()),
            Err(SessionError::Expired) => {
                // The first rejected action after expiry swaps in the notice.
                self.controller.renderer_mut().mark_expired()?;
                Ok(())
            }
            Err(SessionError::SinglePage) => {
                debug!(%action, "no controls on a single page");
                Ok(())
            }
            Err(err @ SessionError::Render(_)) => Err(err.into()),
        }
    }

    fn tick(&mut self) -> Result<(), TuiError> {
        if self.controller.is_expired() && !self.controller.renderer().expired() {
            self.controller.renderer_mut().mark_expired()?;
        }
        Ok(())
    }
}

fn nav_action_for(code: KeyCode) -> Option<NavAction> {
    match code {
        KeyCode::Home | KeyCode::Char('g') => Some(NavAction::First),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(NavAction::Prev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(NavAction::Next),
        KeyCode::End | KeyCode::Char('G') => Some(NavAction::Last),
        _ => None,
    }
}

/// Initialize and run the TUI for a navigated session.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and restores the terminal on the way out.
///
/// Note: logging must be initialized by the caller.
pub fn run_with_session(
    session: NavSession,
    timeout: Duration,
    color: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(session, timeout, color) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state.
    restore_terminal()?;

    result
}

/// Restore the terminal to its normal state.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Tests =====
