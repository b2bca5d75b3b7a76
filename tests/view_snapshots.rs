//! Snapshot tests pinning the rendered TUI output.
//!
//! Small terminals keep the snapshots readable; the exact border, padding,
//! and controls-bar placement are the contract under test.

use cardfold::model::{Field, Page};
use cardfold::state::NavSession;
use cardfold::view::{render_card, CardStyles, ColorConfig, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines.join("\n")
}

fn app_over(pages: Vec<Page>, width: u16, height: u16) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let session = NavSession::new(pages).expect("non-empty session");
    TuiApp::with_terminal(
        terminal,
        session,
        Duration::from_secs(180),
        ColorConfig::from_env_and_args(true),
    )
    .expect("app opens")
}

fn app_screen(app: &TuiApp<TestBackend>) -> String {
    buffer_text(app.controller().renderer().terminal())
}

#[test]
fn card_with_description_and_inline_field() {
    let mut page = Page::new("Help").with_description("Overview");
    page.push_field(Field::new("Commands", vec!["join".to_string()]));

    let mut terminal = Terminal::new(TestBackend::new(24, 7)).expect("test terminal");
    let styles = CardStyles::with_color_config(ColorConfig::from_env_and_args(true));
    terminal
        .draw(|frame| render_card(frame, frame.area(), &page, &styles, 0))
        .expect("draw");

    assert_snapshot!(buffer_text(&terminal), @r"
    ┌Help──────────────────┐
    │Overview              │
    │                      │
    │Commands: join        │
    │                      │
    │                      │
    └──────────────────────┘
    ");
}

#[test]
fn app_screen_with_controls_bar() {
    let pages = vec![
        Page::text_page("One", "alpha"),
        Page::text_page("Two", "beta"),
    ];
    let app = app_over(pages, 26, 8);

    assert_snapshot!(app_screen(&app), @r"
    ┌One─────────────────────┐
    │alpha                   │
    │                        │
    │                        │
    │                        │
    │                        │
    └────────────────────────┘
      |<  <  Page 1/2  >  >|
    ");
}

#[test]
fn app_screen_after_stepping_forward() {
    let pages = vec![
        Page::text_page("One", "alpha"),
        Page::text_page("Two", "beta"),
    ];
    let mut app = app_over(pages, 26, 8);
    app.on_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
        .expect("key handled");

    assert_snapshot!(app_screen(&app), @r"
    ┌Two─────────────────────┐
    │beta                    │
    │                        │
    │                        │
    │                        │
    │                        │
    └────────────────────────┘
      |<  <  Page 2/2  >  >|
    ");
}

#[test]
fn single_page_screen_has_no_bar() {
    let app = app_over(vec![Page::text_page("Solo", "just one page")], 26, 8);

    assert_snapshot!(app_screen(&app), @r"
    ┌Solo────────────────────┐
    │just one page           │
    │                        │
    │                        │
    │                        │
    │                        │
    └────────────────────────┘
    ");
}
