//! Integration tests for the TUI shell, driven through `TuiApp` over a
//! `TestBackend` so no real terminal is required.

use cardfold::model::Page;
use cardfold::state::NavSession;
use cardfold::view::{ColorConfig, TuiApp, EXPIRED_NOTICE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::thread;
use std::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn text_pages(bodies: &[&str]) -> Vec<Page> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| Page::text_page(format!("Entry {}", i + 1), *body))
        .collect()
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

fn screen(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.controller().renderer().terminal().backend().buffer();
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

#[test]
fn full_navigation_journey_updates_the_screen() {
    let mut app = app_over(text_pages(&["alpha", "beta", "gamma"]), 40, 10);

    let first = screen(&app);
    assert!(first.contains("Entry 1"));
    assert!(first.contains("alpha"));
    assert!(first.contains("Page 1/3"));

    app.on_key(key(KeyCode::Right)).unwrap();
    app.on_key(key(KeyCode::Right)).unwrap();
    let at_end = screen(&app);
    assert!(at_end.contains("gamma"));
    assert!(at_end.contains("Page 3/3"));

    // Clamped at the end; the screen stays on the last page.
    app.on_key(key(KeyCode::Right)).unwrap();
    assert!(screen(&app).contains("Page 3/3"));

    app.on_key(key(KeyCode::Home)).unwrap();
    let back_home = screen(&app);
    assert!(back_home.contains("alpha"));
    assert!(back_home.contains("Page 1/3"));
}

#[test]
fn vim_style_keys_mirror_the_arrows() {
    let mut app = app_over(text_pages(&["alpha", "beta", "gamma"]), 40, 10);

    app.on_key(key(KeyCode::Char('n'))).unwrap();
    assert_eq!(app.controller().status().cursor, 1);
    app.on_key(key(KeyCode::Char('p'))).unwrap();
    assert_eq!(app.controller().status().cursor, 0);
    app.on_key(key(KeyCode::Char('G'))).unwrap();
    assert_eq!(app.controller().status().cursor, 2);
    app.on_key(key(KeyCode::Char('g'))).unwrap();
    assert_eq!(app.controller().status().cursor, 0);
}

#[test]
fn single_page_shows_no_controls_bar() {
    let app = app_over(text_pages(&["only one"]), 40, 10);

    let rendered = screen(&app);
    assert!(rendered.contains("only one"));
    assert!(!rendered.contains("Page 1/1"));
    assert!(!rendered.contains("|<"));
}

#[test]
fn scrolling_moves_the_card_body_without_touching_the_cursor() {
    let long_body = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8";
    let mut app = app_over(text_pages(&[long_body]), 20, 6);

    assert!(screen(&app).contains("l1"));

    app.on_key(key(KeyCode::Char('j'))).unwrap();
    let scrolled = screen(&app);
    assert!(!scrolled.contains("l1"), "first line scrolled off:\n{scrolled}");
    assert!(scrolled.contains("l4"));
    assert_eq!(app.controller().status().cursor, 0);

    app.on_key(key(KeyCode::Char('k'))).unwrap();
    assert!(screen(&app).contains("l1"));

    // Clamped at the top.
    app.on_key(key(KeyCode::Up)).unwrap();
    assert!(screen(&app).contains("l1"));
}

#[test]
fn changing_page_resets_scroll_but_clamped_actions_keep_it() {
    let mut app = app_over(text_pages(&["a1\na2\na3\na4", "b1\nb2\nb3\nb4"]), 20, 6);

    app.on_key(key(KeyCode::Down)).unwrap();
    assert!(!screen(&app).contains("a1"));

    // Page change: scroll starts over on the new page.
    app.on_key(key(KeyCode::Right)).unwrap();
    assert!(screen(&app).contains("b1"));

    // Scroll down, then hit the clamped edge: same page, scroll kept.
    app.on_key(key(KeyCode::Down)).unwrap();
    assert!(!screen(&app).contains("b1"));
    app.on_key(key(KeyCode::Right)).unwrap();
    let after_clamp = screen(&app);
    assert!(!after_clamp.contains("b1"), "clamped action kept scroll:\n{after_clamp}");
}

#[test]
fn expired_session_ignores_navigation_and_shows_the_notice() {
    let terminal = Terminal::new(TestBackend::new(60, 10)).expect("test terminal");
    let session = NavSession::new(text_pages(&["alpha", "beta"])).expect("non-empty session");
    let mut app = TuiApp::with_terminal(
        terminal,
        session,
        Duration::from_nanos(1),
        ColorConfig::from_env_and_args(true),
    )
    .expect("app opens");

    thread::sleep(Duration::from_millis(5));
    app.on_key(key(KeyCode::Right)).unwrap();

    assert_eq!(app.controller().status().cursor, 0, "navigation ignored");
    let rendered = screen(&app);
    assert!(rendered.contains(EXPIRED_NOTICE));
    assert!(!rendered.contains("Page 1/2"), "notice replaces the bar");

    // Quitting still works after expiry.
    assert!(app.on_key(key(KeyCode::Char('q'))).unwrap());
}

#[test]
fn quit_keys_exit_from_any_page() {
    let mut app = app_over(text_pages(&["alpha", "beta"]), 40, 10);
    app.on_key(key(KeyCode::End)).unwrap();

    assert!(app.on_key(key(KeyCode::Esc)).unwrap());
    assert!(app
        .on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap());
}
