//! Controls bar: navigation buttons and the page indicator.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::NavAction;
use crate::render::NavStatus;

use super::styles::ControlStyles;

/// Notice shown in place of the controls once the session expires.
pub const EXPIRED_NOTICE: &str = "Session expired, navigation disabled (q quits)";

/// Button label for a navigation action.
pub fn button_label(action: NavAction) -> &'static str {
    match action {
        NavAction::First => "|<",
        NavAction::Prev => "<",
        NavAction::Next => ">",
        NavAction::Last => ">|",
    }
}

/// One-based `Page i/N` indicator text.
pub fn page_indicator(cursor: usize, page_count: usize) -> String {
    format!("Page {}/{}", cursor + 1, page_count)
}

/// Unstyled text form of the whole bar.
///
/// Suppressed controls produce an empty string; the bar shows nothing at
/// all on a single-page session.
pub fn controls_text(status: &NavStatus) -> String {
    if status.controls.is_none() {
        return String::new();
    }
    format!(
        "{}  {}  {}  {}  {}",
        button_label(NavAction::First),
        button_label(NavAction::Prev),
        page_indicator(status.cursor, status.page_count),
        button_label(NavAction::Next),
        button_label(NavAction::Last),
    )
}

/// Render the controls bar for `status`.
///
/// Disabled buttons stay visible but greyed out. After expiry the whole
/// bar is replaced by [`EXPIRED_NOTICE`].
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    status: &NavStatus,
    expired: bool,
    styles: &ControlStyles,
) {
    if expired {
        let notice = Paragraph::new(Line::styled(EXPIRED_NOTICE, styles.notice()))
            .alignment(Alignment::Center);
        frame.render_widget(notice, area);
        return;
    }

    let Some(controls) = status.controls else {
        return;
    };

    let spacer = Span::raw("  ");
    let spans = vec![
        button_span(NavAction::First, controls.is_enabled(NavAction::First), styles),
        spacer.clone(),
        button_span(NavAction::Prev, controls.is_enabled(NavAction::Prev), styles),
        spacer.clone(),
        Span::styled(
            page_indicator(status.cursor, status.page_count),
            styles.indicator(),
        ),
        spacer.clone(),
        button_span(NavAction::Next, controls.is_enabled(NavAction::Next), styles),
        spacer,
        button_span(NavAction::Last, controls.is_enabled(NavAction::Last), styles),
    ];

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

fn button_span(action: NavAction, enabled: bool, styles: &ControlStyles) -> Span<'static> {
    Span::styled(button_label(action), styles.for_action(action, enabled))
}

// ===== Tests =====
