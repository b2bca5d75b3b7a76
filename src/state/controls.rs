//! Per-action control availability.

use crate::model::NavAction;

use super::session::NavSession;

/// Which navigation controls are live at a cursor position.
///
/// Backward controls are disabled on the first page and forward controls
/// on the last, so a reader can see at a glance that an edge was reached.
/// The jump and step control on each side always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    /// Jump to page 0.
    pub first: bool,
    /// Step back one page.
    pub prev: bool,
    /// Step forward one page.
    pub next: bool,
    /// Jump to the final page.
    pub last: bool,
}

impl NavControls {
    /// Controls for `cursor` within a sequence of `page_count` pages.
    pub fn derive(cursor: usize, page_count: usize) -> Self {
        let not_first = cursor > 0;
        let not_last = cursor + 1 < page_count;
        Self {
            first: not_first,
            prev: not_first,
            next: not_last,
            last: not_last,
        }
    }

    /// Controls at the session's cursor, or `None` for a single-page
    /// session, which never shows controls at all.
    pub fn for_session(session: &NavSession) -> Option<Self> {
        (session.page_count() > 1)
            .then(|| Self::derive(session.cursor().get(), session.page_count()))
    }

    /// Whether `action` is currently enabled.
    pub fn is_enabled(&self, action: NavAction) -> bool {
        match action {
            NavAction::First => self.first,
            NavAction::Prev => self.prev,
            NavAction::Next => self.next,
            NavAction::Last => self.last,
        }
    }
}

// ===== Tests =====
