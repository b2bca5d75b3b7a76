//! Cursor-addressed page sequence.
//!
//! A session is a non-empty `Vec<Page>` plus a cursor that is always in
//! bounds. Movement is clamping: actions past either edge land on the edge
//! page instead of wrapping or failing, and the page count never changes
//! after construction.

use crate::model::{NavAction, Page};

/// Cursor into a non-empty page sequence, always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor(usize);

impl PageCursor {
    /// Cursor at `index`, or `None` when out of bounds for `page_count`.
    pub fn new(index: usize, page_count: usize) -> Option<Self> {
        (index < page_count).then_some(Self(index))
    }

    /// Cursor at page 0.
    pub fn first() -> Self {
        Self(0)
    }

    /// Zero-based page index.
    pub fn get(self) -> usize {
        self.0
    }

    /// True at page 0.
    pub fn is_first(self) -> bool {
        self.0 == 0
    }

    /// True at the final page of a sequence of `page_count` pages.
    pub fn is_last(self, page_count: usize) -> bool {
        self.0 + 1 >= page_count
    }

    /// The cursor after `action`, clamped to `[0, page_count - 1]`.
    pub fn apply(self, action: NavAction, page_count: usize) -> Self {
        let last = page_count.saturating_sub(1);
        let index = match action {
            NavAction::First => 0,
            NavAction::Prev => self.0.saturating_sub(1),
            NavAction::Next => (self.0 + 1).min(last),
            NavAction::Last => last,
        };
        Self(index)
    }
}

/// A packed page sequence and the cursor into it.
#[derive(Debug, Clone)]
pub struct NavSession {
    pages: Vec<Page>,
    cursor: PageCursor,
}

impl NavSession {
    /// Session opened at page 0, or `None` for an empty sequence.
    pub fn new(pages: Vec<Page>) -> Option<Self> {
        if pages.is_empty() {
            None
        } else {
            Some(Self {
                pages,
                cursor: PageCursor::first(),
            })
        }
    }

    /// Current cursor.
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Number of pages, at least 1.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page under the cursor.
    pub fn page(&self) -> &Page {
        &self.pages[self.cursor.0]
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Move the cursor by `action`, returning the index it lands on.
    ///
    /// Edge actions that cannot move land on the same index; the call is
    /// still a successful transition.
    pub fn apply(&mut self, action: NavAction) -> usize {
        self.cursor = self.cursor.apply(action, self.pages.len());
        self.cursor.0
    }
}

// ===== Tests =====
