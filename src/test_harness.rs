//! Shared helpers for unit and whitebox tests.
//!
//! Provides a recording renderer for exercising the session controller
//! without a terminal, plus buffer inspection and page fixtures.

use std::io;

use ratatui::buffer::Buffer;

use crate::model::Page;
use crate::render::{NavStatus, PageView, Renderer};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep expectations clean.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// A view captured by [`RecordingRenderer`].
#[derive(Debug, Clone)]
pub struct RecordedFrame {
    /// The page that was drawn.
    pub page: Page,
    /// The status line the view carried.
    pub status: NavStatus,
}

/// Renderer that records every draw instead of touching a terminal.
///
/// `fail_next_render` and `fail_next_update` inject one I/O failure each,
/// for exercising the controller's error paths.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Views passed to `render`, oldest first.
    pub renders: Vec<RecordedFrame>,
    /// Views passed to `update`, oldest first.
    pub updates: Vec<RecordedFrame>,
    /// Fail the next `render` call.
    pub fail_next_render: bool,
    /// Fail the next `update` call.
    pub fail_next_update: bool,
}

impl RecordingRenderer {
    /// A fresh recorder with nothing captured.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    type Handle = ();

    fn render(&mut self, view: PageView<'_>) -> io::Result<()> {
        if self.fail_next_render {
            self.fail_next_render = false;
            return Err(io::Error::other("injected render failure"));
        }
        self.renders.push(RecordedFrame {
            page: view.page.clone(),
            status: view.status,
        });
        Ok(())
    }

    fn update(&mut self, _handle: &mut (), view: PageView<'_>) -> io::Result<()> {
        if self.fail_next_update {
            self.fail_next_update = false;
            return Err(io::Error::other("injected update failure"));
        }
        self.updates.push(RecordedFrame {
            page: view.page.clone(),
            status: view.status,
        });
        Ok(())
    }
}

/// Pages titled `Page 0` through `Page n-1`, for cursor tests.
pub fn pages_of(n: usize) -> Vec<Page> {
    (0..n).map(|i| Page::new(format!("Page {i}"))).collect()
}

