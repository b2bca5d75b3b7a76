//! Rendering seam between navigation state and an output surface.
//!
//! The controller owns a [`Renderer`] and hands it a [`PageView`] on every
//! accepted action. Surfaces differ in what they return from the first
//! draw (a terminal keeps no handle, a message-based surface would keep a
//! message id), so the handle is an associated type.

use std::io;

use crate::model::Page;
use crate::state::NavControls;

/// Cursor position within the paged session, plus which controls are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStatus {
    /// Zero-based index of the rendered page.
    pub cursor: usize,
    /// Total number of pages in the session.
    pub page_count: usize,
    /// Per-action enablement, or `None` when controls are suppressed.
    pub controls: Option<NavControls>,
}

/// Everything a renderer needs to draw one page of a session.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// The page under the cursor.
    pub page: &'a Page,
    /// Where the cursor sits and what the reader can do next.
    pub status: NavStatus,
}

/// An output surface that can draw a page and later redraw it in place.
///
/// Exactly one `update` call follows each accepted navigation action, even
/// when a clamped action leaves the cursor where it was.
pub trait Renderer {
    /// Surface-specific handle to the drawn output.
    type Handle;

    /// Draw the first view, producing the handle later updates target.
    fn render(&mut self, view: PageView<'_>) -> io::Result<Self::Handle>;

    /// Redraw the output identified by `handle` for a new view.
    fn update(&mut self, handle: &mut Self::Handle, view: PageView<'_>) -> io::Result<()>;
}
