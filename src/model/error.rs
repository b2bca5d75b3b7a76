//! Error taxonomy for the pagination engine.
//!
//! Errors form a small hierarchy built with `thiserror`, composing through
//! `From` conversions so call sites propagate with `?`:
//!
//! - [`AppError`] - top-level error wrapping all domain failures
//!   - [`InputError`] - document/line loading failures (missing file, bad JSON, empty input)
//!   - [`PackError`] - capacity rejections from the packer
//!   - [`SessionError`] - rejected navigation events and render failures
//!   - `std::io::Error` - terminal failures from the TUI shell
//!
//! All errors are local to one document or one session; none is fatal to the
//! host process. Capacity errors are rejections, never silent truncation:
//! content that cannot satisfy the limits is refused with the offending
//! field named, because splitting an item would break item atomicity.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the input document or line list.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The document cannot be packed under the configured limits.
    #[error("Failed to pack document: {0}")]
    Pack(#[from] PackError),

    /// A navigation event was rejected or its render-update failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading document or line input.
///
/// Distinguishes specific failure modes rather than collapsing everything
/// into generic I/O errors, so the CLI can print targeted messages.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given input path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided: no path argument and stdin is a TTY.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The input was readable but contained nothing to page through.
    #[error("Input contained no content to page")]
    EmptyInput,

    /// The input was not a valid document.
    ///
    /// The parser error message is carried as a string so callers do not
    /// carry `serde_json` error state around.
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// The JSON parser error message.
        message: String,
    },

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capacity rejections from the packer.
///
/// The packer never splits an item and never truncates text, so content
/// that cannot fit under the limits is rejected with the offending widths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A single item's value is wider than the field limit.
    ///
    /// Such an item could never be placed: the field limit binds every
    /// rendered field value, including a field holding just this item.
    #[error("Item in field '{field}' is {width} chars wide, over the field limit of {limit}")]
    ItemTooWide {
        /// Name of the field holding the oversized item.
        field: String,
        /// Width of the item's value.
        width: usize,
        /// The configured field limit.
        limit: usize,
    },

    /// An item cannot fit even on a fresh continuation page.
    ///
    /// Raised after the packer has already closed the current page and
    /// retried on a page holding only the title.
    #[error(
        "Item in field '{field}' needs {needed} chars but a fresh page offers only {available}"
    )]
    ItemNeverFits {
        /// Name of the field holding the item.
        field: String,
        /// Field name width plus item width.
        needed: usize,
        /// Page limit minus the title width.
        available: usize,
    },

    /// The title and description alone exceed the page limit.
    #[error("Title and description alone are {width} chars, over the page limit of {limit}")]
    HeaderTooWide {
        /// Combined width of title and description.
        width: usize,
        /// The configured page limit.
        limit: usize,
    },
}

/// Rejected navigation events and failed render-updates.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Navigation against a single-page session.
    ///
    /// Single-page sessions expose no controls and accept no events.
    #[error("Navigation is disabled for a single-page session")]
    SinglePage,

    /// Navigation against an expired session.
    ///
    /// The event is a no-op: no cursor change, no render.
    #[error("Session expired after inactivity")]
    Expired,

    /// The render surface failed to apply an update.
    ///
    /// Propagated untouched; the core performs no retry.
    #[error("Render update failed: {0}")]
    Render(#[from] std::io::Error),
}

// ===== Tests =====
