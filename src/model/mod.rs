//! Domain model types (pure).
//!
//! All types in this module are pure data: documents and fields as given by
//! content sources, pages as produced by the packer, the navigation action
//! vocabulary, the shared width measurement, and the error taxonomy.

pub mod action;
pub mod document;
pub mod error;
pub mod measure;
pub mod page;

// Re-export for convenience
pub use action::{NavAction, UnrecognizedAction};
pub use document::{Document, Field, DEFAULT_JOINER};
pub use error::{AppError, InputError, PackError, SessionError};
pub use measure::text_width;
pub use page::Page;
