//! Packing of documents and raw lines into bounded pages.

pub mod chunker;
pub mod limits;
pub mod packer;

pub use chunker::{chunk_lines, DEFAULT_CHUNK_LIMIT};
pub use limits::{
    LimitsError, PackLimits, DEFAULT_FIELD_LIMIT, DEFAULT_MAX_FIELDS_PER_PAGE,
    DEFAULT_PAGE_LIMIT,
};
pub use packer::pack_document;
