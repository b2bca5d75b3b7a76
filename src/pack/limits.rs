//! Validated size limits for the packer.

use thiserror::Error;

/// Default maximum number of fields placed on one page.
pub const DEFAULT_MAX_FIELDS_PER_PAGE: usize = 2;

/// Default maximum width of one rendered field value.
pub const DEFAULT_FIELD_LIMIT: usize = 1024;

/// Default maximum total width of one page.
pub const DEFAULT_PAGE_LIMIT: usize = 6000;

/// Rejection of a malformed limit set.
///
/// Zero limits would make packing impossible (no page could hold anything),
/// so they are refused at construction rather than silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    /// `max_fields_per_page` was zero.
    #[error("max_fields_per_page must be at least 1")]
    ZeroMaxFields,

    /// `field_limit` was zero.
    #[error("field_limit must be at least 1")]
    ZeroFieldLimit,

    /// `page_limit` was zero.
    #[error("page_limit must be at least 1")]
    ZeroPageLimit,
}

/// The three limits every packed page must satisfy.
///
/// Callers construct limits per call; there is no process-wide limit state.
/// Construction validates that all limits are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackLimits {
    max_fields_per_page: usize,
    field_limit: usize,
    page_limit: usize,
}

impl PackLimits {
    /// Build a validated limit set.
    pub fn new(
        max_fields_per_page: usize,
        field_limit: usize,
        page_limit: usize,
    ) -> Result<Self, LimitsError> {
        if max_fields_per_page == 0 {
            return Err(LimitsError::ZeroMaxFields);
        }
        if field_limit == 0 {
            return Err(LimitsError::ZeroFieldLimit);
        }
        if page_limit == 0 {
            return Err(LimitsError::ZeroPageLimit);
        }
        Ok(Self {
            max_fields_per_page,
            field_limit,
            page_limit,
        })
    }

    /// Maximum number of fields on one page.
    pub fn max_fields_per_page(&self) -> usize {
        self.max_fields_per_page
    }

    /// Maximum width of one rendered field value.
    pub fn field_limit(&self) -> usize {
        self.field_limit
    }

    /// Maximum total width of one page.
    pub fn page_limit(&self) -> usize {
        self.page_limit
    }
}

impl Default for PackLimits {
    fn default() -> Self {
        Self {
            max_fields_per_page: DEFAULT_MAX_FIELDS_PER_PAGE,
            field_limit: DEFAULT_FIELD_LIMIT,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

// ===== Tests =====
