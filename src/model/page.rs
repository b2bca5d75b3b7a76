//! A size-bounded rendering unit derived from a document.

use super::document::Field;
use super::measure::text_width;

/// One page of packed content.
///
/// Pages produced by the packer repeat the document title; the description
/// appears only on the first page. A page's size is the width of its title
/// and description plus the sizes of its fields, and packed pages never
/// exceed the page limit they were built under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    description: Option<String>,
    fields: Vec<Field>,
}

impl Page {
    /// Create a page with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Create a page carrying a plain text body and no fields.
    ///
    /// Used for pages built from chunked line input, where the whole page is
    /// one block of text.
    pub fn text_page(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title).with_description(body)
    }

    /// Append one field.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The page's fields, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields on the page.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The page's size: title width, description width, and field sizes.
    pub fn size(&self) -> usize {
        let header = text_width(&self.title)
            + self.description.as_deref().map(text_width).unwrap_or(0);
        header + self.fields.iter().map(Field::size).sum::<usize>()
    }
}

// ===== Tests =====
