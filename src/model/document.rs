//! Document and field content model.
//!
//! A [`Document`] is the unit of input to the packer: a title, an optional
//! description, and an ordered list of named [`Field`]s, each holding one or
//! more atomic text items. Items are never split; all pagination happens at
//! item boundaries.

use super::measure::{joined_width, text_width};
use serde::Deserialize;

/// Default separator placed between items when a field value is rendered.
pub const DEFAULT_JOINER: &str = "\n\n";

fn default_inline() -> bool {
    true
}

fn default_joiner() -> String {
    DEFAULT_JOINER.to_string()
}

/// A named, ordered group of text items rendered together.
///
/// Two fields with equal name, inline flag, and joiner are *mergeable*: the
/// packer may combine their items into one rendered field. The rendered
/// value is the items joined with the joiner; the field's size is the width
/// of its name plus the width of that value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    name: String,
    items: Vec<String>,
    #[serde(default = "default_inline")]
    inline: bool,
    #[serde(default = "default_joiner")]
    joiner: String,
}

impl Field {
    /// Create a field with the default inline flag (`true`) and joiner
    /// ([`DEFAULT_JOINER`]).
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
            inline: default_inline(),
            joiner: default_joiner(),
        }
    }

    /// Override the inline flag.
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Override the item joiner.
    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's items, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the field renders inline.
    pub fn inline(&self) -> bool {
        self.inline
    }

    /// The separator placed between items in the rendered value.
    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    /// The rendered value: items joined with the joiner.
    pub fn value(&self) -> String {
        self.items.join(&self.joiner)
    }

    /// Width of the rendered value, without building it.
    pub fn value_width(&self) -> usize {
        joined_width(&self.items, &self.joiner)
    }

    /// The field's size: name width plus value width.
    pub fn size(&self) -> usize {
        text_width(&self.name) + self.value_width()
    }

    /// True when `other`'s items may be merged into this field.
    ///
    /// Mergeability requires equal name, inline flag, and joiner.
    pub fn mergeable_with(&self, other: &Field) -> bool {
        self.name == other.name && self.inline == other.inline && self.joiner == other.joiner
    }
}

/// The full hierarchical content to be paginated.
///
/// Only the first page derived from a document carries the description; the
/// title is repeated on every page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl Document {
    /// Create a document with no description and no fields.
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

    /// Replace the field list.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Append one field.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// All items across all fields, in field order then item order.
    ///
    /// This is the sequence pagination must preserve.
    pub fn flattened_items(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flat_map(|f| f.items.iter().map(String::as_str))
    }
}

// ===== Tests =====
