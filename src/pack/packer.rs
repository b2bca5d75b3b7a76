//! Greedy single-pass packing of a document into size-bounded pages.
//!
//! The packer walks the document's items in order, merging consecutive
//! items of mergeable fields into a running field while the merged value
//! stays under the field limit and the open page stays under the page
//! limit. The instant either limit would be crossed the running field is
//! sealed onto the page and a fresh run begins, so one source field can
//! spill across pages at item boundaries. Items are never split and never
//! reordered.

use crate::model::measure::text_width;
use crate::model::{Document, Field, PackError, Page};
use tracing::debug;

use super::limits::PackLimits;

/// A merged field being accumulated.
///
/// Holds the identity of the source field it grew from plus the running
/// value width, so merge checks never re-join the items.
struct FieldRun {
    name: String,
    name_width: usize,
    inline: bool,
    joiner: String,
    joiner_width: usize,
    items: Vec<String>,
    value_width: usize,
}

impl FieldRun {
    fn start(field: &Field, item: &str) -> Self {
        Self {
            name: field.name().to_string(),
            name_width: text_width(field.name()),
            inline: field.inline(),
            joiner: field.joiner().to_string(),
            joiner_width: text_width(field.joiner()),
            items: vec![item.to_string()],
            value_width: text_width(item),
        }
    }

    /// True when items of `field` may be merged into this run.
    fn accepts(&self, field: &Field) -> bool {
        self.name == field.name()
            && self.inline == field.inline()
            && self.joiner == field.joiner()
    }

    /// Value width if an item of `item_width` chars were merged in.
    fn merged_value_width(&self, item_width: usize) -> usize {
        self.value_width + self.joiner_width + item_width
    }

    fn push(&mut self, item: &str, item_width: usize) {
        self.value_width = self.merged_value_width(item_width);
        self.items.push(item.to_string());
    }

    fn size(&self) -> usize {
        self.name_width + self.value_width
    }

    fn into_field(self) -> Field {
        Field::new(self.name, self.items)
            .with_inline(self.inline)
            .with_joiner(self.joiner)
    }
}

/// The page currently being filled.
struct PageBuilder {
    page: Page,
    width: usize,
}

impl PageBuilder {
    /// First page: title plus description.
    fn front(doc: &Document) -> Self {
        let mut page = Page::new(doc.title());
        if let Some(desc) = doc.description() {
            page = page.with_description(desc);
        }
        let width = page.size();
        Self { page, width }
    }

    /// Later pages: title only.
    fn continuation(title: &str) -> Self {
        let page = Page::new(title);
        let width = page.size();
        Self { page, width }
    }

    fn field_count(&self) -> usize {
        self.page.field_count()
    }

    fn push_run(&mut self, run: FieldRun) {
        self.width += run.size();
        self.page.push_field(run.into_field());
    }

    fn finish(self) -> Page {
        self.page
    }
}

/// Pack a document into the minimal greedy sequence of pages under `limits`.
///
/// Every item is placed exactly once, in source order. The result is never
/// empty: a document with no items yields one page carrying just the title
/// and description.
///
/// # Errors
///
/// Rejects content that cannot satisfy the limits without splitting an
/// item: an item value wider than the field limit, an item that cannot fit
/// even on a fresh page, or a title/description header wider than the page
/// limit. Nothing is truncated.
pub fn pack_document(doc: &Document, limits: &PackLimits) -> Result<Vec<Page>, PackError> {
    let title_width = text_width(doc.title());
    let header_width = title_width + doc.description().map(text_width).unwrap_or(0);
    if header_width > limits.page_limit() {
        return Err(PackError::HeaderTooWide {
            width: header_width,
            limit: limits.page_limit(),
        });
    }

    let mut pages: Vec<Page> = Vec::new();
    let mut current = PageBuilder::front(doc);
    let mut run: Option<FieldRun> = None;

    for field in doc.fields() {
        for item in field.items() {
            let item_width = text_width(item);

            // Merge into the open run while both limits hold.
            let merged = match run.as_mut() {
                Some(open) if open.accepts(field) => {
                    let merged_value = open.merged_value_width(item_width);
                    let page_width = current.width + open.name_width + merged_value;
                    if merged_value <= limits.field_limit()
                        && page_width <= limits.page_limit()
                    {
                        open.push(item, item_width);
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            };
            if merged {
                continue;
            }

            // Identity changed or a limit would be crossed: seal the run.
            if let Some(sealed) = run.take() {
                current.push_run(sealed);
                if current.field_count() == limits.max_fields_per_page() {
                    let width = current.width;
                    let fields = current.field_count();
                    let finished =
                        std::mem::replace(&mut current, PageBuilder::continuation(doc.title()));
                    debug!(page = pages.len(), fields, width, "page filled");
                    pages.push(finished.finish());
                }
            }

            // Start a fresh run with this item.
            if item_width > limits.field_limit() {
                return Err(PackError::ItemTooWide {
                    field: field.name().to_string(),
                    width: item_width,
                    limit: limits.field_limit(),
                });
            }
            let needed = text_width(field.name()) + item_width;
            if current.width + needed > limits.page_limit() {
                let available = limits.page_limit().saturating_sub(title_width);
                if needed > available {
                    return Err(PackError::ItemNeverFits {
                        field: field.name().to_string(),
                        needed,
                        available,
                    });
                }
                // Close the open page early; the item retries on a fresh one.
                let width = current.width;
                let fields = current.field_count();
                let finished =
                    std::mem::replace(&mut current, PageBuilder::continuation(doc.title()));
                debug!(page = pages.len(), fields, width, "page closed early");
                pages.push(finished.finish());
            }
            run = Some(FieldRun::start(field, item));
        }
    }

    if let Some(sealed) = run.take() {
        current.push_run(sealed);
    }
    // A trailing builder with no fields is only kept for the empty document.
    if current.field_count() > 0 || pages.is_empty() {
        pages.push(current.finish());
    }

    debug!(pages = pages.len(), "document packed");
    Ok(pages)
}

// ===== Tests =====
