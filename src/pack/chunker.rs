//! Line-oriented chunking of plain text into page-sized strings.
//!
//! Used for undecorated content that has no field structure: lines are
//! joined with `'\n'` into buffers that flush before reaching the width
//! budget. Lines are never split, so a single line wider than the budget
//! still comes through intact on its own page.

use crate::model::measure::text_width;

/// Default width budget in chars for a chunked page.
pub const DEFAULT_CHUNK_LIMIT: usize = 1989;

/// Split `lines` into newline-joined pages each narrower than `chunk_limit`.
///
/// The buffer flushes as soon as appending the next line would reach or
/// exceed the budget, and the final non-empty buffer always flushes, so no
/// trailing content is lost. Only non-empty buffers flush, so no emitted
/// page is ever empty. Empty input yields no pages.
pub fn chunk_lines<I, S>(lines: I, chunk_limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pages = Vec::new();
    let mut buffer: Option<String> = None;
    let mut buffer_width = 0usize;

    for line in lines {
        let line = line.as_ref();
        let line_width = text_width(line);
        match buffer.as_mut() {
            None => {
                buffer = Some(line.to_string());
                buffer_width = line_width;
            }
            Some(buf) => {
                if buffer_width + 1 + line_width >= chunk_limit {
                    // A buffer holding only an empty line flushes nothing.
                    if !buf.is_empty() {
                        pages.push(std::mem::take(buf));
                    }
                    buf.push_str(line);
                    buffer_width = line_width;
                } else {
                    buf.push('\n');
                    buf.push_str(line);
                    buffer_width += 1 + line_width;
                }
            }
        }
    }

    if let Some(buf) = buffer {
        if !buf.is_empty() {
            pages.push(buf);
        }
    }
    pages
}

// ===== Tests =====
