//! Width measurement shared by the packer and chunker.
//!
//! All size limits in this crate count Unicode scalar values, not bytes.
//! Every limit check goes through [`text_width`] so the packer and the
//! chunker can never disagree about how wide a piece of text is.

/// Width of a string in Unicode scalar values.
///
/// This is the unit every packing limit is expressed in. Byte length would
/// overcount multi-byte characters and split the two sides of a limit check
/// between incompatible units.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Width of the value produced by joining `items` with `joiner`.
///
/// Equivalent to `text_width(&items.join(joiner))` without building the
/// joined string.
pub fn joined_width<S: AsRef<str>>(items: &[S], joiner: &str) -> usize {
    let item_total: usize = items.iter().map(|i| text_width(i.as_ref())).sum();
    let joiner_total = text_width(joiner) * items.len().saturating_sub(1);
    item_total + joiner_total
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_ascii_chars() {
        assert_eq!(text_width("hello"), 5);
    }

    #[test]
    fn text_width_empty_string_is_zero() {
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn text_width_counts_scalars_not_bytes() {
        // "héllo" is 6 bytes in UTF-8 but 5 scalar values
        let s = "h\u{e9}llo";
        assert_eq!(s.len(), 6);
        assert_eq!(text_width(s), 5);
    }

    #[test]
    fn text_width_counts_cjk_as_one_each() {
        assert_eq!(text_width("\u{65e5}\u{672c}\u{8a9e}"), 3);
    }

    #[test]
    fn text_width_counts_newlines() {
        assert_eq!(text_width("a\nb"), 3);
    }

    #[test]
    fn joined_width_matches_actual_join() {
        let items = ["one", "two", "three"];
        let joiner = "\n\n";
        assert_eq!(joined_width(&items, joiner), text_width(&items.join(joiner)));
    }

    #[test]
    fn joined_width_single_item_has_no_joiner() {
        let items = ["only"];
        assert_eq!(joined_width(&items, "\n\n"), 4);
    }

    #[test]
    fn joined_width_empty_slice_is_zero() {
        let items: [&str; 0] = [];
        assert_eq!(joined_width(&items, "\n\n"), 0);
    }

    #[test]
    fn joined_width_with_multibyte_joiner() {
        let items = ["a", "b"];
        let joiner = "\u{2022}";
        assert_eq!(joined_width(&items, joiner), text_width(&items.join(joiner)));
    }
}
