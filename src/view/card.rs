//! Card widget: one page rendered as a bordered block.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{text_width, Page};

use super::styles::{CardStyles, ColorConfig};

/// Render one page as a card.
///
/// The page title becomes the block title. The body shows the description
/// first, then each field: an inline field with a single-line value sits
/// on one `name: value` line, everything else gets a name line followed by
/// the value lines. `scroll` shifts the body down for long cards.
pub fn render_card(frame: &mut Frame, area: Rect, page: &Page, styles: &CardStyles, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(page.title().to_string(), styles.title()));
    let paragraph = Paragraph::new(body_lines(page, styles))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Number of terminal rows the card body occupies when wrapped at `width`,
/// the card's outer width. For scroll clamping.
///
/// The body wraps inside the borders, so rows are counted against a width
/// two columns narrower; a blank line still takes one row.
pub fn card_row_count(page: &Page, width: u16) -> usize {
    let styles = CardStyles::with_color_config(ColorConfig::from_env_and_args(true));
    let content_width = usize::from(width.saturating_sub(2)).max(1);
    body_lines(page, &styles)
        .iter()
        .map(|line| {
            let line_width: usize = line
                .spans
                .iter()
                .map(|span| text_width(span.content.as_ref()))
                .sum();
            line_width.div_ceil(content_width).max(1)
        })
        .sum()
}

fn body_lines(page: &Page, styles: &CardStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(desc) = page.description() {
        for line in desc.lines() {
            lines.push(Line::styled(line.to_string(), styles.description()));
        }
        if !page.fields().is_empty() {
            lines.push(Line::default());
        }
    }

    for (index, field) in page.fields().iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        let value = field.value();
        if field.inline() && !value.contains('\n') {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", field.name()), styles.field_name()),
                Span::styled(value, styles.field_value()),
            ]));
        } else {
            lines.push(Line::styled(field.name().to_string(), styles.field_name()));
            for line in value.lines() {
                lines.push(Line::styled(line.to_string(), styles.field_value()));
            }
        }
    }

    lines
}

// ===== Tests =====
