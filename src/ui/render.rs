use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::nav::view::ContentLine;

use super::{shell::Shell, styles};

pub fn render(frame: &mut Frame<'_>, shell: &Shell) {
    let [banner_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if shell.banner_message().is_some() { 1 } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    if let Some(message) = shell.banner_message() {
        let banner = Paragraph::new(Span::styled(message.to_owned(), styles::banner_style()));
        frame.render_widget(banner, banner_area);
    }

    render_content(frame, content_area, shell);

    let status = Paragraph::new(status_line(shell));
    frame.render_widget(status, status_area);
}

fn render_content(frame: &mut Frame<'_>, area: Rect, shell: &Shell) {
    let content = shell.content();
    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line<'static>> = content
        .lines
        .iter()
        .map(|line| content_line(line, inner_width))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(content.title.clone())
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn content_line(line: &ContentLine, width: usize) -> Line<'static> {
    match line {
        ContentLine::Heading(text) => Line::from(Span::styled(
            clip_to_width(text, width),
            styles::heading_style(),
        )),
        ContentLine::Entry { text, selected } => {
            let (marker, style) = if *selected {
                ("> ", styles::selected_entry_style())
            } else {
                ("  ", styles::entry_style())
            };
            let body = clip_to_width(text, width.saturating_sub(marker.len()));
            Line::from(Span::styled(format!("{marker}{body}"), style))
        }
        ContentLine::Note(text) => Line::from(Span::styled(
            clip_to_width(text, width),
            styles::note_style(),
        )),
        ContentLine::Blank => Line::from(""),
    }
}

fn status_line(shell: &Shell) -> Line<'static> {
    let profile = shell.profile();
    let mut hints = Vec::new();
    if shell.can_navigate_back() {
        hints.push("esc back");
    }
    hints.push("h home");
    hints.push("q quit");

    Line::from(vec![
        Span::styled(
            format!("{} ({})", profile.display_name, profile.role.label()),
            styles::status_identity_style(),
        ),
        Span::styled(format!("  ·  {}", hints.join(" · ")), styles::note_style()),
    ])
}

/// Truncates `text` to at most `width` terminal columns, appending an
/// ellipsis when something was cut.
fn clip_to_width(text: &str, width: usize) -> String {
    let mut columns = 0;
    let mut clipped = String::new();

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if columns + ch_width > width.saturating_sub(1) {
            // Keep one column in reserve for the ellipsis.
            let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
            if total <= width {
                break;
            }
            clipped.push('…');
            return clipped;
        }
        columns += ch_width;
        clipped.push(ch);
    }

    text.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(clip_to_width("hello", 10), "hello");
    }

    #[test]
    fn exact_fit_is_untouched() {
        assert_eq!(clip_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_width() {
        let clipped = clip_to_width("a very long conference name", 10);

        assert!(clipped.ends_with('…'));
        let columns: usize = clipped.chars().filter_map(UnicodeWidthChar::width).sum();
        assert!(columns <= 10);
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        let clipped = clip_to_width("日本語カンファレンス", 8);

        let columns: usize = clipped.chars().filter_map(UnicodeWidthChar::width).sum();
        assert!(columns <= 8);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn selected_entry_gets_a_marker() {
        let line = content_line(
            &ContentLine::Entry {
                text: "RustNative Days".to_owned(),
                selected: true,
            },
            40,
        );

        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(text.starts_with("> "));
    }
}
