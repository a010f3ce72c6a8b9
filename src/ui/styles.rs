//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for section headings inside a view.
pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for regular list entries.
pub fn entry_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the selected list entry.
pub fn selected_entry_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Style for hints and notices (dimmed).
pub fn note_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the welcome banner line.
pub fn banner_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for the identity segment of the status line.
pub fn status_identity_style() -> Style {
    Style::default().fg(Color::Cyan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_style_is_bold_white() {
        let style = heading_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn selected_entry_style_is_reversed() {
        let style = selected_entry_style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn note_style_is_dark_gray() {
        assert_eq!(note_style().fg, Some(Color::DarkGray));
    }

    #[test]
    fn banner_style_is_green() {
        assert_eq!(banner_style().fg, Some(Color::Green));
    }
}
