use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// Small box in the bottom-right corner showing the newest notification.
pub struct NotificationPopup<'a> {
    message: &'a str,
}

impl<'a> NotificationPopup<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn area(&self, screen: Rect) -> Rect {
        let max_width = screen.width.min(50);
        let text_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(4).max(20).min(max_width);
        let inner_width = width.saturating_sub(2).max(1);
        let lines = text_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(screen.height);
        Rect {
            x: screen.x + screen.width.saturating_sub(width.saturating_add(1)),
            y: screen.y + screen.height.saturating_sub(height.saturating_add(3)),
            width,
            height,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(self.message)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(colors::SURFACE))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::PRIMARY)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_fits_on_small_screens() {
        let screen = Rect::new(0, 0, 30, 6);
        let area = NotificationPopup::new("Song added to selected playlists!").area(screen);
        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
        assert!(area.height >= 3);
    }

    #[test]
    fn oversized_message_stays_on_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let message = "e".repeat(70_000);
        let area = NotificationPopup::new(&message).area(screen);
        assert_eq!(area.width, 50);
        assert_eq!(area.height, 24);
        assert!(area.right() <= screen.right());
    }
}
