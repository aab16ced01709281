use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{model::CurrentlyPlaying, ui::util::get_active_track_icon, util::colors};

const HINTS: &str = "space play/pause • a add to playlist • c new playlist • x dismiss • q quit";

pub struct PlayerBar<'a> {
    playing: Option<&'a CurrentlyPlaying>,
    is_playing: bool,
}

impl<'a> PlayerBar<'a> {
    pub fn new(playing: Option<&'a CurrentlyPlaying>, is_playing: bool) -> Self {
        Self {
            playing,
            is_playing,
        }
    }
}

impl Widget for PlayerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(HINTS.chars().count() as u16 + 1)])
            .split(inner);

        let now_playing = match self.playing {
            Some(track) => Line::from(vec![
                Span::styled(
                    format!("{} ", get_active_track_icon(self.is_playing)),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(
                    track.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" - {}", track.artists.join(", ")),
                    Style::default().fg(colors::MUTED),
                ),
            ]),
            None => Line::from(Span::styled("No track", Style::default().fg(colors::NEUTRAL))),
        };

        Paragraph::new(now_playing).render(chunks[0], buf);
        Paragraph::new(Span::styled(HINTS, Style::default().fg(colors::NEUTRAL)))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
