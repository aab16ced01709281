use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::{model::PlaylistSummary, ui::state::Route, util::colors, util::format::truncate};

/// Navigation entries on top, the user's playlists below.
pub struct Sidebar<'a> {
    selected_index: usize,
    playlists: &'a im::Vector<PlaylistSummary>,
    selected_playlist: Option<&'a str>,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        selected_index: usize,
        playlists: &'a im::Vector<PlaylistSummary>,
        selected_playlist: Option<&'a str>,
    ) -> Self {
        Self {
            selected_index,
            playlists,
            selected_playlist,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Route::SIDEBAR.len() as u16 + 1),
                Constraint::Min(0),
            ])
            .split(area);

        let nav: Vec<ListItem> = Route::SIDEBAR
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::MUTED)
                };
                ListItem::new(format!("  {}", route.label())).style(style)
            })
            .collect();
        List::new(nav).render(chunks[0], buf);

        let width = chunks[1].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .playlists
            .iter()
            .map(|playlist| {
                let style = if self.selected_playlist == Some(playlist.id.as_str()) {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!("  {}", truncate(&playlist.name, width))).style(style)
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(colors::SURFACE))
                    .title(Line::from(" Playlists ").style(Style::default().fg(colors::MUTED))),
            )
            .render(chunks[1], buf);
    }
}
