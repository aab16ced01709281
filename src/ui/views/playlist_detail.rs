use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    event::events::Event,
    model::{Playlist, Track},
    store::{AppState, Slice},
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        traits::{Command, View},
        util::{get_active_track_icon, next_index, prev_index},
    },
    util::{colors, format},
};

/// Track table of the selected playlist.
#[derive(Default)]
pub struct PlaylistDetail {
    table_state: TableState,
    confirm_delete: bool,
}

impl PlaylistDetail {
    /// The loaded playlist, if it matches the current selection.
    fn playlist(state: &AppState) -> Option<&Playlist> {
        let playlist = state.selected_playlist.as_deref()?;
        (state.selected_playlist_id.as_deref() == Some(playlist.id.as_str())).then_some(playlist)
    }

    fn selected_track<'a>(&self, state: &'a AppState) -> Option<&'a Track> {
        let playlist = Self::playlist(state)?;
        playlist.tracks.get(self.table_state.selected()?)
    }

    fn clamp_selection(&mut self, len: usize) {
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, playlist: &Playlist) {
        let status = if self.confirm_delete {
            Line::from(Span::styled(
                "Delete this song? enter confirm • esc cancel",
                Style::default()
                    .fg(colors::DANGER)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "enter play • d delete • s share",
                Style::default().fg(colors::NEUTRAL),
            ))
        };

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                playlist.name.clone(),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(colors::PRIMARY),
            )),
            Line::from(Span::styled(
                playlist.description.clone(),
                Style::default().fg(colors::MUTED),
            )),
            Line::from(format!(
                "{} songs • {}",
                playlist.tracks.len(),
                format::long_duration_ms(playlist.total_duration_ms())
            )),
            status,
        ])
        .block(Block::default().borders(Borders::BOTTOM));

        f.render_widget(header, area);
    }
}

#[async_trait]
impl View for PlaylistDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(playlist) = Self::playlist(state) else {
            if state.selected_playlist_id.is_some() {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading...");
                f.render_widget(spinner, area);
            } else {
                f.render_widget(
                    Paragraph::new("Pick a playlist from your library.")
                        .style(Style::default().fg(colors::NEUTRAL)),
                    area,
                );
            }
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0], playlist);
        self.clamp_selection(playlist.tracks.len());

        let current_uri = state.current_uri();
        let rows: Vec<Row> = playlist
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_current = current_uri == Some(track.uri.as_str());
                let number = if is_current {
                    get_active_track_icon(state.player_state).to_string()
                } else {
                    (i + 1).to_string()
                };

                let row = Row::new(vec![
                    Cell::from(number),
                    Cell::from(Line::from(vec![
                        Span::raw(track.name.clone()),
                        Span::styled(
                            format!("  {}", track.artists_line()),
                            Style::default().fg(colors::MUTED),
                        ),
                    ])),
                    Cell::from(track.album.clone()),
                    Cell::from(format::duration_ms(track.duration_ms)),
                ]);

                if is_current {
                    row.style(Style::default().fg(colors::PRIMARY))
                } else {
                    row
                }
            })
            .collect();

        let highlight = if self.confirm_delete {
            Style::default().bg(colors::DANGER)
        } else {
            Style::default()
                .bg(colors::SURFACE)
                .add_modifier(Modifier::BOLD)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(55),
                Constraint::Percentage(35),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["#", "Title", "Album", "Time"])
                .style(Style::default().fg(colors::NEUTRAL)),
        )
        .row_highlight_style(highlight);

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        let len = Self::playlist(state).map_or(0, |p| p.tracks.len());
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.confirm_delete = false;
                self.table_state
                    .select(next_index(self.table_state.selected(), len));
                Some(Command::Consumed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.confirm_delete = false;
                self.table_state
                    .select(prev_index(self.table_state.selected(), len));
                Some(Command::Consumed)
            }
            KeyCode::Char('g') if len > 0 => {
                self.table_state.select(Some(0));
                Some(Command::Consumed)
            }
            KeyCode::Char('G') if len > 0 => {
                self.table_state.select(Some(len - 1));
                Some(Command::Consumed)
            }
            KeyCode::Enter => {
                let track = self.selected_track(state)?.clone();
                if self.confirm_delete {
                    self.confirm_delete = false;
                    ctx.send(Event::DeleteTrack(track));
                } else {
                    ctx.send(Event::PlayTrack(track));
                }
                Some(Command::Consumed)
            }
            KeyCode::Char('d') => {
                self.selected_track(state)?;
                self.confirm_delete = !self.confirm_delete;
                Some(Command::Consumed)
            }
            KeyCode::Esc if self.confirm_delete => {
                self.confirm_delete = false;
                Some(Command::Consumed)
            }
            KeyCode::Char('s') => {
                let playlist = Self::playlist(state)?;
                ctx.send(Event::Notify(format!("Share link: {}", playlist.share_url())));
                Some(Command::Consumed)
            }
            _ => None,
        }
    }

    fn on_state_change(&mut self, slice: Slice, state: &AppState) {
        match slice {
            Slice::SelectedPlaylistId => {
                self.confirm_delete = false;
                self.table_state.select(None);
            }
            Slice::SelectedPlaylist => {
                let len = Self::playlist(state).map_or(0, |p| p.tracks.len());
                self.clamp_selection(len);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use im::Vector;

    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.into(),
            name: format!("Song {id}"),
            uri: format!("spotify:track:{id}"),
            ..Track::default()
        }
    }

    fn state_with(tracks: Vec<Track>) -> AppState {
        AppState {
            selected_playlist_id: Some("p1".into()),
            selected_playlist: Some(Arc::new(Playlist {
                id: "p1".into(),
                name: "Chill".into(),
                tracks: Vector::from(tracks),
                ..Playlist::default()
            })),
            ..AppState::default()
        }
    }

    #[test]
    fn stale_playlist_is_not_shown() {
        let mut state = state_with(vec![track("a")]);
        state.selected_playlist_id = Some("p2".into());
        assert!(PlaylistDetail::playlist(&state).is_none());
    }

    #[test]
    fn selection_follows_shrinking_playlist() {
        let mut view = PlaylistDetail::default();
        view.table_state.select(Some(2));

        let state = state_with(vec![track("a"), track("b")]);
        view.on_state_change(Slice::SelectedPlaylist, &state);
        assert_eq!(view.table_state.selected(), Some(1));
        assert_eq!(view.selected_track(&state).map(|t| t.id.as_str()), Some("b"));

        let empty = state_with(Vec::new());
        view.on_state_change(Slice::SelectedPlaylist, &empty);
        assert_eq!(view.table_state.selected(), None);
    }

    #[test]
    fn switching_playlist_cancels_delete() {
        let mut view = PlaylistDetail {
            confirm_delete: true,
            ..PlaylistDetail::default()
        };
        view.on_state_change(Slice::SelectedPlaylistId, &AppState::default());
        assert!(!view.confirm_delete);
        assert_eq!(view.table_state.selected(), None);
    }
}
