use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    event::events::Event,
    store::{AppState, Slice},
    ui::{
        context::AppContext,
        traits::{Command, View},
        util::{next_index, prev_index},
    },
    util::colors,
};

/// Checkbox picker adding the current track to several playlists.
#[derive(Default)]
pub struct AddToPlaylist {
    list_state: ListState,
    /// Checked ids in the order they were checked.
    checked: Vec<String>,
}

impl AddToPlaylist {
    fn toggle(&mut self, playlist_id: &str) {
        match self.checked.iter().position(|id| id == playlist_id) {
            Some(i) => {
                self.checked.remove(i);
            }
            None => self.checked.push(playlist_id.to_string()),
        }
    }

    /// Checked ids still in the sidebar, in the order they were checked.
    fn selection(&self, state: &AppState) -> Vec<String> {
        self.checked
            .iter()
            .filter(|id| state.playlists.iter().any(|p| &p.id == *id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl View for AddToPlaylist {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let title = match &state.current_playing {
            Some(track) => format!("Add \"{}\" to", track.name),
            None => "Add to playlists".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(title)
            .border_style(Style::default().fg(colors::PRIMARY));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = state
            .playlists
            .iter()
            .map(|playlist| {
                let mark = if self.checked.contains(&playlist.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                ListItem::new(format!("{mark} {}", playlist.name))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );

        if self.list_state.selected().is_none() && !state.playlists.is_empty() {
            self.list_state.select(Some(0));
        }
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        f.render_widget(
            Paragraph::new(Line::styled(
                "space check • enter add • esc cancel",
                Style::default().fg(colors::NEUTRAL),
            )),
            chunks[1],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        let len = state.playlists.len();
        match key.code {
            KeyCode::Esc => return Some(Command::CloseOverlay),
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state
                    .select(next_index(self.list_state.selected(), len));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state
                    .select(prev_index(self.list_state.selected(), len));
            }
            KeyCode::Char(' ') => {
                let selected = self.list_state.selected().and_then(|i| state.playlists.get(i));
                if let Some(playlist) = selected {
                    let id = playlist.id.clone();
                    self.toggle(&id);
                }
            }
            KeyCode::Enter => {
                let selection = self.selection(state);
                self.checked.clear();
                ctx.send(Event::AddToPlaylists(selection));
                return Some(Command::CloseOverlay);
            }
            _ => {}
        }
        Some(Command::Consumed)
    }

    fn on_state_change(&mut self, slice: Slice, state: &AppState) {
        if slice == Slice::Playlists {
            self.checked
                .retain(|id| state.playlists.iter().any(|p| &p.id == id));
            let len = state.playlists.len();
            let selected = self.list_state.selected().filter(|_| len > 0);
            self.list_state.select(selected.map(|i| i.min(len.saturating_sub(1))));
        }
    }
}

#[cfg(test)]
mod tests {
    use im::Vector;

    use super::*;
    use crate::model::PlaylistSummary;

    fn state() -> AppState {
        AppState {
            playlists: Vector::from(vec![
                PlaylistSummary::new("pl1", "Morning"),
                PlaylistSummary::new("pl2", "Gym"),
                PlaylistSummary::new("pl3", "Focus"),
            ]),
            ..AppState::default()
        }
    }

    #[test]
    fn selection_keeps_check_order() {
        let mut view = AddToPlaylist::default();
        view.toggle("pl3");
        view.toggle("pl1");
        view.toggle("pl2");
        view.toggle("pl2");
        assert_eq!(view.selection(&state()), vec!["pl3", "pl1"]);

        view.toggle("pl2");
        assert_eq!(view.selection(&state()), vec!["pl3", "pl1", "pl2"]);
    }

    #[test]
    fn removed_playlists_are_unchecked() {
        let mut view = AddToPlaylist::default();
        view.toggle("pl2");
        view.toggle("gone");

        view.on_state_change(Slice::Playlists, &state());
        assert_eq!(view.checked, ["pl2"]);
    }
}
