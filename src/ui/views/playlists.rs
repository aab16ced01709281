use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
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

/// The user's library: every playlist from the sidebar, selectable.
#[derive(Default)]
pub struct Playlists {
    list_state: ListState,
}

#[async_trait]
impl View for Playlists {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        if state.playlists.is_empty() {
            f.render_widget(
                Paragraph::new("No playlists yet. Press c to create one.")
                    .style(Style::default().fg(colors::NEUTRAL)),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = state
            .playlists
            .iter()
            .map(|playlist| {
                let mut item = ListItem::new(playlist.name.clone());
                if state.selected_playlist_id.as_deref() == Some(playlist.id.as_str()) {
                    item = item.style(Style::default().fg(colors::PRIMARY));
                }
                item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        let len = state.playlists.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state
                    .select(next_index(self.list_state.selected(), len));
                Some(Command::Consumed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state
                    .select(prev_index(self.list_state.selected(), len));
                Some(Command::Consumed)
            }
            KeyCode::Enter => {
                let playlist = state.playlists.get(self.list_state.selected()?)?;
                ctx.send(Event::SelectPlaylist(playlist.id.clone()));
                Some(Command::Consumed)
            }
            _ => None,
        }
    }

    fn on_state_change(&mut self, slice: Slice, state: &AppState) {
        if slice == Slice::Playlists {
            let len = state.playlists.len();
            let selected = self.list_state.selected().filter(|_| len > 0);
            self.list_state.select(selected.map(|i| i.min(len.saturating_sub(1))));
        }
    }
}
