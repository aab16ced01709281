use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    event::events::Event,
    model::Suggestion,
    store::AppState,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        traits::{Command, View},
        util::{get_active_track_icon, next_index, prev_index},
    },
    util::colors,
};

/// Search box with a live suggestion list underneath.
pub struct Search {
    input: String,
    is_editing: bool,
    list_state: ListState,
    results: Vec<Suggestion>,
    is_loading: bool,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            input: String::new(),
            is_editing: true,
            list_state: ListState::default(),
            results: Vec::new(),
            is_loading: false,
        }
    }
}

impl Search {
    fn query_changed(&mut self, ctx: &AppContext) {
        self.list_state.select(None);
        if self.input.trim().is_empty() {
            self.results.clear();
            self.is_loading = false;
        } else {
            self.is_loading = true;
        }
        ctx.send(Event::Search(self.input.clone()));
    }

    fn activate(&self, ctx: &AppContext) {
        let Some(suggestion) = self.list_state.selected().and_then(|i| self.results.get(i)) else {
            return;
        };

        match suggestion {
            Suggestion::Track(track) => ctx.send(Event::PlaySuggestion(track.clone())),
            other => {
                let message = match other.external_url() {
                    Some(url) => format!("Open {}: {url}", other.name()),
                    None => format!("No link for {}", other.name()),
                };
                ctx.send(Event::Notify(message));
            }
        }
    }

    fn suggestion_item<'a>(suggestion: &'a Suggestion, state: &AppState) -> ListItem<'a> {
        let tag = Span::styled(
            format!("{:<7}", suggestion.kind()),
            Style::default().fg(colors::NEUTRAL),
        );

        match suggestion {
            Suggestion::Track(track) => {
                let is_current = state.current_uri() == Some(track.uri.as_str());
                let prefix = if is_current {
                    format!("{} ", get_active_track_icon(state.player_state))
                } else {
                    "  ".to_string()
                };
                let item = ListItem::new(Line::from(vec![
                    Span::raw(prefix),
                    tag,
                    Span::raw(track.name.as_str()),
                    Span::styled(
                        format!(" - {}", track.artists.join(", ")),
                        Style::default().fg(colors::MUTED),
                    ),
                ]));
                if is_current {
                    item.style(Style::default().fg(colors::PRIMARY))
                } else {
                    item
                }
            }
            Suggestion::Album { name, artists, .. } => ListItem::new(Line::from(vec![
                Span::raw("  "),
                tag,
                Span::raw(name.as_str()),
                Span::styled(
                    format!(" - {}", artists.join(", ")),
                    Style::default().fg(colors::MUTED),
                ),
            ])),
            Suggestion::Artist { name, .. } => {
                ListItem::new(Line::from(vec![Span::raw("  "), tag, Span::raw(name.as_str())]))
            }
        }
    }
}

#[async_trait]
impl View for Search {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("What do you want to listen to?")
            .border_style(input_style);
        f.render_widget(
            Paragraph::new(self.input.as_str()).block(input_block),
            chunks[0],
        );

        if self.is_loading && self.results.is_empty() {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Searching...");
            f.render_widget(spinner, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|s| Self::suggestion_item(s, state))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        let len = self.results.len();

        if self.is_editing {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return None;
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.query_changed(ctx);
                }
                KeyCode::Backspace => {
                    if self.input.pop().is_some() {
                        self.query_changed(ctx);
                    }
                }
                KeyCode::Down | KeyCode::Enter if len > 0 => {
                    self.is_editing = false;
                    self.list_state.select(Some(0));
                }
                KeyCode::Esc => self.is_editing = false,
                _ => {}
            }
            return Some(Command::Consumed);
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.is_editing = true;
                Some(Command::Consumed)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state
                    .select(next_index(self.list_state.selected(), len));
                Some(Command::Consumed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.list_state.selected() == Some(0) {
                    self.is_editing = true;
                } else {
                    self.list_state
                        .select(prev_index(self.list_state.selected(), len));
                }
                Some(Command::Consumed)
            }
            KeyCode::Enter => {
                self.activate(ctx);
                Some(Command::Consumed)
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::SearchResults(query, results) = event {
            // Answers to an older query arrive late and are dropped.
            if *query != self.input {
                return;
            }
            self.results = results.clone();
            self.is_loading = false;
            if self.list_state.selected().is_some_and(|i| i >= self.results.len()) {
                self.list_state.select(None);
            }
        }
    }
}
