use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::{
    event::events::Event,
    ops::NewPlaylist,
    store::AppState,
    ui::{
        context::AppContext,
        traits::{Command, View},
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Name,
    Link,
}

impl Mode {
    fn toggle(self) -> Self {
        match self {
            Mode::Name => Mode::Link,
            Mode::Link => Mode::Name,
        }
    }
}

/// Modal creating a playlist from a name or importing one from a share link.
#[derive(Default)]
pub struct CreatePlaylist {
    mode: Mode,
    input: String,
}

impl CreatePlaylist {
    fn request(&self) -> Option<NewPlaylist> {
        let input = self.input.trim();
        if input.is_empty() {
            return None;
        }
        Some(match self.mode {
            Mode::Name => NewPlaylist::ByName(input.to_string()),
            Mode::Link => NewPlaylist::ByLink(input.to_string()),
        })
    }
}

#[async_trait]
impl View for CreatePlaylist {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("Create playlist")
            .border_style(Style::default().fg(colors::PRIMARY));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        let tabs = Tabs::new(vec!["By name", "By link"])
            .select(match self.mode {
                Mode::Name => 0,
                Mode::Link => 1,
            })
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[0]);

        let title = match self.mode {
            Mode::Name => "Playlist name",
            Mode::Link => "https://open.spotify.com/playlist/...",
        };
        f.render_widget(
            Paragraph::new(self.input.as_str())
                .block(Block::default().borders(Borders::ALL).title(title)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new(Line::styled(
                "←/→ switch mode • enter create • esc cancel",
                Style::default().fg(colors::NEUTRAL),
            )),
            chunks[2],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        match key.code {
            KeyCode::Esc => return Some(Command::CloseOverlay),
            KeyCode::Left | KeyCode::Right => {
                self.mode = self.mode.toggle();
                self.input.clear();
            }
            KeyCode::Enter => {
                if let Some(request) = self.request() {
                    ctx.send(Event::CreatePlaylist(request));
                    return Some(Command::CloseOverlay);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Some(Command::Consumed)
    }

    fn on_paste(&mut self, text: &str) {
        self.input.push_str(text.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_makes_no_request() {
        let view = CreatePlaylist {
            input: "   ".into(),
            ..CreatePlaylist::default()
        };
        assert_eq!(view.request(), None);
    }

    #[test]
    fn request_follows_mode() {
        let mut view = CreatePlaylist {
            input: " Road trip ".into(),
            ..CreatePlaylist::default()
        };
        assert_eq!(view.request(), Some(NewPlaylist::ByName("Road trip".into())));

        view.mode = view.mode.toggle();
        assert_eq!(view.request(), Some(NewPlaylist::ByLink("Road trip".into())));
    }
}
