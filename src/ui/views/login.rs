use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    event::events::Event,
    store::AppState,
    ui::{
        context::AppContext,
        traits::{Command, View},
        util::centered_rect,
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    Email,
    Username,
    Password,
    Token,
}

impl Field {
    const ALL: [Field; 4] = [Field::Email, Field::Username, Field::Password, Field::Token];

    fn title(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Username => "Username",
            Field::Password => "Password",
            Field::Token => "Access token",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Account form shown until a token is in the store.
#[derive(Default)]
pub struct Login {
    email: String,
    username: String,
    password: String,
    token: String,
    focus: Field,
    login_status: Option<String>,
    register_status: Option<String>,
    authorize_url: Option<String>,
}

impl Login {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::Token => &mut self.token,
        }
    }

    fn field_text(&self, field: Field) -> String {
        match field {
            Field::Email => self.email.clone(),
            Field::Username => self.username.clone(),
            Field::Password => "•".repeat(self.password.chars().count()),
            Field::Token => self.token.clone(),
        }
    }

    fn submit(&mut self, ctx: &AppContext) {
        if self.focus == Field::Token {
            if !self.token.trim().is_empty() {
                ctx.send(Event::SubmitToken(self.token.clone()));
            }
            return;
        }

        self.login_status = Some("Logging in...".to_string());
        ctx.send(Event::Login {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        });
    }

    fn apply(&mut self, event: &Event) {
        match event {
            Event::LoginStatus(message) => self.login_status = Some(message.clone()),
            Event::RegisterStatus(message) => self.register_status = Some(message.clone()),
            Event::AuthorizeReady(url) => {
                self.login_status = None;
                self.authorize_url = Some(url.clone());
                self.focus = Field::Token;
            }
            _ => {}
        }
    }

    fn register(&mut self, ctx: &AppContext) {
        self.register_status = Some("Creating account...".to_string());
        ctx.send(Event::Register {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        });
    }
}

#[async_trait]
impl View for Login {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let form_area = centered_rect(60, 80, area);
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Min(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(form_area);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "spotiterm",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        for (i, field) in Field::ALL.iter().enumerate() {
            let border = if *field == self.focus {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            let input = Paragraph::new(self.field_text(*field)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.title())
                    .border_style(border),
            );
            f.render_widget(input, chunks[i + 1]);
        }

        let mut lines = vec![Line::from(Span::styled(
            "enter login • ctrl+r register • tab next field • enter on token to continue",
            Style::default().fg(colors::NEUTRAL),
        ))];
        for (label, status) in [
            ("Login", &self.login_status),
            ("Register", &self.register_status),
        ] {
            if let Some(status) = status {
                lines.push(Line::from(Span::styled(
                    format!("{label}: {status}"),
                    Style::default().fg(colors::MUTED),
                )));
            }
        }
        if let Some(url) = &self.authorize_url {
            lines.push(Line::from("Open this page, then paste the access token:"));
            lines.push(Line::from(Span::styled(
                url.clone(),
                Style::default().fg(colors::PRIMARY),
            )));
        }

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[Field::ALL.len() + 1],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.register(ctx)
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Backspace => {
                self.field_mut(self.focus).pop();
            }
            KeyCode::Char(c) => self.field_mut(self.focus).push(c),
            _ => {}
        }
        Some(Command::Consumed)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        self.apply(event);
    }

    fn on_paste(&mut self, text: &str) {
        let text = text.trim();
        self.field_mut(self.focus).push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_around() {
        assert_eq!(Field::Email.prev(), Field::Token);
        assert_eq!(Field::Token.next(), Field::Email);
        assert_eq!(Field::Username.next(), Field::Password);
    }

    #[test]
    fn paste_goes_to_focused_field() {
        let mut view = Login {
            focus: Field::Token,
            ..Login::default()
        };
        view.on_paste("  BQD-token \n");
        assert_eq!(view.token, "BQD-token");
        assert_eq!(view.field_text(Field::Password), "");
    }

    #[test]
    fn login_and_register_report_separately() {
        let mut view = Login {
            login_status: Some("Logging in...".into()),
            ..Login::default()
        };

        view.apply(&Event::RegisterStatus("ACCOUNT CREATED SUCCESSFULLY".into()));
        view.apply(&Event::LoginStatus("Login failed: Host unreachable".into()));

        assert_eq!(
            view.login_status.as_deref(),
            Some("Login failed: Host unreachable")
        );
        assert_eq!(
            view.register_status.as_deref(),
            Some("ACCOUNT CREATED SUCCESSFULLY")
        );

        view.apply(&Event::AuthorizeReady("https://accounts.spotify.com/authorize".into()));
        assert_eq!(view.login_status, None);
        assert!(view.register_status.is_some());
        assert_eq!(view.focus, Field::Token);
    }

    #[test]
    fn password_is_masked() {
        let view = Login {
            password: "hunter2".into(),
            ..Login::default()
        };
        assert_eq!(view.field_text(Field::Password), "•••••••");
    }
}
