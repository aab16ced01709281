use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{player::PlayerBar, popup::NotificationPopup, sidebar::Sidebar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let state = self.app.ctx.store.snapshot();

        if !state.is_authenticated() {
            self.app.router.render(f, area, &state, &self.app.ctx);
            self.render_notification(f, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(25), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];
        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("spotiterm")
            .title_alignment(Alignment::Center);

        let user_name = state
            .user_info
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or_default();
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(self.app.ui.current_route.label())
            .title_top(Line::from(user_name).right_aligned());

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);
        f.render_widget(
            Sidebar::new(
                self.app.ui.sidebar_index,
                &state.playlists,
                state.selected_playlist_id.as_deref(),
            ),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &state, &self.app.ctx);

        f.render_widget(
            PlayerBar::new(state.current_playing.as_deref(), state.player_state),
            player_area,
        );

        self.render_notification(f, area);
    }

    fn render_notification(&self, f: &mut Frame, area: Rect) {
        if let Some(notification) = self.app.notifications.latest() {
            let popup = NotificationPopup::new(&notification.message);
            let popup_area = popup.area(area);
            f.render_widget(popup, popup_area);
        }
    }
}
